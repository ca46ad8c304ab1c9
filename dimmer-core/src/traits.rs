//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

/// Fehler-Typ für PWM-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PwmError {
    WriteFailed,
}

impl core::fmt::Display for PwmError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PwmError::WriteFailed => write!(f, "PWM write failed"),
        }
    }
}

/// Trait für PWM Hardware-Zugriff
///
/// Abstrahiert den Zugriff auf einen dimmbaren LED-Ausgang.
///
/// # Implementierungen
/// - **Production:** LedcPwmWriter (ESP32 LEDC Peripheral)
/// - **Testing:** MockPwmWriter (in-memory Mock)
pub trait PwmWriter {
    /// Schreibt einen 8-Bit Duty-Wert auf den Ausgang
    ///
    /// # Fehlerbehandlung
    /// Gibt `PwmError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write(&mut self, level: u8) -> Result<(), PwmError>;
}

#[cfg(feature = "defmt")]
impl defmt::Format for PwmError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PwmError::WriteFailed => defmt::write!(fmt, "WriteFailed"),
        }
    }
}
