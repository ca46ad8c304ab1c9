//! Core Types für die Dimmer-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Ein/Aus-Zustand des Dimmers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PowerState {
    #[cfg_attr(feature = "serde", serde(rename = "ON"))]
    On,
    #[cfg_attr(feature = "serde", serde(rename = "OFF"))]
    Off,
}

impl PowerState {
    pub fn is_on(self) -> bool {
        self == PowerState::On
    }
}

impl From<bool> for PowerState {
    fn from(on: bool) -> Self {
        if on { PowerState::On } else { PowerState::Off }
    }
}

impl core::ops::Not for PowerState {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            PowerState::On => PowerState::Off,
            PowerState::Off => PowerState::On,
        }
    }
}

/// Dimmer Command von einer Eingabequelle
///
/// Wird vom Message-Parser oder Taster an den Dimmer-Task gesendet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimmerCommand {
    /// Setzt Zustand und/oder Helligkeit; fehlende Felder bleiben unverändert
    Set {
        state: Option<PowerState>,
        brightness: Option<u8>,
        transition_ms: Option<i32>,
    },
    /// Schaltet zwischen an und aus um
    Toggle { transition_ms: Option<i32> },
}

impl DimmerCommand {
    /// Kommando nur für den Ein/Aus-Zustand
    pub fn power(state: PowerState, transition_ms: Option<i32>) -> Self {
        DimmerCommand::Set {
            state: Some(state),
            brightness: None,
            transition_ms,
        }
    }
}

/// Status-Report für externe Empfänger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DimmerState {
    pub state: PowerState,
    /// Einschalt-Helligkeit (bleibt im ausgeschalteten Zustand erhalten)
    pub brightness: u8,
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for PowerState {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PowerState::On => defmt::write!(fmt, "ON"),
            PowerState::Off => defmt::write!(fmt, "OFF"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DimmerCommand {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            DimmerCommand::Set {
                state,
                brightness,
                transition_ms,
            } => {
                defmt::write!(
                    fmt,
                    "Set {{ state: {}, brightness: {}, transition_ms: {} }}",
                    state,
                    brightness,
                    transition_ms
                )
            }
            DimmerCommand::Toggle { transition_ms } => {
                defmt::write!(fmt, "Toggle {{ transition_ms: {} }}", transition_ms)
            }
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DimmerState {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "DimmerState {{ state: {}, brightness: {} }}",
            self.state,
            self.brightness
        )
    }
}
