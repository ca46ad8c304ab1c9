//! Dimmer-Konfiguration
//!
//! Unveränderliche Einstellungen, die einmal beim Start geladen und
//! per Wert an den Controller übergeben werden.

use crate::transition::{LEVEL_FULL, LEVEL_OFF};
use crate::types::PowerState;

/// Fehler bei ungültiger Konfiguration
///
/// Wird vor dem ersten Übergang erkannt - zur Laufzeit gibt es
/// keinen sinnvollen Helligkeitsbereich, auf den man ausweichen könnte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// `min_brightness` liegt über `max_brightness`
    BrightnessRange { min: u8, max: u8 },
    /// `transition_speed_ms` ist 0
    ZeroTransitionSpeed,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::BrightnessRange { min, max } => {
                write!(f, "min_brightness {} > max_brightness {}", min, max)
            }
            ConfigError::ZeroTransitionSpeed => write!(f, "transition_speed_ms must be > 0"),
        }
    }
}

/// Gerätekonfiguration für den Dimmer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimmerConfig {
    /// Abstand zwischen zwei Übergangs-Schritten in Millisekunden
    pub transition_speed_ms: u32,
    /// Intervall für den periodischen Status-Report in Millisekunden
    pub call_state_delay_ms: u32,
    /// GPIO-Nummer des PWM-Ausgangs
    pub led_pin: u8,
    /// Payload-Token für "an"
    pub payload_on: &'static str,
    /// Payload-Token für "aus"
    pub payload_off: &'static str,
    /// false: 0 (aus) - 255 (hell), true: 255 (aus) - 0 (hell)
    pub invert_logic: bool,
    /// Aktiviert Diagnose-Ausgaben pro Schritt
    pub debug_enabled: bool,
    pub min_brightness: u8,
    pub max_brightness: u8,
    pub default_brightness: u8,
    /// Einschaltzustand nach dem Boot
    pub default_state: bool,
}

impl DimmerConfig {
    /// Werkseinstellungen (Bierschild: Pin 12, max. Helligkeit 128)
    pub const DEFAULT: Self = Self {
        transition_speed_ms: 3,
        call_state_delay_ms: 10_000,
        led_pin: 12,
        payload_on: "ON",
        payload_off: "OFF",
        invert_logic: false,
        debug_enabled: false,
        min_brightness: 1,
        max_brightness: 128,
        default_brightness: 255,
        default_state: false,
    };

    /// Prüft die Invarianten der Konfiguration
    ///
    /// `const fn`, damit die Firmware eine fehlerhafte Konfiguration
    /// bereits beim Kompilieren ablehnen kann.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.min_brightness > self.max_brightness {
            return Err(ConfigError::BrightnessRange {
                min: self.min_brightness,
                max: self.max_brightness,
            });
        }
        if self.transition_speed_ms == 0 {
            return Err(ConfigError::ZeroTransitionSpeed);
        }
        Ok(())
    }

    /// Begrenzt einen Level auf `[min_brightness, max_brightness]`
    ///
    /// Level 0 (komplett aus) wird nie angehoben, damit das Gerät
    /// vollständig ausschalten kann.
    pub fn clamp_level(&self, level: u8) -> u8 {
        if level == LEVEL_OFF {
            LEVEL_OFF
        } else {
            self.clamp_brightness(level)
        }
    }

    /// Begrenzt eine Einschalt-Helligkeit auf `[min_brightness, max_brightness]`
    ///
    /// Anders als [`clamp_level`](Self::clamp_level) wird auch 0 angehoben.
    pub fn clamp_brightness(&self, level: u8) -> u8 {
        // kein u8::clamp: panikt bei min > max (unvalidierte Konfiguration)
        level.max(self.min_brightness).min(self.max_brightness)
    }

    /// Bildet einen internen Level auf den Hardware-Wert ab
    pub fn hardware_level(&self, level: u8) -> u8 {
        let level = self.clamp_level(level);
        if self.invert_logic {
            LEVEL_FULL - level
        } else {
            level
        }
    }

    /// Einschalt-Helligkeit nach dem Boot
    pub fn initial_brightness(&self) -> u8 {
        self.clamp_brightness(self.default_brightness)
    }

    /// Einschaltzustand nach dem Boot
    pub fn initial_power(&self) -> PowerState {
        PowerState::from(self.default_state)
    }

    /// Übersetzt ein Payload-Token ("ON"/"OFF") in einen [`PowerState`]
    ///
    /// Unbekannte Tokens ergeben `None` und werden vom Aufrufer ignoriert.
    pub fn parse_power(&self, payload: &str) -> Option<PowerState> {
        if payload == self.payload_on {
            Some(PowerState::On)
        } else if payload == self.payload_off {
            Some(PowerState::Off)
        } else {
            None
        }
    }
}

impl Default for DimmerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            ConfigError::BrightnessRange { min, max } => {
                defmt::write!(fmt, "BrightnessRange {{ min: {}, max: {} }}", min, max)
            }
            ConfigError::ZeroTransitionSpeed => defmt::write!(fmt, "ZeroTransitionSpeed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(DimmerConfig::DEFAULT.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_min_above_max() {
        let config = DimmerConfig {
            min_brightness: 200,
            max_brightness: 100,
            ..DimmerConfig::DEFAULT
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::BrightnessRange { min: 200, max: 100 })
        );
    }

    #[test]
    fn test_validate_rejects_zero_speed() {
        let config = DimmerConfig {
            transition_speed_ms: 0,
            ..DimmerConfig::DEFAULT
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTransitionSpeed));
    }

    #[test]
    fn test_clamp_level_keeps_off() {
        let config = DimmerConfig::DEFAULT;
        assert_eq!(config.clamp_level(0), 0);
        assert_eq!(config.clamp_level(1), 1);
        assert_eq!(config.clamp_level(200), 128);
    }

    #[test]
    fn test_clamp_level_raises_to_min() {
        let config = DimmerConfig {
            min_brightness: 10,
            ..DimmerConfig::DEFAULT
        };
        assert_eq!(config.clamp_level(3), 10);
        assert_eq!(config.clamp_brightness(0), 10);
    }

    #[test]
    fn test_hardware_level_inverted() {
        let config = DimmerConfig {
            invert_logic: true,
            ..DimmerConfig::DEFAULT
        };
        assert_eq!(config.hardware_level(0), 255);
        assert_eq!(config.hardware_level(100), 155);
        assert_eq!(config.hardware_level(128), 127);
    }

    #[test]
    fn test_initial_brightness_clamped_to_max() {
        assert_eq!(DimmerConfig::DEFAULT.initial_brightness(), 128);
        assert_eq!(DimmerConfig::DEFAULT.initial_power(), PowerState::Off);
    }

    #[test]
    fn test_default_timing() {
        let config = DimmerConfig::DEFAULT;
        assert_eq!(config.transition_speed_ms, 3);
        assert_eq!(config.call_state_delay_ms, 10_000);
        assert_eq!(
            DimmerConfig {
                call_state_delay_ms: 500,
                ..config
            }
            .validate(),
            Ok(())
        );
    }

    #[test]
    fn test_parse_power() {
        let config = DimmerConfig::DEFAULT;
        assert_eq!(config.parse_power("ON"), Some(PowerState::On));
        assert_eq!(config.parse_power("OFF"), Some(PowerState::Off));
        assert_eq!(config.parse_power("on"), None);
    }
}
