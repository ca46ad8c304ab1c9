//! Dimmer - Gerätezustand über dem Übergangs-Controller
//!
//! Verwaltet Ein/Aus-Zustand und Einschalt-Helligkeit und übersetzt
//! eingehende Kommandos in Übergänge.

use crate::config::{ConfigError, DimmerConfig};
use crate::transition::{LEVEL_OFF, TransitionController};
use crate::types::{DimmerCommand, DimmerState, PowerState};

pub struct Dimmer {
    controller: TransitionController,
    power: PowerState,
    brightness: u8,
}

impl Dimmer {
    /// Erstellt den Dimmer im Boot-Zustand der Konfiguration
    ///
    /// # Fehlerbehandlung
    /// Gibt `ConfigError` zurück wenn die Konfiguration ungültig ist.
    pub fn new(config: DimmerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let power = config.initial_power();
        let brightness = config.initial_brightness();
        let level = if power.is_on() { brightness } else { LEVEL_OFF };

        Ok(Self {
            controller: TransitionController::new(config, level)?,
            power,
            brightness,
        })
    }

    /// Wendet ein Kommando an und startet den passenden Übergang
    ///
    /// Ohne `transition_ms` wird sofort umgeschaltet.
    pub fn apply(&mut self, command: DimmerCommand) -> DimmerState {
        let transition_ms = match command {
            DimmerCommand::Set {
                state,
                brightness,
                transition_ms,
            } => {
                if let Some(brightness) = brightness {
                    self.brightness = self.controller.config().clamp_brightness(brightness);
                }
                if let Some(state) = state {
                    self.power = state;
                }
                transition_ms
            }
            DimmerCommand::Toggle { transition_ms } => {
                self.power = !self.power;
                transition_ms
            }
        };

        let target = if self.power.is_on() {
            self.brightness
        } else {
            LEVEL_OFF
        };
        self.controller.begin_transition(target, transition_ms.unwrap_or(0));
        self.state()
    }

    /// Ein Zeitschritt, liefert den Hardware-Level
    pub fn tick(&mut self) -> u8 {
        self.controller.tick()
    }

    pub fn state(&self) -> DimmerState {
        DimmerState {
            state: self.power,
            brightness: self.brightness,
        }
    }

    /// Aktueller (interner) Level des Ausgangs
    pub fn level(&self) -> u8 {
        self.controller.current_level()
    }

    pub fn is_transitioning(&self) -> bool {
        self.controller.is_transitioning()
    }

    pub fn config(&self) -> &DimmerConfig {
        self.controller.config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(dimmer: &mut Dimmer) -> u8 {
        let mut level = dimmer.tick();
        while dimmer.is_transitioning() {
            level = dimmer.tick();
        }
        level
    }

    #[test]
    fn test_boot_state_off() {
        let dimmer = Dimmer::new(DimmerConfig::DEFAULT).unwrap();
        assert_eq!(dimmer.level(), 0);
        assert_eq!(
            dimmer.state(),
            DimmerState {
                state: PowerState::Off,
                brightness: 128
            }
        );
    }

    #[test]
    fn test_boot_state_on() {
        let config = DimmerConfig {
            default_state: true,
            default_brightness: 80,
            ..DimmerConfig::DEFAULT
        };
        let dimmer = Dimmer::new(config).unwrap();
        assert_eq!(dimmer.level(), 80);
        assert!(!dimmer.is_transitioning());
    }

    #[test]
    fn test_off_keeps_brightness() {
        let mut dimmer = Dimmer::new(DimmerConfig::DEFAULT).unwrap();
        dimmer.apply(DimmerCommand::Set {
            state: Some(PowerState::On),
            brightness: Some(60),
            transition_ms: None,
        });
        assert_eq!(run_to_end(&mut dimmer), 60);

        let state = dimmer.apply(DimmerCommand::power(PowerState::Off, None));
        assert_eq!(run_to_end(&mut dimmer), 0);
        assert_eq!(state.brightness, 60);

        dimmer.apply(DimmerCommand::Toggle {
            transition_ms: Some(30),
        });
        assert_eq!(run_to_end(&mut dimmer), 60);
    }

    #[test]
    fn test_brightness_zero_raised_to_min() {
        let mut dimmer = Dimmer::new(DimmerConfig::DEFAULT).unwrap();
        let state = dimmer.apply(DimmerCommand::Set {
            state: Some(PowerState::On),
            brightness: Some(0),
            transition_ms: None,
        });
        assert_eq!(state.brightness, 1);
        assert_eq!(run_to_end(&mut dimmer), 1);
    }

    #[test]
    fn test_brightness_while_off_does_not_turn_on() {
        let mut dimmer = Dimmer::new(DimmerConfig::DEFAULT).unwrap();
        let state = dimmer.apply(DimmerCommand::Set {
            state: None,
            brightness: Some(90),
            transition_ms: None,
        });
        assert_eq!(state.state, PowerState::Off);
        assert_eq!(run_to_end(&mut dimmer), 0);
    }
}
