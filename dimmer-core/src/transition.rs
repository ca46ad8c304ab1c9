//! Zeitgesteuerter Helligkeits-Übergang
//!
//! Bewegt den Ausgangs-Level in festen Schritten auf ein Ziel zu.
//! Der Aufrufer ruft `tick()` einmal pro `transition_speed_ms` auf.

use crate::config::{ConfigError, DimmerConfig};

/// Level für "komplett aus"
pub const LEVEL_OFF: u8 = 0;

/// Höchster Hardware-Level (8-Bit PWM)
pub const LEVEL_FULL: u8 = 255;

/// Zustand des Ausgangskanals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelState {
    pub current_level: u8,
    pub target_level: u8,
    /// Mittlere Änderung pro Schritt (abgerundet Richtung 0)
    pub step_size: i32,
    pub remaining_steps: u32,
    /// Level beim Start des Übergangs
    pub start_level: u8,
    pub total_steps: u32,
}

impl ChannelState {
    const fn idle(level: u8) -> Self {
        Self {
            current_level: level,
            target_level: level,
            step_size: 0,
            remaining_steps: 0,
            start_level: level,
            total_steps: 0,
        }
    }
}

/// Übergangs-Controller für einen PWM-Kanal
///
/// Eingaben außerhalb des gültigen Bereichs werden begrenzt, nie abgelehnt.
#[derive(Debug, Clone)]
pub struct TransitionController {
    config: DimmerConfig,
    state: ChannelState,
}

impl TransitionController {
    /// Erstellt einen Controller, der ruhend auf `initial_level` steht
    pub fn new(config: DimmerConfig, initial_level: u8) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: ChannelState::idle(config.clamp_level(initial_level)),
            config,
        })
    }

    /// Startet einen Übergang zum Ziel-Level
    ///
    /// Ein laufender Übergang wird verworfen; der neue startet beim
    /// aktuellen (evtl. halb gefahrenen) Level. `duration_ms <= 0`
    /// springt beim nächsten `tick()` direkt aufs Ziel, ebenso ein Ziel
    /// gleich dem aktuellen Level.
    pub fn begin_transition(&mut self, target: u8, duration_ms: i32) {
        let target = self.config.clamp_level(target);
        let steps = match u32::try_from(duration_ms) {
            Ok(_) if target == self.state.current_level => 1,
            Ok(ms) => (ms / self.config.transition_speed_ms).max(1),
            Err(_) => 1,
        };
        let delta = i32::from(target) - i32::from(self.state.current_level);
        // steps <= i32::MAX, da duration_ms ein i32 ist
        let step_size = delta / steps as i32;

        self.state = ChannelState {
            current_level: self.state.current_level,
            target_level: target,
            step_size,
            remaining_steps: steps,
            start_level: self.state.current_level,
            total_steps: steps,
        };
    }

    /// Führt einen Zeitschritt aus und liefert den Hardware-Level
    pub fn tick(&mut self) -> u8 {
        if self.state.remaining_steps > 0 {
            self.state.remaining_steps -= 1;
            self.state.current_level = if self.state.remaining_steps == 0 {
                // letzter Schritt: exakt aufs Ziel (kein Rundungsfehler)
                self.state.target_level
            } else {
                // start + delta * done / total: Rest wird gleichmäßig verteilt
                let start = i64::from(self.state.start_level);
                let delta = i64::from(self.state.target_level) - start;
                let done = i64::from(self.state.total_steps - self.state.remaining_steps);
                let next = start + delta * done / i64::from(self.state.total_steps);
                next.clamp(i64::from(LEVEL_OFF), i64::from(LEVEL_FULL)) as u8
            };
        }
        self.config.hardware_level(self.state.current_level)
    }

    pub fn current_level(&self) -> u8 {
        self.state.current_level
    }

    pub fn target_level(&self) -> u8 {
        self.state.target_level
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.remaining_steps > 0
    }

    pub fn state(&self) -> ChannelState {
        self.state
    }

    pub fn config(&self) -> &DimmerConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(initial: u8) -> TransitionController {
        TransitionController::new(DimmerConfig::DEFAULT, initial).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = DimmerConfig {
            min_brightness: 50,
            max_brightness: 10,
            ..DimmerConfig::DEFAULT
        };
        assert!(TransitionController::new(config, 0).is_err());
    }

    #[test]
    fn test_initial_level_clamped() {
        assert_eq!(controller(255).current_level(), 128);
        assert_eq!(controller(0).current_level(), 0);
    }

    #[test]
    fn test_step_computation() {
        let mut ctrl = controller(0);
        ctrl.begin_transition(128, 300);
        let state = ctrl.state();
        assert_eq!(state.remaining_steps, 100);
        assert_eq!(state.step_size, 1);
        assert_eq!(state.target_level, 128);
    }

    #[test]
    fn test_short_duration_uses_one_step() {
        let mut ctrl = controller(0);
        ctrl.begin_transition(100, 2);
        assert_eq!(ctrl.state().remaining_steps, 1);
        assert_eq!(ctrl.tick(), 100);
        assert!(!ctrl.is_transitioning());
    }

    #[test]
    fn test_negative_duration_snaps() {
        let mut ctrl = controller(100);
        ctrl.begin_transition(20, -50);
        assert_eq!(ctrl.tick(), 20);
        assert!(!ctrl.is_transitioning());
    }

    #[test]
    fn test_final_step_snaps_to_target() {
        let mut ctrl = controller(0);
        // 100 / 3 = 33 pro Schritt, 3 * 33 = 99
        ctrl.begin_transition(100, 9);
        assert_eq!(ctrl.tick(), 33);
        assert_eq!(ctrl.tick(), 66);
        assert_eq!(ctrl.tick(), 100);
    }

    #[test]
    fn test_same_target_finishes_in_one_tick() {
        let mut ctrl = controller(77);
        ctrl.begin_transition(77, 900);
        assert_eq!(ctrl.state().remaining_steps, 1);
        assert_eq!(ctrl.state().step_size, 0);
        assert_eq!(ctrl.tick(), 77);
        assert!(!ctrl.is_transitioning());
    }

    #[test]
    fn test_small_delta_spread_over_steps() {
        let mut ctrl = controller(0);
        ctrl.begin_transition(128, 1000); // 333 Schritte
        assert_eq!(ctrl.state().step_size, 0);

        ctrl.tick();
        ctrl.tick();
        ctrl.tick();
        assert_eq!(ctrl.current_level(), 1);

        for _ in 3..166 {
            ctrl.tick();
        }
        assert_eq!(ctrl.current_level(), 63);
    }

    #[test]
    fn test_tick_without_transition_keeps_level() {
        let mut ctrl = controller(42);
        assert_eq!(ctrl.tick(), 42);
        assert_eq!(ctrl.tick(), 42);
    }

    #[test]
    fn test_retarget_mid_transition() {
        let mut ctrl = controller(0);
        ctrl.begin_transition(120, 30); // 10 Schritte à 12
        for _ in 0..5 {
            ctrl.tick();
        }
        assert_eq!(ctrl.current_level(), 60);

        ctrl.begin_transition(0, 15); // 5 Schritte à -12 ab 60
        assert_eq!(ctrl.state().step_size, -12);
        assert_eq!(ctrl.tick(), 48);
        for _ in 0..4 {
            ctrl.tick();
        }
        assert_eq!(ctrl.current_level(), 0);
    }
}
