//! Dimmer Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Konfiguration, Übergangs-Logik und Traits.

#![no_std]

pub mod config;
pub mod dimmer;
pub mod output;
pub mod traits;
pub mod transition;
pub mod types;

// Re-exports für einfachen Zugriff
pub use config::{ConfigError, DimmerConfig};
pub use dimmer::Dimmer;
pub use output::PwmOutput;
pub use traits::{PwmError, PwmWriter};
pub use transition::{ChannelState, LEVEL_FULL, LEVEL_OFF, TransitionController};
pub use types::{DimmerCommand, DimmerState, PowerState};
