// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von dimmer-core
pub use dimmer_core::{
    Dimmer, DimmerCommand, DimmerConfig, DimmerState, PowerState, PwmError, PwmOutput, PwmWriter,
};

// Embassy Channel-Typen
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::channel::{Receiver, Sender};
use embassy_sync::pubsub::{PubSubChannel, Publisher, Subscriber};

use crate::config::{COMMAND_CHANNEL_SIZE, STATE_CHANNEL_SIZE, STATE_SUBSCRIBERS};

// ============================================================================
// Type-Aliase für Channel-Typen
// ============================================================================
//
// Statt:  Publisher<'static, NoopRawMutex, DimmerState, 2, 2, 1>
// Nutze:  DimmerStatePublisher

/// PubSubChannel für Status-Broadcasts (Dimmer Task → Report Task)
/// - 1: ein Publisher (Dimmer Task)
pub type DimmerStateChannel =
    PubSubChannel<NoopRawMutex, DimmerState, STATE_CHANNEL_SIZE, STATE_SUBSCRIBERS, 1>;

/// Publisher für Status-Broadcasts
pub type DimmerStatePublisher =
    Publisher<'static, NoopRawMutex, DimmerState, STATE_CHANNEL_SIZE, STATE_SUBSCRIBERS, 1>;

/// Subscriber für Status-Broadcasts
pub type DimmerStateSubscriber =
    Subscriber<'static, NoopRawMutex, DimmerState, STATE_CHANNEL_SIZE, STATE_SUBSCRIBERS, 1>;

/// Channel für Dimmer-Kommandos (Taster / Message-Parser → Dimmer Task)
pub type DimmerCommandChannel =
    embassy_sync::channel::Channel<NoopRawMutex, DimmerCommand, COMMAND_CHANNEL_SIZE>;

/// Sender für Dimmer-Kommandos
pub type DimmerCommandSender = Sender<'static, NoopRawMutex, DimmerCommand, COMMAND_CHANNEL_SIZE>;

/// Receiver für Dimmer-Kommandos (Dimmer Task empfängt)
pub type DimmerCommandReceiver =
    Receiver<'static, NoopRawMutex, DimmerCommand, COMMAND_CHANNEL_SIZE>;
