// PWM Writer - LEDC Implementierung des PwmWriter Traits
//
// Die Mock-Implementierung für Host-Tests liegt in dimmer-tests.

use dimmer_core::{PwmError, PwmWriter};
use esp_hal::ledc::LowSpeed;
use esp_hal::ledc::channel::{Channel, ChannelHW};

/// Real Hardware PWM Writer
///
/// Nutzt einen ESP32 LEDC Kanal mit 8-Bit Duty-Auflösung,
/// damit Level 0-255 direkt als Duty-Wert geschrieben werden können.
///
/// Hinweis: Der Kanal referenziert seinen Timer, daher werden Timer
/// und Kanal im Task erstellt und der fertige Kanal übergeben.
pub struct LedcPwmWriter<'a> {
    channel: Channel<'a, LowSpeed>,
}

impl<'a> LedcPwmWriter<'a> {
    /// Erstellt einen neuen LedcPwmWriter
    ///
    /// # Parameter
    /// - `channel`: konfigurierter LEDC Kanal (Timer mit `Duty8Bit`)
    pub fn new(channel: Channel<'a, LowSpeed>) -> Self {
        Self { channel }
    }
}

impl PwmWriter for LedcPwmWriter<'_> {
    fn write(&mut self, level: u8) -> Result<(), PwmError> {
        // Duty-Register direkt setzen (8 Bit: 0-255)
        self.channel.set_duty_hw(u32::from(level));
        Ok(())
    }
}
