// Dimmer Task - Steuert den LED-Ausgang über das LEDC Peripheral
use defmt::{Debug2Format, debug, error, info};
use embassy_futures::select::{Either, select};
use embassy_time::{Duration, Ticker};
use esp_hal::gpio::{AnyPin, DriveMode};
use esp_hal::ledc::channel::{self, ChannelIFace};
use esp_hal::ledc::timer::{self, TimerIFace};
use esp_hal::ledc::{LSGlobalClkSource, Ledc, LowSpeed};
use esp_hal::time::Rate;

use crate::config::PWM_FREQUENCY_KHZ;
use crate::hal::LedcPwmWriter;
use crate::{Dimmer, DimmerCommandReceiver, DimmerStatePublisher, PwmOutput, PwmWriter};

/// Dimmer Logic - Testbare Business Logic ohne Hardware-Abhängigkeit
///
/// Diese Funktion enthält die komplette Dimmer-Steuerung:
/// - Empfängt Kommandos (Taster, Message-Parser) und startet Übergänge
/// - Führt laufende Übergänge im Takt von `transition_speed_ms` aus
/// - Schreibt den Hardware-Level nur bei Änderung
/// - Sendet Status-Updates an den Report Task via Channel
///
/// Kommandos und Zeitschritte laufen im selben Task, dadurch gibt es
/// keine verschachtelten Aufrufe von `apply()` und `tick()`.
///
/// # Parameter
/// - `dimmer`: Dimmer im Boot-Zustand (Konfiguration bereits geprüft)
/// - `writer`: PWM Writer (Hardware oder Mock)
/// - `state_publisher`: PubSub Publisher für Status-Broadcasts
/// - `command_receiver`: Channel Receiver für Dimmer-Kommandos
pub async fn dimmer_logic<W: PwmWriter>(
    mut dimmer: Dimmer,
    writer: W,
    state_publisher: DimmerStatePublisher,
    command_receiver: DimmerCommandReceiver,
) {
    let debug_enabled = dimmer.config().debug_enabled;
    let step = Duration::from_millis(u64::from(dimmer.config().transition_speed_ms));
    let mut ticker = Ticker::every(step);
    let mut output = PwmOutput::new(writer);

    // Boot-Zustand ausgeben
    write_level(&mut output, dimmer.tick(), debug_enabled);
    state_publisher.publish_immediate(dimmer.state());
    info!("Dimmer: Ready, level {}", dimmer.level());

    loop {
        // Ticker nur während eines Übergangs, sonst nur auf Kommandos warten
        let command = if dimmer.is_transitioning() {
            match select(command_receiver.receive(), ticker.next()).await {
                Either::First(command) => Some(command),
                Either::Second(()) => None,
            }
        } else {
            Some(command_receiver.receive().await)
        };

        match command {
            Some(command) => {
                info!("Command received: {}", command);
                let state = dimmer.apply(command);
                state_publisher.publish_immediate(state);
                ticker.reset();
            }
            None => {
                let level = dimmer.tick();
                write_level(&mut output, level, debug_enabled);
                if !dimmer.is_transitioning() {
                    info!("Dimmer: Transition done, level {}", dimmer.level());
                }
            }
        }
    }
}

/// Schreibt den Hardware-Level und loggt Fehler
fn write_level<W: PwmWriter>(output: &mut PwmOutput<W>, level: u8, debug_enabled: bool) {
    match output.write(level) {
        Ok(true) if debug_enabled => debug!("Dimmer: PWM duty {}", level),
        Ok(_) => {}
        Err(e) => error!("Failed to write PWM duty {}: {}", level, e),
    }
}

/// Dimmer Task - Embassy Task für parallele Ausführung
///
/// Dieser Task übernimmt die LEDC-Initialisierung und ruft dann
/// die testbare `dimmer_logic()` Funktion auf.
///
/// # Parameter
/// - `led_pin`: GPIO für den PWM-Ausgang
/// - `ledc_peripheral`: LEDC Peripheral
/// - `dimmer`: Dimmer im Boot-Zustand
/// - `state_publisher`: PubSub Publisher für Status-Broadcasts
/// - `command_receiver`: Channel Receiver für Dimmer-Kommandos
#[embassy_executor::task]
pub async fn dimmer_task(
    led_pin: AnyPin<'static>,
    ledc_peripheral: esp_hal::peripherals::LEDC<'static>,
    dimmer: Dimmer,
    state_publisher: DimmerStatePublisher,
    command_receiver: DimmerCommandReceiver,
) {
    let mut ledc = Ledc::new(ledc_peripheral);
    ledc.set_global_slow_clock(LSGlobalClkSource::APBClk);

    // 8-Bit Timer: Duty-Werte entsprechen direkt den Levels 0-255
    let mut pwm_timer = ledc.timer::<LowSpeed>(timer::Number::Timer0);
    if let Err(e) = pwm_timer.configure(timer::config::Config {
        duty: timer::config::Duty::Duty8Bit,
        clock_source: timer::LSClockSource::APBClk,
        frequency: Rate::from_khz(PWM_FREQUENCY_KHZ),
    }) {
        error!("Dimmer: LEDC timer setup failed: {}", Debug2Format(&e));
        return;
    }

    let mut pwm_channel = ledc.channel(channel::Number::Channel0, led_pin);
    if let Err(e) = pwm_channel.configure(channel::config::Config {
        timer: &pwm_timer,
        duty_pct: 0,
        drive_mode: DriveMode::PushPull,
    }) {
        error!("Dimmer: LEDC channel setup failed: {}", Debug2Format(&e));
        return;
    }

    info!(
        "Dimmer: PWM on GPIO{} at {} kHz",
        dimmer.config().led_pin,
        PWM_FREQUENCY_KHZ
    );

    let writer = LedcPwmWriter::new(pwm_channel);

    dimmer_logic(dimmer, writer, state_publisher, command_receiver).await;
}
