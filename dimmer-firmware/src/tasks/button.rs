// Button Task - Lokaler Ein/Aus-Taster
use defmt::info;
use embassy_time::{Duration, Timer};
use esp_hal::gpio::{AnyPin, Input, InputConfig, Pull};

use crate::config::{BUTTON_DEBOUNCE_MS, BUTTON_TRANSITION_MS};
use crate::{DimmerCommand, DimmerCommandSender};

/// Button Task
///
/// Schaltet den Dimmer bei jedem Tastendruck um (Taster nach GND,
/// interner Pull-Up). Sendet `DimmerCommand::Toggle` an den Dimmer Task.
#[embassy_executor::task]
pub async fn button_task(button_pin: AnyPin<'static>, command_sender: DimmerCommandSender) {
    let mut button = Input::new(button_pin, InputConfig::default().with_pull(Pull::Up));

    loop {
        button.wait_for_falling_edge().await;

        // Entprellen: nur gültig, wenn der Taster danach noch gedrückt ist
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
        if button.is_high() {
            continue;
        }

        info!("Button: pressed, toggling");
        command_sender
            .send(DimmerCommand::Toggle {
                transition_ms: Some(BUTTON_TRANSITION_MS),
            })
            .await;

        button.wait_for_high().await;
    }
}
