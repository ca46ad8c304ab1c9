// State Report Task - Meldet den Dimmer-Zustand periodisch
use defmt::info;
use embassy_futures::select::{Either, select};
use embassy_time::{Duration, Ticker};

use crate::{DimmerState, DimmerStateSubscriber};

/// State Report Task
///
/// Meldet den Zustand bei jeder Änderung und zusätzlich alle
/// `interval_ms` (`call_state_delay_ms` der Konfiguration), auch wenn
/// sich nichts geändert hat.
/// Ein MQTT-Client kann hier später als weiterer Subscriber andocken.
#[embassy_executor::task]
pub async fn state_report_task(mut state_subscriber: DimmerStateSubscriber, interval_ms: u32) {
    let mut ticker = Ticker::every(Duration::from_millis(u64::from(interval_ms)));
    let mut last_state: Option<DimmerState> = None;

    loop {
        match select(state_subscriber.next_message_pure(), ticker.next()).await {
            Either::First(state) => {
                info!("State changed: {}", state);
                last_state = Some(state);
            }
            Either::Second(()) => {
                if let Some(state) = last_state {
                    info!("State report: {}", state);
                }
            }
        }
    }
}
