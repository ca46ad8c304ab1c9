// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use defmt::info;
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use esp_mqtt_dimmer::config::DIMMER_CONFIG;
use esp_mqtt_dimmer::tasks::{button_task, dimmer_task, state_report_task};
use esp_mqtt_dimmer::{Dimmer, DimmerCommandChannel, DimmerStateChannel, button_gpio, led_gpio};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Prüft die Konfiguration, startet Embassy Runtime und spawnt Tasks.
/// Danach schläft main() - alle Arbeit läuft in Tasks.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // Konfiguration prüfen, bevor irgendein Übergang läuft
    // (zusätzlich zur Compile-Zeit-Prüfung in config.rs)
    let dimmer = Dimmer::new(DIMMER_CONFIG).expect("Invalid dimmer configuration");
    info!(
        "Dimmer: {} at boot, brightness {} (range {}..={})",
        dimmer.state().state,
        dimmer.state().brightness,
        DIMMER_CONFIG.min_brightness,
        DIMMER_CONFIG.max_brightness
    );

    // State-Channel erstellen (Dimmer → Report Task)
    // PubSubChannel für Broadcast: alle Subscribers bekommen jede Nachricht
    static STATE_CHANNEL: static_cell::StaticCell<DimmerStateChannel> =
        static_cell::StaticCell::new();
    let state_channel = &*STATE_CHANNEL.init(DimmerStateChannel::new());
    let state_publisher = state_channel.publisher().unwrap();

    // Command-Channel erstellen (Taster → Dimmer)
    static COMMAND_CHANNEL: static_cell::StaticCell<DimmerCommandChannel> =
        static_cell::StaticCell::new();
    let command_channel = COMMAND_CHANNEL.init(DimmerCommandChannel::new());
    let command_sender = command_channel.sender();
    let command_receiver = command_channel.receiver();

    // Report Task zuerst, damit er den Boot-Zustand mitbekommt
    let report_subscriber = state_channel.subscriber().unwrap();
    let report_interval_ms = dimmer.config().call_state_delay_ms;
    spawner
        .spawn(state_report_task(report_subscriber, report_interval_ms))
        .unwrap();

    // Spawn Dimmer Task (mit Publisher für Status und Receiver für Kommandos)
    spawner
        .spawn(dimmer_task(
            led_gpio!(peripherals).into(),
            peripherals.LEDC,
            dimmer,
            state_publisher,
            command_receiver,
        ))
        .unwrap();

    // Spawn Button Task (lokale Eingabequelle)
    spawner
        .spawn(button_task(button_gpio!(peripherals).into(), command_sender))
        .unwrap();

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
