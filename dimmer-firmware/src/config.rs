// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
use dimmer_core::DimmerConfig;

// ============================================================================
// Übergangs-Konfiguration
// ============================================================================

/// Abstand zwischen zwei Helligkeits-Schritten in Millisekunden
/// Default-Wert; mit einer Übergangszeit im Kommando wird die
/// Schrittweite daraus berechnet
pub const TRANSITION_SPEED_MS: u32 = 3;

/// Intervall für den Status-Report in Millisekunden
pub const CALL_STATE_DELAY_MS: u32 = 10_000;

/// Übergangszeit für Taster-Kommandos in Millisekunden
pub const BUTTON_TRANSITION_MS: i32 = 500;

/// Entprell-Zeit für den Taster in Millisekunden
pub const BUTTON_DEBOUNCE_MS: u64 = 50;

// ============================================================================
// LED Konfiguration
// ============================================================================

/// GPIO-Pin für den PWM-Ausgang (muss zu `led_gpio!` passen)
/// Bierschild: 12, Unterschrank: 14
pub const LED_PIN: u8 = 12;

/// GPIO-Pin für den Taster (BOOT-Taster auf dem DevKit)
pub const BUTTON_PIN: u8 = 9;

/// PWM-Frequenz in kHz (8-Bit Auflösung)
pub const PWM_FREQUENCY_KHZ: u32 = 24;

/// Payload-Tokens für an/aus
pub const PAYLOAD_ON: &str = "ON";
pub const PAYLOAD_OFF: &str = "OFF";

/// LED-Logik umkehren
/// false: 0 (aus) - 255 (hell)
/// true: 255 (aus) - 0 (hell)
pub const INVERT_LOGIC: bool = false;

/// Aktiviert Diagnose-Ausgaben pro Schritt
pub const DEBUG_ENABLED: bool = false;

/// Minimale/maximale Helligkeit (0-255)
/// Nützlich für LEDs, die unterhalb eines Wertes nicht sichtbar leuchten
/// oder oberhalb zu hell sind
pub const MIN_BRIGHTNESS: u8 = 1;
pub const MAX_BRIGHTNESS: u8 = 128;

/// Einschalt-Helligkeit nach dem Boot (wird auf MAX_BRIGHTNESS begrenzt)
pub const DEFAULT_BRIGHTNESS: u8 = 255;

/// Einschaltzustand nach dem Boot
pub const DEFAULT_STATE: bool = false;

/// Komplette Dimmer-Konfiguration aus den Konstanten oben
pub const DIMMER_CONFIG: DimmerConfig = DimmerConfig {
    transition_speed_ms: TRANSITION_SPEED_MS,
    call_state_delay_ms: CALL_STATE_DELAY_MS,
    led_pin: LED_PIN,
    payload_on: PAYLOAD_ON,
    payload_off: PAYLOAD_OFF,
    invert_logic: INVERT_LOGIC,
    debug_enabled: DEBUG_ENABLED,
    min_brightness: MIN_BRIGHTNESS,
    max_brightness: MAX_BRIGHTNESS,
    default_brightness: DEFAULT_BRIGHTNESS,
    default_state: DEFAULT_STATE,
};

// Fehlkonfiguration bricht bereits den Build ab
const _: () = assert!(
    DIMMER_CONFIG.validate().is_ok(),
    "Ungültige Dimmer-Konfiguration (MIN_BRIGHTNESS > MAX_BRIGHTNESS oder TRANSITION_SPEED_MS = 0)"
);

// ============================================================================
// Pin-Zuordnung
// ============================================================================

/// Liefert den GPIO für den PWM-Ausgang (siehe LED_PIN)
#[macro_export]
macro_rules! led_gpio {
    ($p:expr) => {
        $p.GPIO12
    };
}

/// Liefert den GPIO für den Taster (siehe BUTTON_PIN)
#[macro_export]
macro_rules! button_gpio {
    ($p:expr) => {
        $p.GPIO9
    };
}

// ============================================================================
// Channel-Konfiguration
// ============================================================================

/// Kapazität des Command-Channels
pub const COMMAND_CHANNEL_SIZE: usize = 4;

/// Kapazität des State-Channels
pub const STATE_CHANNEL_SIZE: usize = 2;

/// Maximale Anzahl State-Subscriber
pub const STATE_SUBSCRIBERS: usize = 2;
