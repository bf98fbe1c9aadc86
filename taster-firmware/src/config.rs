// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

// ============================================================================
// Taster (Eingänge)
// ============================================================================
//
// Alle Taster sind active-low verdrahtet: interner Pull-Up aktiviert,
// der Taster zieht den Pin beim Drücken gegen GND.

/// GPIO-Pin für den linken Launchboard-Taster
/// GPIO9 ist der BOOT-Taster auf dem DevKit
pub const BUTTON_LEFT_GPIO: u8 = 9;

/// GPIO-Pin für den rechten Launchboard-Taster
pub const BUTTON_RIGHT_GPIO: u8 = 2;

/// GPIO-Pin für den oberen Taster auf dem Aufsteckmodul
pub const BUTTON_TOP_GPIO: u8 = 10;

/// GPIO-Pin für den unteren Taster auf dem Aufsteckmodul
pub const BUTTON_BOTTOM_GPIO: u8 = 11;

// ============================================================================
// LEDs (Ausgänge)
// ============================================================================
//
// Alle LEDs sind active-high verdrahtet und starten dunkel.

/// GPIO-Pin für die linke LED auf dem Launchboard (einfarbig)
pub const LED_LEFT_GPIO: u8 = 4;

/// GPIO-Pin für den roten Kanal der rechten RGB-LED
/// Geteilt mit dem roten Kanal der Modul-RGB-LED
pub const LED_RIGHT_RED_GPIO: u8 = 5;

/// GPIO-Pin für den grünen Kanal der rechten RGB-LED
/// Geteilt mit dem grünen Kanal der Modul-RGB-LED
pub const LED_RIGHT_GREEN_GPIO: u8 = 6;

/// GPIO-Pin für den blauen Kanal der rechten RGB-LED
pub const LED_RIGHT_BLUE_GPIO: u8 = 7;

/// GPIO-Pin für den blauen Kanal der Modul-RGB-LED (eigener Pin)
pub const LED_MODULE_BLUE_GPIO: u8 = 18;

/// Helligkeits-Level für die Status-Farbe in Log-Ausgaben (0-255)
/// Wert ist gedimmt für Augenschonung
pub const LED_BRIGHTNESS: u8 = 10;
