// Kombitaster-Programm: vier Taster, kombinatorische LED-Ansteuerung
//
// Zwei Taster auf dem Launchboard (links/rechts) und zwei auf dem
// Aufsteckmodul (oben/unten) steuern die linke LED, die rechte RGB-LED
// und die Modul-RGB-LED. Die Zuordnung ist eine feste kombinatorische
// Abbildung, die in jeder Schleifen-Iteration komplett neu ausgewertet
// wird (siehe taster_core::logic::evaluate_panel).
//
// Reine Polling-Schleife: kein Interrupt, kein Timer, kein Entprellen.

// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp-hal bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

use defmt::{error, info};
use esp_hal::gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull};
use esp_hal::main;

// Backtrace bei Panic und defmt-Transport
use {esp_backtrace as _, esp_println as _};

use esp_taster_steuerung::config::{
    BUTTON_BOTTOM_GPIO, BUTTON_LEFT_GPIO, BUTTON_RIGHT_GPIO, BUTTON_TOP_GPIO, LED_BRIGHTNESS,
};
use esp_taster_steuerung::hal::{GpioButton, GpioButtonPanel, GpioLed, GpioLedPanel};
use esp_taster_steuerung::{ButtonPanelReader, color_name, evaluate_panel, run_panel_cycle};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

#[main]
fn main() -> ! {
    // esp_hal::init hält mit der Default-Konfiguration die Watchdogs an
    let peripherals = esp_hal::init(esp_hal::Config::default());

    // Taster: Eingänge mit Pull-Up (gedrückt = Low)
    let mut buttons = GpioButtonPanel {
        left: GpioButton::new(Input::new(
            peripherals.GPIO9,
            InputConfig::default().with_pull(Pull::Up),
        )),
        right: GpioButton::new(Input::new(
            peripherals.GPIO2,
            InputConfig::default().with_pull(Pull::Up),
        )),
        top: GpioButton::new(Input::new(
            peripherals.GPIO10,
            InputConfig::default().with_pull(Pull::Up),
        )),
        bottom: GpioButton::new(Input::new(
            peripherals.GPIO11,
            InputConfig::default().with_pull(Pull::Up),
        )),
    };

    // LEDs: Ausgänge, starten dunkel.
    // Modul-Rot und Modul-Grün hängen an GPIO5/GPIO6 mit dran und werden
    // über die geteilten Slots im OutputState mitgeschrieben.
    let mut panel = GpioLedPanel {
        left: GpioLed::new(Output::new(
            peripherals.GPIO4,
            Level::Low,
            OutputConfig::default(),
        )),
        right_red: GpioLed::new(Output::new(
            peripherals.GPIO5,
            Level::Low,
            OutputConfig::default(),
        )),
        right_green: GpioLed::new(Output::new(
            peripherals.GPIO6,
            Level::Low,
            OutputConfig::default(),
        )),
        right_blue: GpioLed::new(Output::new(
            peripherals.GPIO7,
            Level::Low,
            OutputConfig::default(),
        )),
        module_blue: GpioLed::new(Output::new(
            peripherals.GPIO18,
            Level::Low,
            OutputConfig::default(),
        )),
    };

    info!(
        "Kombitaster bereit: Taster GPIO{}/{}/{}/{} (links/rechts/oben/unten)",
        BUTTON_LEFT_GPIO, BUTTON_RIGHT_GPIO, BUTTON_TOP_GPIO, BUTTON_BOTTOM_GPIO
    );

    // Einmalige Anzeige des Startzustands
    let outputs = evaluate_panel(buttons.read());
    info!("Startzustand: {}", outputs);
    info!(
        "Startfarbe rechts: {}",
        color_name(outputs.right_color(LED_BRIGHTNESS))
    );

    // Endlosschleife: Momentaufnahme lesen -> Regelblöcke auswerten ->
    // alle Ausgänge schreiben. Läuft ungedrosselt.
    loop {
        if let Err(_e) = run_panel_cycle(&mut buttons, &mut panel) {
            error!("LED-Schreibzugriff fehlgeschlagen");
        }
    }
}
