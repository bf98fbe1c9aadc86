// Einzeltaster-Programm: ein Taster, eine LED
//
// Solange der Taster gedrückt ist, leuchtet die LED. Beim Loslassen geht
// sie aus und bleibt aus, bis wieder gedrückt wird. Reine Polling-Schleife:
// kein Interrupt, kein Timer, kein Entprellen, keine Austrittsbedingung.

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

use esp_taster_steuerung::config::{BUTTON_LEFT_GPIO, LED_LEFT_GPIO};
use esp_taster_steuerung::hal::{GpioButton, GpioLed};
use esp_taster_steuerung::run_single_button_cycle;

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

#[main]
fn main() -> ! {
    // esp_hal::init hält mit der Default-Konfiguration die Watchdogs an
    let peripherals = esp_hal::init(esp_hal::Config::default());

    // Taster: Eingang mit Pull-Up (gedrückt = Low)
    let button_config = InputConfig::default().with_pull(Pull::Up);
    let mut button = GpioButton::new(Input::new(peripherals.GPIO9, button_config));

    // LED: Ausgang, startet dunkel
    let mut led = GpioLed::new(Output::new(
        peripherals.GPIO4,
        Level::Low,
        OutputConfig::default(),
    ));

    info!(
        "Einzeltaster bereit: Taster GPIO{}, LED GPIO{}",
        BUTTON_LEFT_GPIO, LED_LEFT_GPIO
    );

    // Endlosschleife: Pegel lesen -> LED setzen
    // Läuft ungedrosselt, so schnell der Prozessor die Runde schafft
    loop {
        if let Err(_e) = run_single_button_cycle(&mut button, &mut led) {
            error!("LED-Schreibzugriff fehlgeschlagen");
        }
    }
}
