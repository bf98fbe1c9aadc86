//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use crate::traits::{ButtonPanelReader, ButtonReader, LedError, LedWriter, PanelWriter};
use crate::types::{ButtonSnapshot, ButtonState, OutputState};

/// LED-Pegel für das Einzeltaster-Programm
///
/// Solange der Taster gedrückt ist, leuchtet die LED. Keine Hysterese,
/// kein Entprellen, kein Timing.
///
/// # Beispiele
///
/// ```
/// # use taster_core::types::ButtonState;
/// # use taster_core::single_led_on;
/// assert!(single_led_on(ButtonState::Pressed));
/// assert!(!single_led_on(ButtonState::Released));
/// ```
pub fn single_led_on(button: ButtonState) -> bool {
    button.is_pressed()
}

/// Kombinatorische Auswertung des Tasterfelds
///
/// Fünf Regelblöcke laufen in fester Reihenfolge über einen Ausgabe-Record,
/// der jede Runde dunkel startet. Die Blöcke überschneiden sich: mehrere
/// Blöcke schreiben dieselben Kanäle, und ein Kanal leuchtet, sobald
/// irgendein Block ihn gesetzt hat. Jeder Block trägt deshalb nur seine
/// EIN-Zustände bei; die Sonderfälle "alle losgelassen" und "alle gedrückt"
/// werden zuletzt angewendet und überschreiben das Blockergebnis.
///
/// Die Reihenfolge der Blöcke ist Teil des Verhaltens und darf nicht
/// umsortiert oder zu einer kompakteren Tabelle zusammengezogen werden.
pub fn evaluate_panel(buttons: ButtonSnapshot) -> OutputState {
    let mut out = OutputState::all_off();

    // Block 1: Linker Taster -> linke LED
    if buttons.left.is_pressed() {
        out.left_led = true;
    }

    // Block 2: Rechter Taster, abhängig vom linken
    if buttons.right.is_pressed() {
        if buttons.left.is_pressed() {
            out.left_led = true;
            out.right_blue = true;
            out.set_module_green(true);
        } else {
            out.right_red = true;
            out.right_blue = true;
        }
    }

    // Block 3: Oberer Modul-Taster, abhängig vom unteren
    if buttons.top.is_pressed() {
        if buttons.bottom.is_pressed() {
            out.left_led = true;
            out.right_red = true;
            out.set_module_red(true);
        } else {
            out.module_blue = true;
            out.set_module_green(true);
            out.set_module_red(true);
        }
    }

    // Block 4: Unterer Modul-Taster, abhängig vom oberen
    if buttons.bottom.is_pressed() {
        if buttons.top.is_pressed() {
            out.left_led = true;
            out.right_red = true;
            out.set_module_red(true);
        } else {
            out.module_blue = true;
            out.set_module_green(true);
            out.set_module_red(true);
            out.right_red = true;
            out.right_blue = true;
            out.right_green = true;
        }
    }

    // Block 5: Alles-oder-nichts-Check, läuft zuletzt und gewinnt
    if buttons.none_pressed() {
        out = OutputState::all_off();
    } else if buttons.all_pressed() {
        out.module_blue = true;
        out.right_red = true;
        out.right_blue = true;
        out.right_green = true;
        out.left_led = true;
    }

    out
}

/// Eine Schleifen-Iteration des Einzeltaster-Programms
///
/// Liest den Taster, bildet den LED-Pegel ab und schreibt ihn raus.
/// Gibt den geschriebenen Pegel zurück.
///
/// # Trait-basierte Abstraktion
/// Die generischen Parameter ermöglichen:
/// - Real Hardware (GpioButton/GpioLed) im Production-Code
/// - Mock Implementation in Unit Tests
pub fn run_single_button_cycle<B, L>(button: &mut B, led: &mut L) -> Result<bool, LedError>
where
    B: ButtonReader,
    L: LedWriter,
{
    let on = single_led_on(button.read());
    led.write(on)?;
    Ok(on)
}

/// Eine Schleifen-Iteration des Kombitaster-Programms
///
/// Liest alle vier Taster als Momentaufnahme, wertet die Regelblöcke aus
/// und schreibt den kompletten Ausgabezustand. Gibt den geschriebenen
/// Zustand zurück.
pub fn run_panel_cycle<B, P>(buttons: &mut B, panel: &mut P) -> Result<OutputState, LedError>
where
    B: ButtonPanelReader,
    P: PanelWriter,
{
    let outputs = evaluate_panel(buttons.read());
    panel.write(&outputs)?;
    Ok(outputs)
}
