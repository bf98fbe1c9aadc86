//! Integration Tests für die Taster/LED-Logik
//!
//! Diese Tests laufen auf dem Host (x86_64) und nutzen in-memory Mocks

use rgb::RGB8;
use taster_core::{
    ButtonPanelReader, ButtonReader, ButtonSnapshot, ButtonState, LedError, LedWriter,
    OutputState, PanelWriter, color_name, evaluate_panel, run_panel_cycle,
    run_single_button_cycle, single_led_on,
};

// ============================================================================
// Mocks
// ============================================================================

/// Taster mit fest eingestelltem Zustand
pub struct MockButton {
    pub state: ButtonState,
}

impl ButtonReader for MockButton {
    fn read(&mut self) -> ButtonState {
        self.state
    }
}

/// Tasterfeld mit fest eingestellter Momentaufnahme
pub struct MockButtonPanel {
    pub snapshot: ButtonSnapshot,
}

impl ButtonPanelReader for MockButtonPanel {
    fn read(&mut self) -> ButtonSnapshot {
        self.snapshot
    }
}

#[derive(Default)]
pub struct MockLed {
    pub last_on: Option<bool>,
    pub write_count: usize,
    pub fail_next_write: bool,
}

impl LedWriter for MockLed {
    fn write(&mut self, on: bool) -> Result<(), LedError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(LedError::WriteFailed);
        }

        self.last_on = Some(on);
        self.write_count += 1;
        Ok(())
    }
}

#[derive(Default)]
pub struct MockLedPanel {
    pub last_outputs: Option<OutputState>,
    pub write_count: usize,
    pub fail_next_write: bool,
}

impl PanelWriter for MockLedPanel {
    fn write(&mut self, outputs: &OutputState) -> Result<(), LedError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(LedError::WriteFailed);
        }

        self.last_outputs = Some(*outputs);
        self.write_count += 1;
        Ok(())
    }
}

// ============================================================================
// Tests: Einzeltaster
// ============================================================================

#[test]
fn test_single_led_on_for_both_levels() {
    // Vollständige Aufzählung: genau zwei Fälle
    assert!(single_led_on(ButtonState::Pressed));
    assert!(!single_led_on(ButtonState::Released));
}

#[test]
fn test_single_cycle_writes_led() {
    let mut button = MockButton {
        state: ButtonState::Pressed,
    };
    let mut led = MockLed::default();

    let on = run_single_button_cycle(&mut button, &mut led).unwrap();
    assert!(on);
    assert_eq!(led.last_on, Some(true));
    assert_eq!(led.write_count, 1);

    button.state = ButtonState::Released;
    let on = run_single_button_cycle(&mut button, &mut led).unwrap();
    assert!(!on);
    assert_eq!(led.last_on, Some(false));
    assert_eq!(led.write_count, 2);
}

#[test]
fn test_single_cycle_propagates_write_error() {
    let mut button = MockButton {
        state: ButtonState::Pressed,
    };
    let mut led = MockLed {
        fail_next_write: true,
        ..Default::default()
    };

    let result = run_single_button_cycle(&mut button, &mut led);
    assert_eq!(result, Err(LedError::WriteFailed));
    assert_eq!(led.last_on, None);
    assert_eq!(led.write_count, 0);
}

// ============================================================================
// Tests: Kombitaster - Randfälle und Szenarien
// ============================================================================

#[test]
fn test_panel_all_released_all_off() {
    let out = evaluate_panel(ButtonSnapshot::from_pressed(false, false, false, false));
    assert!(out.is_all_off());
}

#[test]
fn test_panel_all_pressed_override() {
    // Alle vier gedrückt: der letzte Check erzwingt alles an
    let out = evaluate_panel(ButtonSnapshot::from_pressed(true, true, true, true));
    assert!(out.left_led);
    assert!(out.right_red);
    assert!(out.right_green);
    assert!(out.right_blue);
    assert!(out.module_blue);
}

#[test]
fn test_panel_right_only() {
    // Nur der rechte Taster: Rot + Blau der rechten RGB-LED, sonst nichts
    let out = evaluate_panel(ButtonSnapshot::from_pressed(false, true, false, false));
    assert!(!out.left_led);
    assert!(out.right_red);
    assert!(!out.right_green);
    assert!(out.right_blue);
    assert!(!out.module_blue);
}

#[test]
fn test_panel_left_and_right() {
    // Links + rechts: linke LED, rechtes Blau, Modul-Grün; Rot bleibt aus
    let out = evaluate_panel(ButtonSnapshot::from_pressed(true, true, false, false));
    assert!(out.left_led);
    assert!(!out.right_red);
    assert!(out.right_blue);
    assert!(out.module_green());
    assert!(!out.module_blue);
}

#[test]
fn test_panel_top_only_lights_module() {
    let out = evaluate_panel(ButtonSnapshot::from_pressed(false, false, true, false));
    assert!(out.module_blue);
    assert!(out.module_green());
    assert!(out.module_red());
    assert!(!out.left_led);
    assert!(!out.right_blue);
}

#[test]
fn test_panel_top_and_bottom() {
    let out = evaluate_panel(ButtonSnapshot::from_pressed(false, false, true, true));
    assert!(out.left_led);
    assert!(out.right_red);
    assert!(!out.right_green);
    assert!(!out.right_blue);
    assert!(!out.module_blue);
}

// ============================================================================
// Tests: Kombitaster - vollständige Wahrheitstabelle
// ============================================================================

#[test]
fn test_panel_exhaustive_truth_table() {
    // Alle 16 Eingangskombinationen (links, rechts, oben, unten) gegen die
    // erwarteten fünf physischen Ausgänge
    // (linke LED, rechts-rot, rechts-grün, rechts-blau, modul-blau).
    #[rustfmt::skip]
    let expected: [((bool, bool, bool, bool), (bool, bool, bool, bool, bool)); 16] = [
        ((false, false, false, false), (false, false, false, false, false)),
        ((true,  false, false, false), (true,  false, false, false, false)),
        ((false, true,  false, false), (false, true,  false, true,  false)),
        ((true,  true,  false, false), (true,  false, true,  true,  false)),
        ((false, false, true,  false), (false, true,  true,  false, true)),
        ((true,  false, true,  false), (true,  true,  true,  false, true)),
        ((false, true,  true,  false), (false, true,  true,  true,  true)),
        ((true,  true,  true,  false), (true,  true,  true,  true,  true)),
        ((false, false, false, true),  (false, true,  true,  true,  true)),
        ((true,  false, false, true),  (true,  true,  true,  true,  true)),
        ((false, true,  false, true),  (false, true,  true,  true,  true)),
        ((true,  true,  false, true),  (true,  true,  true,  true,  true)),
        ((false, false, true,  true),  (true,  true,  false, false, false)),
        ((true,  false, true,  true),  (true,  true,  false, false, false)),
        ((false, true,  true,  true),  (true,  true,  false, true,  false)),
        ((true,  true,  true,  true),  (true,  true,  true,  true,  true)),
    ];

    for ((left, right, top, bottom), (led, r, g, b, mb)) in expected {
        let out = evaluate_panel(ButtonSnapshot::from_pressed(left, right, top, bottom));
        let got = (
            out.left_led,
            out.right_red,
            out.right_green,
            out.right_blue,
            out.module_blue,
        );
        assert_eq!(
            got,
            (led, r, g, b, mb),
            "Abweichung bei Eingabe (links={left}, rechts={right}, oben={top}, unten={bottom})"
        );
    }
}

#[test]
fn test_panel_idempotent() {
    // Gleiche Momentaufnahme -> identisches Ergebnis, kein versteckter Zustand
    for bits in 0u8..16 {
        let snapshot = ButtonSnapshot::from_pressed(
            bits & 0b0001 != 0,
            bits & 0b0010 != 0,
            bits & 0b0100 != 0,
            bits & 0b1000 != 0,
        );
        assert_eq!(evaluate_panel(snapshot), evaluate_panel(snapshot));
    }
}

// ============================================================================
// Tests: geteilte Modul-Kanäle
// ============================================================================

#[test]
fn test_module_red_shares_slot_with_right_red() {
    let mut out = OutputState::all_off();
    out.set_module_red(true);
    assert!(out.right_red);
    assert!(out.module_red());

    out.right_red = false;
    assert!(!out.module_red());
}

#[test]
fn test_module_green_shares_slot_with_right_green() {
    let mut out = OutputState::all_off();
    out.set_module_green(true);
    assert!(out.right_green);
    assert!(out.module_green());

    out.right_green = false;
    assert!(!out.module_green());
}

// ============================================================================
// Tests: Cycle-Funktionen mit Mocks
// ============================================================================

#[test]
fn test_panel_cycle_writes_outputs() {
    let mut buttons = MockButtonPanel {
        snapshot: ButtonSnapshot::from_pressed(false, true, false, false),
    };
    let mut panel = MockLedPanel::default();

    let outputs = run_panel_cycle(&mut buttons, &mut panel).unwrap();
    assert_eq!(panel.last_outputs, Some(outputs));
    assert_eq!(panel.write_count, 1);
    assert!(outputs.right_red);
    assert!(outputs.right_blue);
    assert!(!outputs.left_led);
}

#[test]
fn test_panel_cycle_propagates_write_error() {
    let mut buttons = MockButtonPanel {
        snapshot: ButtonSnapshot::from_pressed(true, false, false, false),
    };
    let mut panel = MockLedPanel {
        fail_next_write: true,
        ..Default::default()
    };

    let result = run_panel_cycle(&mut buttons, &mut panel);
    assert_eq!(result, Err(LedError::WriteFailed));
    assert_eq!(panel.last_outputs, None);
}

#[test]
fn test_mock_led_recovers_after_fail() {
    let mut led = MockLed {
        fail_next_write: true,
        ..Default::default()
    };

    // Erster Schreibzugriff schlägt fehl
    assert!(led.write(true).is_err());

    // Zweiter Schreibzugriff klappt wieder
    assert!(led.write(true).is_ok());
    assert_eq!(led.write_count, 1);
    assert_eq!(led.last_on, Some(true));
}

// ============================================================================
// Tests: Farb-Benennung
// ============================================================================

#[test]
fn test_right_color_maps_channels() {
    let mut out = OutputState::all_off();
    out.right_red = true;
    out.right_blue = true;
    assert_eq!(out.right_color(10), RGB8 { r: 10, g: 0, b: 10 });

    assert_eq!(OutputState::all_off().right_color(10), RGB8 { r: 0, g: 0, b: 0 });
}

#[test]
fn test_color_name_primaries() {
    assert_eq!(color_name(RGB8 { r: 10, g: 0, b: 0 }), "Rot");
    assert_eq!(color_name(RGB8 { r: 0, g: 10, b: 0 }), "Grün");
    assert_eq!(color_name(RGB8 { r: 0, g: 0, b: 10 }), "Blau");
}

#[test]
fn test_color_name_mixes() {
    assert_eq!(color_name(RGB8 { r: 10, g: 10, b: 0 }), "Gelb");
    assert_eq!(color_name(RGB8 { r: 10, g: 0, b: 10 }), "Violett");
    assert_eq!(color_name(RGB8 { r: 0, g: 10, b: 10 }), "Türkis");
    assert_eq!(color_name(RGB8 { r: 10, g: 10, b: 10 }), "Weiß");
    assert_eq!(color_name(RGB8 { r: 0, g: 0, b: 0 }), "Aus");
}
