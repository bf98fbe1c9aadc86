// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;

// Re-exports von taster-core
pub use taster_core::{
    ButtonPanelReader, ButtonReader, ButtonSnapshot, ButtonState, LedError, LedWriter,
    OutputState, PanelWriter, PinLevel, color_name, evaluate_panel, run_panel_cycle,
    run_single_button_cycle, single_led_on,
};
