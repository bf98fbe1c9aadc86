// Taster-Eingänge über esp-hal GPIO
//
// Implementiert die ButtonReader/ButtonPanelReader Traits aus taster-core
// auf esp-hal Inputs.

use esp_hal::gpio::Input;
use taster_core::{ButtonPanelReader, ButtonReader, ButtonSnapshot, ButtonState, PinLevel};

/// Ein einzelner Taster an einem GPIO-Eingang
///
/// Erwartet einen Input mit aktiviertem Pull-Up (active-low Verdrahtung,
/// siehe config.rs). Der Pegel wird bei jedem read() live vom Pin geholt.
pub struct GpioButton<'a> {
    input: Input<'a>,
}

impl<'a> GpioButton<'a> {
    pub fn new(input: Input<'a>) -> Self {
        Self { input }
    }

    fn level(&self) -> PinLevel {
        if self.input.is_low() {
            PinLevel::Low
        } else {
            PinLevel::High
        }
    }
}

impl ButtonReader for GpioButton<'_> {
    fn read(&mut self) -> ButtonState {
        ButtonState::from_level(self.level())
    }
}

/// Das komplette Tasterfeld: zwei Launchboard- und zwei Modul-Taster
pub struct GpioButtonPanel<'a> {
    pub left: GpioButton<'a>,
    pub right: GpioButton<'a>,
    pub top: GpioButton<'a>,
    pub bottom: GpioButton<'a>,
}

impl ButtonPanelReader for GpioButtonPanel<'_> {
    fn read(&mut self) -> ButtonSnapshot {
        ButtonSnapshot::new(
            self.left.read(),
            self.right.read(),
            self.top.read(),
            self.bottom.read(),
        )
    }
}
