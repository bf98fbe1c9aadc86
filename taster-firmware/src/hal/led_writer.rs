// LED-Ausgänge über esp-hal GPIO
//
// Implementiert die LedWriter/PanelWriter Traits aus taster-core
// auf esp-hal Outputs.

use esp_hal::gpio::Output;
use taster_core::{LedError, LedWriter, OutputState, PanelWriter};

/// Eine einzelne LED an einem GPIO-Ausgang (active-high)
pub struct GpioLed<'a> {
    output: Output<'a>,
}

impl<'a> GpioLed<'a> {
    pub fn new(output: Output<'a>) -> Self {
        Self { output }
    }
}

impl LedWriter for GpioLed<'_> {
    fn write(&mut self, on: bool) -> Result<(), LedError> {
        // GPIO-Schreibzugriffe auf esp-hal sind infallibel
        if on {
            self.output.set_high();
        } else {
            self.output.set_low();
        }
        Ok(())
    }
}

/// Das komplette LED-Feld: fünf physische Ausgänge
///
/// Modul-Rot und Modul-Grün hängen an denselben GPIOs wie Rot und Grün
/// der rechten RGB-LED (siehe config.rs). Ein Schreibzugriff auf den
/// geteilten Slot bedient damit beide logischen Kanäle.
pub struct GpioLedPanel<'a> {
    pub left: GpioLed<'a>,
    pub right_red: GpioLed<'a>,
    pub right_green: GpioLed<'a>,
    pub right_blue: GpioLed<'a>,
    pub module_blue: GpioLed<'a>,
}

impl PanelWriter for GpioLedPanel<'_> {
    fn write(&mut self, outputs: &OutputState) -> Result<(), LedError> {
        self.left.write(outputs.left_led)?;
        self.right_red.write(outputs.right_red)?;
        self.right_green.write(outputs.right_green)?;
        self.right_blue.write(outputs.right_blue)?;
        self.module_blue.write(outputs.module_blue)?;
        Ok(())
    }
}
