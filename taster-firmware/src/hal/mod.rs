// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt Hardware-Zugriffe hinter Traits,
// um Testbarkeit und Wartbarkeit zu verbessern.

pub mod buttons;
pub mod led_writer;

pub use buttons::{GpioButton, GpioButtonPanel};
pub use led_writer::{GpioLed, GpioLedPanel};
