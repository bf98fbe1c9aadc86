//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use crate::types::{ButtonSnapshot, ButtonState, OutputState};

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    WriteFailed,
}

/// Trait für einen einzelnen Taster-Eingang
///
/// # Implementierungen
/// - **Production:** GpioButton (esp-hal Input mit Pull-Up)
/// - **Testing:** MockButton (in-memory Mock)
pub trait ButtonReader: Send {
    /// Liest den aktuellen Tasterzustand (pegelgesteuert, ungepuffert)
    fn read(&mut self) -> ButtonState;
}

/// Trait für das komplette Tasterfeld (vier Taster)
///
/// # Implementierungen
/// - **Production:** GpioButtonPanel (vier esp-hal Inputs)
/// - **Testing:** MockButtonPanel (in-memory Mock)
pub trait ButtonPanelReader: Send {
    /// Liest alle vier Taster als eine Momentaufnahme
    fn read(&mut self) -> ButtonSnapshot;
}

/// Trait für eine einzelne LED
///
/// # Fehlerbehandlung
/// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
pub trait LedWriter: Send {
    fn write(&mut self, on: bool) -> Result<(), LedError>;
}

/// Trait für das komplette LED-Feld
///
/// Schreibt alle fünf physischen Ausgänge in einem Zug. Die geteilten
/// Modul-Kanäle sind über die Slots im `OutputState` bereits abgedeckt.
pub trait PanelWriter: Send {
    fn write(&mut self, outputs: &OutputState) -> Result<(), LedError>;
}
