//! Core Types für die Taster/LED-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

use rgb::RGB8;

/// Logischer Pegel eines digitalen Pins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinLevel {
    Low,
    High,
}

/// Zustand eines Tasters
///
/// Die Taster sind active-low verdrahtet: interner Pull-Up, der Taster
/// zieht den Pin beim Drücken gegen GND. Gedrückt entspricht also `Low`.
///
/// Rein pegelgesteuert - kein Entprellen, keine Flankenerkennung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Pressed,
    Released,
}

impl ButtonState {
    /// Leitet den Tasterzustand aus dem Pin-Pegel ab (active-low)
    pub fn from_level(level: PinLevel) -> Self {
        match level {
            PinLevel::Low => Self::Pressed,
            PinLevel::High => Self::Released,
        }
    }

    pub fn is_pressed(self) -> bool {
        self == Self::Pressed
    }
}

/// Momentaufnahme aller vier Taster
///
/// Wird in jeder Schleifen-Iteration komplett neu eingelesen.
/// Es gibt keinen gespeicherten Vorzustand über Iterationen hinweg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonSnapshot {
    /// Linker Taster auf dem Launchboard
    pub left: ButtonState,
    /// Rechter Taster auf dem Launchboard
    pub right: ButtonState,
    /// Oberer Taster auf dem Aufsteckmodul
    pub top: ButtonState,
    /// Unterer Taster auf dem Aufsteckmodul
    pub bottom: ButtonState,
}

impl ButtonSnapshot {
    pub fn new(
        left: ButtonState,
        right: ButtonState,
        top: ButtonState,
        bottom: ButtonState,
    ) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Baut eine Momentaufnahme aus Flags (`true` = gedrückt)
    pub fn from_pressed(left: bool, right: bool, top: bool, bottom: bool) -> Self {
        fn state(pressed: bool) -> ButtonState {
            if pressed {
                ButtonState::Pressed
            } else {
                ButtonState::Released
            }
        }
        Self::new(state(left), state(right), state(top), state(bottom))
    }

    /// Kein einziger Taster gedrückt
    pub fn none_pressed(self) -> bool {
        !self.left.is_pressed()
            && !self.right.is_pressed()
            && !self.top.is_pressed()
            && !self.bottom.is_pressed()
    }

    /// Alle vier Taster gleichzeitig gedrückt
    pub fn all_pressed(self) -> bool {
        self.left.is_pressed()
            && self.right.is_pressed()
            && self.top.is_pressed()
            && self.bottom.is_pressed()
    }
}

/// Ausgabezustand aller LED-Kanäle
///
/// Fünf physische Ausgänge. Rot und Grün des Aufsteckmoduls liegen auf
/// denselben Pins wie Rot und Grün der rechten RGB-LED. Diese Kanäle
/// existieren deshalb nur als Alias-Zugriffe auf die geteilten Slots,
/// nie als eigene Felder - sonst würde das Modell von der Verdrahtung
/// abweichen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputState {
    /// Linke LED auf dem Launchboard (einfarbig)
    pub left_led: bool,
    /// Rechte RGB-LED: roter Kanal (geteilt mit Modul-Rot)
    pub right_red: bool,
    /// Rechte RGB-LED: grüner Kanal (geteilt mit Modul-Grün)
    pub right_green: bool,
    /// Rechte RGB-LED: blauer Kanal
    pub right_blue: bool,
    /// Blauer Kanal der Modul-RGB-LED (eigener Pin)
    pub module_blue: bool,
}

impl OutputState {
    /// Grundzustand: alle Kanäle dunkel
    pub const fn all_off() -> Self {
        Self {
            left_led: false,
            right_red: false,
            right_green: false,
            right_blue: false,
            module_blue: false,
        }
    }

    pub fn is_all_off(&self) -> bool {
        *self == Self::all_off()
    }

    /// Roter Kanal der Modul-RGB-LED (Alias auf den geteilten Slot)
    pub fn module_red(&self) -> bool {
        self.right_red
    }

    pub fn set_module_red(&mut self, on: bool) {
        self.right_red = on;
    }

    /// Grüner Kanal der Modul-RGB-LED (Alias auf den geteilten Slot)
    pub fn module_green(&self) -> bool {
        self.right_green
    }

    pub fn set_module_green(&mut self, on: bool) {
        self.right_green = on;
    }

    /// Farbe der rechten RGB-LED als RGB8-Wert
    ///
    /// Jeder aktive Kanal bekommt den übergebenen Helligkeitswert.
    pub fn right_color(&self, brightness: u8) -> RGB8 {
        RGB8 {
            r: if self.right_red { brightness } else { 0 },
            g: if self.right_green { brightness } else { 0 },
            b: if self.right_blue { brightness } else { 0 },
        }
    }
}

/// Deutscher Farbname für eine RGB-Kombination
///
/// Die Kanäle sind jeweils nur an oder aus, damit ergeben sich
/// acht benennbare Mischfarben.
pub fn color_name(color: RGB8) -> &'static str {
    match (color.r > 0, color.g > 0, color.b > 0) {
        (false, false, false) => "Aus",
        (true, false, false) => "Rot",
        (false, true, false) => "Grün",
        (false, false, true) => "Blau",
        (true, true, false) => "Gelb",
        (true, false, true) => "Violett",
        (false, true, true) => "Türkis",
        (true, true, true) => "Weiß",
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for ButtonState {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            ButtonState::Pressed => defmt::write!(fmt, "gedrückt"),
            ButtonState::Released => defmt::write!(fmt, "losgelassen"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ButtonSnapshot {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "ButtonSnapshot {{ links: {}, rechts: {}, oben: {}, unten: {} }}",
            self.left,
            self.right,
            self.top,
            self.bottom
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for OutputState {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "OutputState {{ links: {}, rechts: {}, modul-blau: {} }}",
            self.left_led,
            color_name(self.right_color(1)),
            self.module_blue
        )
    }
}
