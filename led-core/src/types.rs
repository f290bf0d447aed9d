//! Core Types für das LED-Register
//!
//! Konstanten und Fehler-Typen ohne Hardware-Dependencies

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Kleinster gültiger LED-Index (1-basiert)
pub const FIRST_LED: i32 = 1;

/// Größter gültiger LED-Index
pub const LAST_LED: i32 = 16;

/// Port-Wort mit allen LEDs eingeschaltet
pub const ALL_LEDS_ON: u16 = 0xFFFF;

/// Port-Wort mit allen LEDs ausgeschaltet
pub const ALL_LEDS_OFF: u16 = 0x0000;

/// Fehler-Typ für LED-Operationen
///
/// Ein ungültiger Index wird nie geklemmt oder umgebrochen,
/// sondern immer als Fehler gemeldet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LedError {
    /// LED-Index außerhalb von `[FIRST_LED, LAST_LED]`
    IndexOutOfRange,
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for LedError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LedError::IndexOutOfRange => defmt::write!(fmt, "IndexOutOfRange"),
        }
    }
}
