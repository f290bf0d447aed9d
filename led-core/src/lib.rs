//! LED Core - Plattform-agnostisches 16-Bit LED-Register
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert nur das Register, seine Traits und Typen.

#![no_std]

pub mod register;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use register::LedRegister;
pub use traits::LedPort;
pub use types::{ALL_LEDS_OFF, ALL_LEDS_ON, FIRST_LED, LAST_LED, LedError};
