//! Das virtuelle 16-Bit LED-Register
//!
//! Pure Logic ohne Hardware-Dependencies (testbar!)

use crate::traits::LedPort;
use crate::types::{ALL_LEDS_OFF, ALL_LEDS_ON, FIRST_LED, LAST_LED, LedError};

/// Berechnet die Bitmaske für einen LED-Index
///
/// Genau EINE Bereichsprüfung für `turn_on`, `turn_off` und `state`:
/// alle drei Operationen laufen über diesen Helper.
fn led_mask(led: i32) -> Result<u16, LedError> {
    if led < FIRST_LED || led > LAST_LED {
        return Err(LedError::IndexOutOfRange);
    }
    Ok(1 << (led - 1))
}

/// Handle auf das vom Aufrufer besessene Port-Wort
///
/// Bit `i` des Wortes entspricht LED `i + 1`: Bit 0 ist LED 1,
/// Bit 15 ist LED 16. Mehrere unabhängige Register können
/// nebeneinander existieren.
///
/// # Beispiele
///
/// ```
/// # use led_core::LedRegister;
/// let mut port: u16 = 0xFFFF;
/// let mut leds = LedRegister::bind(&mut port); // alle LEDs aus
/// leds.turn_on(3).unwrap();
/// assert_eq!(leds.bits(), 0x0004);
/// ```
pub struct LedRegister<P: LedPort> {
    port: P,
}

impl<P: LedPort> LedRegister<P> {
    /// Bindet das Register an ein Port-Wort und schaltet alle LEDs aus
    pub fn bind(port: P) -> Self {
        let mut register = Self { port };
        register.turn_all_off();
        register
    }

    /// Schaltet eine einzelne LED ein
    ///
    /// Setzt nur das adressierte Bit, alle anderen bleiben unverändert.
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::IndexOutOfRange` zurück wenn `led` außerhalb
    /// von [1, 16] liegt; das Port-Wort bleibt dann unberührt.
    pub fn turn_on(&mut self, led: i32) -> Result<(), LedError> {
        let mask = led_mask(led)?;
        self.port.write(self.port.read() | mask);
        Ok(())
    }

    /// Schaltet eine einzelne LED aus
    ///
    /// Löscht nur das adressierte Bit, alle anderen bleiben unverändert.
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::IndexOutOfRange` zurück wenn `led` außerhalb
    /// von [1, 16] liegt; das Port-Wort bleibt dann unberührt.
    pub fn turn_off(&mut self, led: i32) -> Result<(), LedError> {
        let mask = led_mask(led)?;
        self.port.write(self.port.read() & !mask);
        Ok(())
    }

    /// Liefert den Zustand einer einzelnen LED
    ///
    /// `true` = eingeschaltet, `false` = ausgeschaltet.
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::IndexOutOfRange` zurück wenn `led` außerhalb
    /// von [1, 16] liegt.
    pub fn state(&self, led: i32) -> Result<bool, LedError> {
        let mask = led_mask(led)?;
        Ok(self.port.read() & mask != 0)
    }

    /// Schaltet alle LEDs gleichzeitig ein
    pub fn turn_all_on(&mut self) {
        self.port.write(ALL_LEDS_ON);
    }

    /// Schaltet alle LEDs gleichzeitig aus
    pub fn turn_all_off(&mut self) {
        self.port.write(ALL_LEDS_OFF);
    }

    /// Momentaufnahme des rohen Port-Wortes
    pub fn bits(&self) -> u16 {
        self.port.read()
    }

    /// Gibt das Port-Wort an den Aufrufer zurück
    pub fn into_inner(self) -> P {
        self.port
    }
}
