//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für den Zugriff auf das
//! Port-Wort ohne konkrete Implementierung.

/// Trait für den Zugriff auf das 16-Bit Port-Wort
///
/// Abstrahiert das Speicherwort, an dem die LEDs hängen.
///
/// # Implementierungen
/// - **Production:** memory-mapped Register in der Firmware
/// - **Testing:** MockPort (in-memory Mock)
pub trait LedPort: Send {
    /// Schreibt das komplette Port-Wort
    fn write(&mut self, bits: u16);

    /// Liest das komplette Port-Wort
    fn read(&self) -> u16;
}

/// Der Normalfall: das Port-Wort gehört dem Aufrufer, das Register
/// hält nur eine Referenz darauf.
impl LedPort for &mut u16 {
    fn write(&mut self, bits: u16) {
        **self = bits;
    }

    fn read(&self) -> u16 {
        **self
    }
}

/// Toleriert ein fehlendes Port-Wort: `write` ist ein No-op,
/// `read` liefert 0 (alle LEDs aus).
impl<P: LedPort> LedPort for Option<P> {
    fn write(&mut self, bits: u16) {
        if let Some(port) = self {
            port.write(bits);
        }
    }

    fn read(&self) -> u16 {
        self.as_ref().map_or(0, P::read)
    }
}
