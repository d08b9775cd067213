//! Raw serial input seam.
//!
//! The menu reads single unbuffered bytes, terminal-monitor style: check
//! whether a byte is pending, then take exactly one. Output goes through
//! `core::fmt::Write` and is not part of this trait.

/// Byte-at-a-time input from a serial connection.
///
/// `wait_byte` and `drain` have busy-poll default implementations matching
/// the bare-metal idiom (spin until a byte arrives, no sleep, no timeout).
/// Implementors backed by an OS may override `wait_byte` with a genuinely
/// blocking read; the contract is only "return the next byte, eventually".
pub trait SerialInput {
    /// Non-blocking check: is at least one byte pending?
    fn available(&mut self) -> bool;

    /// Take one pending byte. Only meaningful after `available()` returned
    /// true; what it returns otherwise is implementation-defined.
    fn read_byte(&mut self) -> u8;

    /// Block until a byte arrives, then return it.
    ///
    /// Blocks indefinitely if no input ever arrives; the only way out is
    /// user input.
    fn wait_byte(&mut self) -> u8 {
        while !self.available() {}
        self.read_byte()
    }

    /// Read and discard every immediately available byte.
    ///
    /// Absorbs the CR/LF noise line-buffered terminal emulators send after
    /// a keystroke, so leftovers don't get misread as the next command.
    fn drain(&mut self) {
        while self.available() {
            let _ = self.read_byte();
        }
    }
}
