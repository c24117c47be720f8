//! Command codes.

/// The per-cycle command: a small-integer code carrying the write request in
/// bit 1 and the read request in bit 0.
///
/// Only the four 2-bit patterns are meaningful. [`Command::from_code`]
/// nevertheless admits arbitrary codes, modeling a corrupted command input:
/// the controller answers any code above `3` by latching its `error` flag for
/// one cycle and changing nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command(u8);

/// Decoded command kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Kind {
    /// Neither request: carry all state forward.
    Idle,
    /// Read request only.
    Read,
    /// Write request only.
    Write,
    /// Both requests in the same cycle.
    WriteRead,
    /// A code outside the four valid patterns.
    Invalid,
}

impl Command {
    /// Encodes a request pair.
    pub fn new(write: bool, read: bool) -> Self { Self((u8::from(write) << 1) | u8::from(read)) }

    /// The no-op command.
    pub fn idle() -> Self { Self::new(false, false) }

    /// The read-only command.
    pub fn read() -> Self { Self::new(false, true) }

    /// The write-only command.
    pub fn write() -> Self { Self::new(true, false) }

    /// The simultaneous write-and-read command.
    pub fn write_read() -> Self { Self::new(true, true) }

    /// Wraps a raw code without validation.
    pub fn from_code(code: u8) -> Self { Self(code) }

    /// The raw code.
    pub fn code(self) -> u8 { self.0 }

    pub(crate) fn kind(self) -> Kind {
        match self.0 {
            0b00 => Kind::Idle,
            0b01 => Kind::Read,
            0b10 => Kind::Write,
            0b11 => Kind::WriteRead,
            _ => Kind::Invalid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_pair_encoding() {
        assert_eq!(Command::new(false, false).code(), 0b00);
        assert_eq!(Command::new(false, true).code(), 0b01);
        assert_eq!(Command::new(true, false).code(), 0b10);
        assert_eq!(Command::new(true, true).code(), 0b11);
    }

    #[test]
    fn codes_above_three_are_invalid() {
        assert_eq!(Command::from_code(0b100).kind(), Kind::Invalid);
        assert_eq!(Command::from_code(u8::MAX).kind(), Kind::Invalid);
        assert_eq!(Command::from_code(0b11).kind(), Kind::WriteRead);
    }
}
