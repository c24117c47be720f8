//! Controller configuration.

use thiserror::Error;
use ticksim::{clog2, WidthError, Word};

/// Maximum supported address width; capacity is `2^addr_width` slots of
/// in-memory storage, so this bounds allocation, not correctness.
pub const MAX_ADDR_WIDTH: usize = 32;

/// Construction-time parameters of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FifoConfig {
    /// Width of a data word, in bits.
    pub data_width: usize,

    /// Width of a slot address, in bits; the capacity is `2^addr_width`.
    pub addr_width: usize,
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Data width outside the representable word range.
    #[error("invalid data width: {0}")]
    Data(#[from] WidthError),

    /// Address width too large to back with in-memory storage.
    #[error("address width {width} exceeds the maximum of {} bits", MAX_ADDR_WIDTH)]
    AddrTooWide {
        /// The rejected width.
        width: usize,
    },
}

impl FifoConfig {
    /// Creates a config without validating it; see [`validate`](Self::validate).
    pub fn new(data_width: usize, addr_width: usize) -> Self { Self { data_width, addr_width } }

    /// The config with the smallest power-of-two capacity holding `capacity`
    /// words.
    pub fn for_capacity(data_width: usize, capacity: usize) -> Self {
        Self { data_width, addr_width: clog2(capacity) }
    }

    /// Checks that both widths are constructible.
    pub fn validate(self) -> Result<(), ConfigError> {
        Word::check_width(self.data_width)?;
        if self.addr_width > MAX_ADDR_WIDTH {
            return Err(ConfigError::AddrTooWide { width: self.addr_width });
        }
        Ok(())
    }

    /// The number of slots, `2^addr_width`.
    pub fn capacity(self) -> usize { 1 << self.addr_width }
}
