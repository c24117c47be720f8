//! Divergent rendition: the simultaneous command advances both pointers
//! unconditionally.
//!
//! One of the two source definitions this design descends from skips the
//! occupancy case-split on the simultaneous write-and-read command. The
//! consequences are exactly the ones the case-split exists to prevent:
//!
//! - buffer **full**: the write pointer is pushed past the read pointer and
//!   the incoming word overwrites the oldest unread one;
//! - buffer **empty**: the read pointer is advanced past the write pointer,
//!   fabricating a read, and the word just written is stranded outside the
//!   readable window.
//!
//! This rendition is not for new code; it exists so the divergence between
//! the two definitions stays documented and demonstrable (see
//! `tests/divergence.rs`) instead of being silently resolved. Every command
//! other than the simultaneous one behaves identically to [`Guarded`].
//!
//! [`Guarded`]: crate::Guarded

use ticksim::{Synchronous, Word};
use tracing::debug;

use crate::cmd::Kind;
use crate::config::{ConfigError, FifoConfig};
use crate::signal::{FifoInput, FifoOutput, FifoState};

/// The controller rendition that never guards the simultaneous command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unguarded {
    config: FifoConfig,
}

impl Unguarded {
    /// Creates the rendition over a validated config.
    pub fn new(config: FifoConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration.
    pub fn config(&self) -> FifoConfig { self.config }
}

impl Synchronous for Unguarded {
    type Input = FifoInput;
    type Output = FifoOutput;
    type State = FifoState;

    fn init(&self) -> FifoState { FifoState::reset(self.config) }

    fn comb(&self, input: &FifoInput, state: &FifoState) -> (FifoOutput, FifoState) {
        let mut next = state.clone();
        next.error = false;
        let mut write_enable = false;

        match input.cmd.kind() {
            Kind::Idle => {}
            Kind::Read => {
                if state.empty {
                    debug!("read request ignored: buffer empty");
                } else {
                    next.take_read(state.wptr);
                }
            }
            Kind::Write => {
                if state.full {
                    debug!("write request ignored: buffer full");
                } else {
                    write_enable = true;
                    next.take_write(state.rptr);
                }
            }
            Kind::WriteRead => {
                // No occupancy guard: both pointers move and the flags are
                // carried forward, wrong or not.
                if state.empty || state.full {
                    debug!(state = %state, "unguarded simultaneous command on empty or full buffer: pointers corrupted");
                }
                write_enable = true;
                next.wptr = next.wptr.succ();
                next.rptr = next.rptr.succ();
            }
            Kind::Invalid => {
                debug!(code = input.cmd.code(), "invalid command code latched");
                next.error = true;
            }
        }

        if write_enable {
            next.write(state.wptr, Word::new(self.config.data_width, input.write_data.value()));
        }

        let output =
            FifoOutput { read_data: state.read(state.rptr), empty: next.empty, full: next.full, error: next.error };
        (output, next)
    }
}
