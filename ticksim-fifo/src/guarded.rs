//! Loss-free rendition: the simultaneous command case-splits on occupancy.

use ticksim::{Synchronous, Word};
use tracing::debug;

use crate::cmd::Kind;
use crate::config::{ConfigError, FifoConfig};
use crate::signal::{FifoInput, FifoOutput, FifoState};

/// The controller rendition that never drops or fabricates data.
///
/// A lone write against a full buffer and a lone read against an empty one
/// are silently ignored. A simultaneous write-and-read is case-split: with
/// the buffer empty only the write proceeds (the read has nothing to
/// consume); with it full only the read proceeds (the write has no free
/// slot); with both flags somehow asserted — unreachable through committed
/// transitions — neither side does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guarded {
    config: FifoConfig,
}

impl Guarded {
    /// Creates the rendition over a validated config.
    pub fn new(config: FifoConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration.
    pub fn config(&self) -> FifoConfig { self.config }
}

impl Synchronous for Guarded {
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
                    debug!(state = %state, "read request ignored: buffer empty");
                } else {
                    next.take_read(state.wptr);
                }
            }
            Kind::Write => {
                if state.full {
                    debug!(state = %state, "write request ignored: buffer full");
                } else {
                    write_enable = true;
                    next.take_write(state.rptr);
                }
            }
            Kind::WriteRead => match (state.empty, state.full) {
                (false, false) => {
                    // Net occupancy unchanged; flags stay down.
                    write_enable = true;
                    next.wptr = next.wptr.succ();
                    next.rptr = next.rptr.succ();
                }
                (true, false) => {
                    debug!("simultaneous command on empty buffer: only the write proceeds");
                    write_enable = true;
                    next.take_write(state.rptr);
                }
                (false, true) => {
                    debug!("simultaneous command on full buffer: only the read proceeds");
                    next.take_read(state.wptr);
                }
                (true, true) => {
                    debug!("simultaneous command with both flags asserted: nothing proceeds");
                }
            },
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
