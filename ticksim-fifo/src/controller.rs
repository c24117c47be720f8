//! Per-cycle step interface over the tick scheduler.

use ticksim::{Sim, Synchronous, Word};

use crate::cmd::Command;
use crate::config::{ConfigError, FifoConfig};
use crate::guarded::Guarded;
use crate::signal::{FifoInput, FifoOutput, FifoState};
use crate::unguarded::Unguarded;

/// Step-interface input, sampled once per tick.
///
/// `reset` is sampled before the command and overrides it; the request pair
/// is encoded into a [`Command`] and dispatched by the controller's
/// next-state logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepInput {
    /// Reset assertion; sampled first, overrides the command.
    pub reset: bool,

    /// Read request.
    pub read_request: bool,

    /// Write request.
    pub write_request: bool,

    /// Data word to enqueue; masked to the configured data width.
    pub write_data: u64,
}

impl StepInput {
    /// The idle cycle: no reset, no requests.
    pub fn idle() -> Self { Self { reset: false, read_request: false, write_request: false, write_data: 0 } }

    /// A reset cycle.
    pub fn reset() -> Self { Self { reset: true, ..Self::idle() } }

    /// A read-only cycle.
    pub fn read() -> Self { Self { read_request: true, ..Self::idle() } }

    /// A write-only cycle carrying `value`.
    pub fn write(value: u64) -> Self { Self { write_request: true, write_data: value, ..Self::idle() } }

    /// A simultaneous write-and-read cycle carrying `value`.
    pub fn write_read(value: u64) -> Self { Self { read_request: true, ..Self::write(value) } }
}

/// The FIFO controller: a rendition of the next-state logic driven by a
/// [`Sim`], exposed through the fixed per-cycle port set of a clocked
/// design.
///
/// Calling [`step`](Self::step) exactly once per tick, with `reset` sampled
/// first, reproduces the controller state machine; between ticks only the
/// committed flags and the combinational read port are visible.
#[derive(Debug)]
pub struct Controller<M: Synchronous<Input = FifoInput, Output = FifoOutput, State = FifoState>> {
    sim: Sim<M>,
    config: FifoConfig,
}

/// Controller over the loss-free [`Guarded`] rendition.
pub type GuardedFifo = Controller<Guarded>;

/// Controller over the divergent [`Unguarded`] rendition.
pub type UnguardedFifo = Controller<Unguarded>;

impl GuardedFifo {
    /// Creates a controller over the loss-free rendition.
    pub fn new(config: FifoConfig) -> Result<Self, ConfigError> { Ok(Self::over(Guarded::new(config)?, config)) }
}

impl UnguardedFifo {
    /// Creates a controller over the divergent rendition.
    pub fn new(config: FifoConfig) -> Result<Self, ConfigError> { Ok(Self::over(Unguarded::new(config)?, config)) }
}

impl<M: Synchronous<Input = FifoInput, Output = FifoOutput, State = FifoState>> Controller<M> {
    fn over(module: M, config: FifoConfig) -> Self { Self { sim: Sim::new(module), config } }

    /// Advances one tick. `reset` is sampled first; when it is asserted the
    /// command is overridden, the buffer returns to its zeroed empty state,
    /// and no storage write occurs.
    pub fn step(&mut self, input: StepInput) -> FifoOutput {
        if input.reset {
            self.reset();
            return FifoOutput { read_data: self.read_data(), empty: true, full: false, error: false };
        }
        self.command(Command::new(input.write_request, input.read_request), input.write_data)
    }

    /// Advances one tick driven by an explicit command code, including the
    /// defensive codes above `3` that only latch the error flag.
    pub fn command(&mut self, cmd: Command, write_data: u64) -> FifoOutput {
        let input = FifoInput { cmd, write_data: Word::new(self.config.data_width, write_data) };
        self.sim.tick(&input)
    }

    /// The asynchronous reset path: forces the zeroed empty state at any
    /// instant, with priority over any command.
    pub fn reset(&mut self) { self.sim.reset(); }

    /// The committed state, readable between ticks.
    pub fn state(&self) -> &FifoState { self.sim.state() }

    /// The combinational read port: the word at the committed read pointer.
    /// Stale whenever [`empty`](Self::empty) is set.
    pub fn read_data(&self) -> Word {
        let state = self.sim.state();
        state.read(state.rptr())
    }

    /// The committed empty flag.
    pub fn empty(&self) -> bool { self.sim.state().empty() }

    /// The committed full flag.
    pub fn full(&self) -> bool { self.sim.state().full() }

    /// The committed error latch.
    pub fn error(&self) -> bool { self.sim.state().error() }

    /// Number of queued words.
    pub fn len(&self) -> usize { self.sim.state().len() }

    /// Whether nothing is queued.
    pub fn is_empty(&self) -> bool { self.sim.state().is_empty() }

    /// The configuration.
    pub fn config(&self) -> FifoConfig { self.config }

    /// Ticks elapsed since construction.
    pub fn cycle(&self) -> u64 { self.sim.cycle() }
}
