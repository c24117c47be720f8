//! Tick scheduler.

use tracing::trace;

use crate::comp::Synchronous;

/// Drives a [`Synchronous`] component one discrete tick at a time.
///
/// The scheduler exclusively owns the committed state. Each [`tick`](Self::tick)
/// samples one input, evaluates the component's combinational logic against
/// the committed state, and commits the returned next state atomically.
/// [`reset`](Self::reset) is the asynchronous priority path: it forces the
/// reset state immediately, independent of any tick boundary.
#[derive(Debug)]
pub struct Sim<M: Synchronous> {
    module: M,
    state: M::State,
    cycle: u64,
}

impl<M: Synchronous> Sim<M> {
    /// Creates a scheduler with the component in its reset state.
    pub fn new(module: M) -> Self {
        let state = module.init();
        Self { module, state, cycle: 0 }
    }

    /// Advances one tick and returns the cycle's output.
    pub fn tick(&mut self, input: &M::Input) -> M::Output {
        let (output, state) = self.module.comb(input, &self.state);
        self.state = state;
        self.cycle += 1;
        trace!(cycle = self.cycle, "tick committed");
        output
    }

    /// Forces the reset state, overriding whatever command this cycle carries.
    pub fn reset(&mut self) {
        self.state = self.module.init();
        trace!(cycle = self.cycle, "reset asserted");
    }

    /// Evaluates the combinational logic without committing anything.
    pub fn peek(&self, input: &M::Input) -> M::Output { self.module.comb(input, &self.state).0 }

    /// The committed state, readable between ticks.
    pub fn state(&self) -> &M::State { &self.state }

    /// The component under simulation.
    pub fn module(&self) -> &M { &self.module }

    /// Ticks elapsed since construction. Reset does not rewind the counter;
    /// it is simulation bookkeeping, not architectural state.
    pub fn cycle(&self) -> u64 { self.cycle }
}
