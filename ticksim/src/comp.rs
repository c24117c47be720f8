//! Synchronous components (Mealy machines).

use std::fmt::Debug;

/// A synchronous component, described as a Mealy machine over value-level
/// signals.
///
/// [`comb`](Self::comb) generates (1) the current-cycle output and (2) the
/// complete next-cycle state, both as pure functions of this cycle's input and
/// a frozen snapshot of the committed state. The scheduler commits the
/// returned state as a whole, so no evaluation can observe a partial update
/// of its own cycle.
pub trait Synchronous {
    /// Input signals sampled each cycle.
    type Input;

    /// Output signals of each cycle.
    type Output;

    /// Registered state.
    type State: Clone + Debug;

    /// The state registered at reset.
    fn init(&self) -> Self::State;

    /// Combinational logic: current-cycle output and next-cycle state.
    fn comb(&self, input: &Self::Input, state: &Self::State) -> (Self::Output, Self::State);
}
