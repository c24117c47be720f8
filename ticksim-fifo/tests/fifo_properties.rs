//! Property tests: the guarded controller against a model queue.

use std::collections::VecDeque;

use proptest::prelude::*;
use ticksim::mask;
use ticksim_fifo::{Command, FifoConfig, GuardedFifo, StepInput};

/// One cycle's worth of stimulus.
#[derive(Debug, Clone, Copy)]
enum Op {
    Idle,
    Write(u64),
    Read,
    WriteRead(u64),
    Invalid(u8),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        1 => Just(Op::Idle),
        4 => any::<u64>().prop_map(Op::Write),
        4 => Just(Op::Read),
        2 => any::<u64>().prop_map(Op::WriteRead),
        1 => (4u8..=u8::MAX).prop_map(Op::Invalid),
    ]
}

proptest! {
    /// FIFO order, the capacity bound, and the flag invariants hold under
    /// arbitrary traffic, for every address width up to 4.
    #[test]
    fn tracks_a_model_queue(ops in proptest::collection::vec(op(), 1..256), addr_width in 0usize..5) {
        let data_width = 9;
        let config = FifoConfig::new(data_width, addr_width);
        let capacity = config.capacity();
        let mut fifo = GuardedFifo::new(config).unwrap();
        let mut model: VecDeque<u64> = VecDeque::new();

        for op in ops {
            match op {
                Op::Idle => {
                    fifo.step(StepInput::idle());
                }
                Op::Write(v) => {
                    fifo.step(StepInput::write(v));
                    if model.len() < capacity {
                        model.push_back(v & mask(data_width));
                    }
                }
                Op::Read => {
                    let out = fifo.step(StepInput::read());
                    if let Some(expected) = model.pop_front() {
                        prop_assert_eq!(out.read_data.value(), expected);
                    }
                }
                Op::WriteRead(v) => {
                    let out = fifo.step(StepInput::write_read(v));
                    if model.is_empty() {
                        model.push_back(v & mask(data_width));
                    } else {
                        let expected = model.pop_front().unwrap();
                        prop_assert_eq!(out.read_data.value(), expected);
                        if model.len() + 1 < capacity {
                            model.push_back(v & mask(data_width));
                        }
                    }
                }
                Op::Invalid(code) => {
                    let out = fifo.command(Command::from_code(code), 0);
                    prop_assert!(out.error);
                }
            }

            prop_assert_eq!(fifo.len(), model.len());
            prop_assert_eq!(fifo.empty(), model.is_empty());
            prop_assert_eq!(fifo.full(), model.len() == capacity);
            prop_assert!(!(fifo.empty() && fifo.full()));
        }
    }

    /// The idle command never changes committed state, no matter what state
    /// preceding traffic left behind.
    #[test]
    fn idle_cycles_change_nothing(ops in proptest::collection::vec(op(), 0..64), idles in 1usize..8) {
        let mut fifo = GuardedFifo::new(FifoConfig::new(8, 2)).unwrap();
        for op in ops {
            match op {
                Op::Idle => { fifo.step(StepInput::idle()); }
                Op::Write(v) => { fifo.step(StepInput::write(v)); }
                Op::Read => { fifo.step(StepInput::read()); }
                Op::WriteRead(v) => { fifo.step(StepInput::write_read(v)); }
                Op::Invalid(code) => { fifo.command(Command::from_code(code), 0); }
            }
        }
        fifo.step(StepInput::idle());
        let before = fifo.state().clone();
        for _ in 0..idles {
            fifo.step(StepInput::idle());
        }
        prop_assert_eq!(fifo.state(), &before);
    }

    /// The error latch is up exactly when the previous cycle's code was bad.
    #[test]
    fn error_latch_tracks_bad_codes(codes in proptest::collection::vec(any::<u8>(), 1..64)) {
        let mut fifo = GuardedFifo::new(FifoConfig::new(8, 2)).unwrap();
        for code in codes {
            let out = fifo.command(Command::from_code(code), 1);
            prop_assert_eq!(out.error, code > 3);
            prop_assert_eq!(fifo.error(), code > 3);
        }
    }

    /// Reset lands in the canonical post-reset state from anywhere.
    #[test]
    fn reset_from_anywhere(ops in proptest::collection::vec(op(), 0..64)) {
        let mut fifo = GuardedFifo::new(FifoConfig::new(8, 3)).unwrap();
        for op in ops {
            match op {
                Op::Idle => { fifo.step(StepInput::idle()); }
                Op::Write(v) => { fifo.step(StepInput::write(v)); }
                Op::Read => { fifo.step(StepInput::read()); }
                Op::WriteRead(v) => { fifo.step(StepInput::write_read(v)); }
                Op::Invalid(code) => { fifo.command(Command::from_code(code), 0); }
            }
        }
        let out = fifo.step(StepInput::reset());
        prop_assert!(out.empty && !out.full && !out.error);
        prop_assert_eq!(fifo.len(), 0);
        prop_assert!(fifo.read_data().is_zero());
    }
}
