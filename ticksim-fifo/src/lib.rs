//! Synchronous FIFO controller with explicit occupancy flags.
//!
//! A fixed-capacity circular buffer of `2^addr_width` words of `data_width`
//! bits, driven one command per tick by the [`ticksim`] scheduler. Occupancy
//! is tracked by explicit `full`/`empty` flags — pointer equality alone is
//! ambiguous and the flags, not the pointers, are authoritative. Overflowing
//! writes and underflowing reads are silently ignored; a malformed command
//! code latches a one-cycle `error` flag. Reset is an asynchronous priority
//! path that empties and zeroes the buffer at any instant.
//!
//! # The two renditions
//!
//! The controller exists in two near-duplicate renditions that disagree on
//! the simultaneous write-and-read command, mirroring a discrepancy between
//! the two source definitions this design descends from:
//!
//! - [`Guarded`] case-splits on `empty`/`full`: when only one side of the
//!   simultaneous operation is legal, only that side proceeds. This is the
//!   loss-free behavior and what new code should use.
//! - [`Unguarded`] advances both pointers unconditionally. When the buffer is
//!   full this overwrites unread data; when it is empty it fabricates a read
//!   and strands the written word. It is retained, documented and tested, so
//!   the divergence stays visible instead of being silently resolved; see
//!   `tests/divergence.rs`.
//!
//! The renditions are identical on every command other than the simultaneous
//! one.

// # Tries to deny all lints (`rustc -W help`).
#![deny(absolute_paths_not_starting_with_crate)]
#![deny(anonymous_parameters)]
#![deny(deprecated_in_future)]
#![deny(explicit_outlives_requirements)]
#![deny(keyword_idents)]
#![deny(macro_use_extern_crate)]
#![deny(missing_debug_implementations)]
#![deny(non_ascii_idents)]
#![deny(rust_2018_idioms)]
#![deny(trivial_numeric_casts)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(unused_extern_crates)]
#![deny(unused_import_braces)]
#![deny(unused_qualifications)]
#![deny(variant_size_differences)]
#![deny(warnings)]
//
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::missing_crate_level_docs)]
#![deny(rustdoc::private_doc_tests)]
#![deny(rustdoc::invalid_codeblock_attributes)]
#![deny(rustdoc::invalid_html_tags)]
#![deny(rustdoc::invalid_rust_codeblocks)]
#![deny(rustdoc::bare_urls)]
#![deny(unreachable_pub)]
//
#![allow(elided_lifetimes_in_paths)]

mod cmd;
mod config;
mod controller;
mod guarded;
mod signal;
mod unguarded;

pub use cmd::Command;
pub use config::{ConfigError, FifoConfig, MAX_ADDR_WIDTH};
pub use controller::{Controller, GuardedFifo, StepInput, UnguardedFifo};
pub use guarded::Guarded;
pub use signal::{FifoInput, FifoOutput, FifoState};
pub use unguarded::Unguarded;
