//! TickSim: value-level simulation of synchronous (clocked) components.
//!
//! A component is a Mealy machine: a pure function from this cycle's sampled
//! input and a frozen snapshot of the registered state to the cycle's output
//! and the complete next state. The [`Sim`] scheduler owns the committed
//! state, advances it one discrete tick at a time, and provides the
//! asynchronous reset path that overrides any command.

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

pub mod comp;
pub mod logic;
pub mod sim;
pub mod utils;
pub mod word;

pub use comp::Synchronous;
pub use logic::{LogicValue, LogicValues};
pub use sim::Sim;
pub use utils::*;
pub use word::{WidthError, Word};
