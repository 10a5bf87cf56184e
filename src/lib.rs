#![doc = include_str!("../README.md")]
#![warn(
    missing_docs,
    clippy::unwrap_in_result,
    clippy::unwrap_used,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::float_cmp,
    clippy::float_cmp_const,
    clippy::missing_panics_doc,
    clippy::todo
)]
#![no_std]
extern crate alloc;

/// Iterators over the elements of a `LinkedSequence`.
pub mod iter;

mod common_traits;
mod macros;
mod node;
mod sequence;
mod sequence_error;
mod splice;

pub use sequence::LinkedSequence;
pub use sequence_error::SequenceError;
pub use splice::{Relink, SplicePolicy, Truncate};
