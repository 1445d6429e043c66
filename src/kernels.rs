//! Pure array kernels
//!
//! Each kernel is a total function over its declared domain: it performs no
//! I/O, never mutates its inputs and reports invalid input through
//! [`KernelError`] rather than a sentinel value.

mod merge;
mod reversal;
mod subarray;

#[cfg(test)]
mod proptests;

pub use merge::merge_with_cancellation;
pub use reversal::{count_matches_with_reversal, reverse_digits};
pub use subarray::count_subarrays_with_sum;

use thiserror::Error;

/// Reasons a kernel rejects its input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KernelError {
    #[error("arrays must have the same length (got {left} and {right})")]
    LengthMismatch { left: usize, right: usize },
    #[error("array must not be empty")]
    EmptyInput,
    #[error("negative numbers are not allowed (got {0})")]
    NegativeValue(i64),
    #[error("arithmetic overflow")]
    Overflow,
}
