//! Failure vocabulary shared by every task session
//!
//! All of these are recoverable by the user: a session that produces one
//! returns to its action menu and the user simply tries again.

use crate::kernels::KernelError;
use thiserror::Error;

/// Why a step of a task conversation did not succeed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("arrays must have the same length (got {left} and {right})")]
    LengthMismatch { left: usize, right: usize },
    #[error("array must not be empty")]
    EmptyInput,
    #[error("negative numbers are not allowed (got {0})")]
    NegativeValue(i64),
    #[error("{0}")]
    MalformedText(String),
    #[error("{0}")]
    InvalidSize(String),
    #[error("no data has been entered yet")]
    NoDataYet,
    #[error("the algorithm has not been executed yet")]
    NotComputedYet,
    #[error("the numbers are too large to add together")]
    Overflow,
}

impl TaskError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedText(message.into())
    }

    pub fn invalid_size(message: impl Into<String>) -> Self {
        Self::InvalidSize(message.into())
    }

    /// Whether the error describes bad text typed by the user, as opposed
    /// to an action requested at the wrong moment
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Self::NoDataYet | Self::NotComputedYet)
    }
}

impl From<KernelError> for TaskError {
    fn from(err: KernelError) -> Self {
        match err {
            KernelError::LengthMismatch { left, right } => Self::LengthMismatch { left, right },
            KernelError::EmptyInput => Self::EmptyInput,
            KernelError::NegativeValue(v) => Self::NegativeValue(v),
            KernelError::Overflow => Self::Overflow,
        }
    }
}
