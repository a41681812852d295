//! Error handling for the co-Z arithmetic core
//!
//! Every variant describes a violated precondition. None of them are
//! transient, so callers should treat them as bugs in how the API is driven
//! rather than something to retry.

use thiserror::Error as ThisError;

/// The error type for field, curve and point operations
#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Field inversion attempted on zero
    #[error("{context}: zero has no multiplicative inverse")]
    NonInvertible {
        /// Operation that requested the inverse
        context: &'static str,
    },

    /// Operands belong to different fields or curves
    #[error("{operation}: operands belong to different fields or curves")]
    IncompatibleContext {
        /// Operation that received the operands
        operation: &'static str,
    },

    /// The curve cannot be used for the requested operation
    #[error("invalid curve: {reason}")]
    InvalidCurve {
        /// Why the curve was rejected
        reason: &'static str,
    },

    /// A co-Z formula received points violating its Z-coordinate precondition
    #[error("{operation}: malformed co-Z input, {reason}")]
    MalformedCoZInput {
        /// Formula that was invoked
        operation: &'static str,
        /// Which precondition was violated
        reason: &'static str,
    },

    /// Parameter validation error
    #[error("invalid parameter '{name}': {reason}")]
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Length validation error
    #[error("invalid length for {context}: expected {expected}, got {actual}")]
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }

    /// Shorthand to create a MalformedCoZInput error
    pub fn co_z(operation: &'static str, reason: &'static str) -> Self {
        Error::MalformedCoZInput { operation, reason }
    }
}

/// Result type for the arithmetic core
pub type Result<T> = core::result::Result<T, Error>;

pub mod validate;
