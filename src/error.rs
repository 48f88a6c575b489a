//! Error types for spline construction, evaluation and the linear-algebra
//! kernels.

use thiserror::Error;

/// Errors that can occur during spline and solver operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumericError {
    /// The input has the wrong shape for the requested operation.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    /// A pivot of exactly zero was met while eliminating.
    #[error("singular system: zero pivot at row {row}")]
    SingularSystem { row: usize },
}

/// The concrete reason an input was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// No samples were given.
    #[error("at least one sample is required")]
    Empty,

    /// Two sequences that must pair up element-wise differ in length.
    #[error("length mismatch: expected {expected}, found {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// The operation needs more samples than were given.
    #[error("at least {min} samples are required. Found: {actual}")]
    TooFewPoints { min: usize, actual: usize },

    /// No segment of the spline contains the query at this position.
    #[error("query #{index} is not contained in any spline segment")]
    UncontainedQuery { index: usize },

    /// The coefficient table does not have one row per knot plus one.
    #[error("expected {expected} coefficient rows. Found: {actual}")]
    CoefficientShape { expected: usize, actual: usize },

    /// A matrix row does not have as many columns as there are rows.
    #[error("row {row} has {actual} columns, a square matrix needs {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// The knot vector is not strictly increasing.
    #[cfg(feature = "monotonic_check")]
    #[error("knots are not strictly increasing at index {index}")]
    NonMonotonic { index: usize },
}

/// Result type for spline and solver operations.
pub type NumericResult<T> = Result<T, NumericError>;
