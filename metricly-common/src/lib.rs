use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod input;
pub use input::ArrayLike;

/// Error types for Metricly operations
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricError {
    /// An input could not be read as a numeric array.
    #[error("All inputs must be array-like and numeric.")]
    TypeConversion,

    /// An input array holds at least one negative element.
    #[error("Inputs must not contain negative values.")]
    NegativeValue,

    /// The denominator total of a formula summed to exactly zero.
    /// Carries the business quantity, e.g. `"Total hires"`.
    #[error("{0} must be greater than zero.")]
    DivisionGuard(String),

    /// A formula looked up by name was handed the wrong number of inputs.
    #[error("{formula} expects {expected} inputs, got {actual}.")]
    Arity {
        formula: String,
        expected: usize,
        actual: usize,
    },
}

/// JSON error envelope for reporting layers that surface failed metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&MetricError> for ErrorResponse {
    fn from(err: &MetricError) -> Self {
        Self { error: err.to_string() }
    }
}

/// Result type for Metricly operations
pub type Result<T> = std::result::Result<T, MetricError>;
