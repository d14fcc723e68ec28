//! Error types for domain construction, generation, and filtering.
//!
//! All failures are local, synchronous, and non-retryable: the engine
//! performs no I/O during generation, so every error reports an invalid
//! parameter or a degenerate input that the caller must correct.

use std::fmt;

/// Result type alias for noise engine operations
pub type NoiseResult<T> = Result<T, NoiseError>;

/// Failure kinds reported by domain builders, generators, and filters
#[derive(Debug, Clone, PartialEq)]
pub enum NoiseError {
    /// Non-positive step/scale/count, or an empty interval
    InvalidDomain {
        parameter: String,
        value: String,
        constraint: String,
    },

    /// Zero-sized field shape
    InvalidShape { rows: usize, cols: usize },

    /// Filter fraction or normalization target outside its valid range
    InvalidRange { parameter: String, value: f64 },

    /// Rescaling a constant field has no well-defined gain
    DegenerateRange { value: f64 },

    /// Control-node configuration too sparse or degenerate for interpolation
    Interpolation { details: String },
}

impl fmt::Display for NoiseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoiseError::InvalidDomain {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid domain parameter '{}' = '{}': must satisfy {}",
                    parameter, value, constraint
                )
            }
            NoiseError::InvalidShape { rows, cols } => {
                write!(
                    f,
                    "Invalid field shape {}x{}: both dimensions must be non-zero",
                    rows, cols
                )
            }
            NoiseError::InvalidRange { parameter, value } => {
                write!(
                    f,
                    "Parameter '{}' = {} is outside its valid range",
                    parameter, value
                )
            }
            NoiseError::DegenerateRange { value } => {
                write!(
                    f,
                    "Cannot rescale a constant field (every element equals {}); map it to the target midpoint instead",
                    value
                )
            }
            NoiseError::Interpolation { details } => {
                write!(f, "Interpolation failed: {}", details)
            }
        }
    }
}

impl std::error::Error for NoiseError {}

// Convenience constructors for common error patterns
impl NoiseError {
    /// Create an invalid domain error
    pub fn invalid_domain(
        parameter: impl Into<String>,
        value: impl fmt::Display,
        constraint: impl Into<String>,
    ) -> Self {
        NoiseError::InvalidDomain {
            parameter: parameter.into(),
            value: value.to_string(),
            constraint: constraint.into(),
        }
    }

    /// Create an invalid shape error
    pub fn invalid_shape(rows: usize, cols: usize) -> Self {
        NoiseError::InvalidShape { rows, cols }
    }

    /// Create an invalid range error
    pub fn invalid_range(parameter: impl Into<String>, value: f64) -> Self {
        NoiseError::InvalidRange {
            parameter: parameter.into(),
            value,
        }
    }

    /// Create a degenerate range error
    pub fn degenerate_range(value: f64) -> Self {
        NoiseError::DegenerateRange { value }
    }

    /// Create an interpolation error
    pub fn interpolation(details: impl Into<String>) -> Self {
        NoiseError::Interpolation {
            details: details.into(),
        }
    }
}
