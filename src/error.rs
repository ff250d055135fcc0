//! Error types for statistical operations

use std::fmt;

/// Main error type for all statistical operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatError {
    /// A dataset was supplied with zero elements
    EmptyInput {
        /// Name of the operation that required data
        operation: &'static str,
    },

    /// A dataset was too small for the requested estimator
    ///
    /// Sample-variant estimators divide by (n - 1) and therefore
    /// need at least two observations
    InsufficientData {
        /// Name of the operation that was requested
        operation: &'static str,
        /// Minimum number of elements the estimator needs
        required: usize,
        /// Number of elements actually supplied
        actual: usize,
    },

    /// Distribution or sampling parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for StatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput { operation } => {
                write!(f, "Cannot compute {operation} of an empty dataset")
            }
            Self::InsufficientData {
                operation,
                required,
                actual,
            } => {
                write!(
                    f,
                    "{operation} requires at least {required} data points (got {actual})"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for StatError {}

/// Convenience type alias for statistical results
pub type Result<T> = std::result::Result<T, StatError>;

/// Create an empty input error
pub const fn empty_input(operation: &'static str) -> StatError {
    StatError::EmptyInput { operation }
}

/// Create an insufficient data error
pub const fn insufficient_data(
    operation: &'static str,
    required: usize,
    actual: usize,
) -> StatError {
    StatError::InsufficientData {
        operation,
        required,
        actual,
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> StatError {
    StatError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
