//! Error types for matrix construction and input validation

use alloc::string::String;

/// Errors that can occur while building a matrix or validating user input
///
/// Every variant is recoverable: the interactive reader reports it and
/// asks for the input again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// A token is not a valid value of the requested type
    ParseFailure {
        /// The offending token
        token: String,
        /// Parser message for the token
        reason: String,
    },
    /// A token is numeric but does not fit the requested type
    NumericOverflow {
        /// The offending token
        token: String,
    },
    /// A row count or matrix size is zero or negative
    NonPositiveSize {
        /// The value that was entered
        value: i64,
    },
    /// A sequence has a different length than required
    LengthMismatch {
        /// Number of values entered
        actual: usize,
        /// Number of values required
        expected: usize,
    },
    /// A row's length differs from the matrix width
    InvalidShape {
        /// Index of the ragged row
        row: usize,
        /// Length of the ragged row
        len: usize,
        /// Length every row must have
        expected: usize,
    },
}

impl MatrixError {
    /// Build a `ParseFailure` from a token and any displayable reason
    pub fn parse_failure(token: &str, reason: impl core::fmt::Display) -> Self {
        use alloc::string::ToString;

        MatrixError::ParseFailure {
            token: token.into(),
            reason: reason.to_string(),
        }
    }
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::ParseFailure { token, reason } => {
                write!(f, "can't parse '{token}': {reason}")
            }
            MatrixError::NumericOverflow { token } => {
                write!(f, "'{token}' is out of range for the element type")
            }
            MatrixError::NonPositiveSize { value } => {
                write!(f, "size must be positive, got {value}")
            }
            MatrixError::LengthMismatch { actual, expected } => {
                write!(f, "unexpected input array size: {actual}, expected {expected}")
            }
            MatrixError::InvalidShape { row, len, expected } => {
                write!(f, "row {row} has {len} elements, expected {expected}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatrixError {}

/// Result type for matrix operations
pub type Result<T> = core::result::Result<T, MatrixError>;
