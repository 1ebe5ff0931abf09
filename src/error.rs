//! Error types for spla

use thiserror::Error;

/// Result type alias using spla's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in spla operations
///
/// Every variant is a contract violation by the caller. Nothing inside the
/// crate recovers from them, and every operation that returns one leaves its
/// receiver untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Operand shapes differ in a binary operation
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Shape of the receiver / left-hand side
        expected: Vec<usize>,
        /// Shape of the offending operand
        got: Vec<usize>,
    },

    /// Index lies outside the shape, or has the wrong number of coordinates
    #[error("Index {index:?} out of range for shape {shape:?}")]
    IndexOutOfRange {
        /// The rejected index
        index: Vec<usize>,
        /// Shape it was checked against
        shape: Vec<usize>,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}

impl Error {
    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: &[usize], got: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }

    /// Create an index out of range error
    pub fn index_out_of_range(index: &[usize], shape: &[usize]) -> Self {
        Self::IndexOutOfRange {
            index: index.to_vec(),
            shape: shape.to_vec(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::shape_mismatch(&[5], &[3]);
        assert_eq!(err.to_string(), "Shape mismatch: expected [5], got [3]");

        let err = Error::index_out_of_range(&[2, 9], &[3, 3]);
        assert_eq!(
            err.to_string(),
            "Index [2, 9] out of range for shape [3, 3]"
        );

        let err = Error::invalid_argument("values", "expected 4 values, got 3");
        assert_eq!(
            err.to_string(),
            "Invalid argument 'values': expected 4 values, got 3"
        );
    }
}
