// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for cyclic code construction
//!
//! Validation failures are expected outcomes of user input and are returned by value.
//! [`CodeError::kind`] collapses the variants that describe rejected parameters into a
//! fieldless [`ValidationKind`] so callers can branch on the condition alone.

use cyclic_polynomial::PolynomialError;
use thiserror::Error;

/// Main error type for cyclic code operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    /// Input cannot be read as a polynomial in a single indeterminate
    #[error("Invalid format: {message}")]
    InvalidFormat { message: String },

    /// Coefficient count differs from n - k + 1
    #[error("Generator polynomial has {actual} coefficients, expected n - k + 1 = {expected}")]
    WrongDegree { expected: usize, actual: usize },

    /// A coefficient outside {0, 1}
    #[error("Coefficient {value} at position {index} is not 0 or 1")]
    NonBinaryCoefficient { index: usize, value: i64 },

    /// Constant term of the generator is 0
    #[error("Generator polynomial must have constant term 1")]
    MissingConstantTerm,

    /// Generator does not divide x^n - 1
    #[error("{generator} does not divide x^{n} - 1 (remainder {remainder})")]
    NotADivisor {
        generator: String,
        n: usize,
        remainder: String,
    },

    /// Integer parameter outside its bound
    #[error("Parameter '{name}' = {value} is out of range: {reason}")]
    OutOfRange {
        name: &'static str,
        value: usize,
        reason: String,
    },

    /// Message vector of the wrong length
    #[error("Message has {actual} bits, expected k = {expected}")]
    MessageLength { expected: usize, actual: usize },

    /// Mathematical computation errors
    #[error("Mathematical error: {message}")]
    Math { message: String },

    /// Matrix operation errors
    #[error("Matrix operation error: {message}")]
    Matrix { message: String },

    /// Verification errors
    #[error("Verification failed: {message}")]
    Verification { message: String },
}

/// Result type alias for cyclic code operations
pub type CodeResult<T> = Result<T, CodeError>;

/// The condition a rejected set of code parameters violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationKind {
    InvalidFormat,
    WrongDegree,
    NonBinaryCoefficient,
    MissingConstantTerm,
    NotADivisor,
    OutOfRange,
}

impl CodeError {
    /// Returns the validation condition behind this error, if it is a validation error.
    pub fn kind(&self) -> Option<ValidationKind> {
        match self {
            CodeError::InvalidFormat { .. } => Some(ValidationKind::InvalidFormat),
            CodeError::WrongDegree { .. } => Some(ValidationKind::WrongDegree),
            CodeError::NonBinaryCoefficient { .. } => Some(ValidationKind::NonBinaryCoefficient),
            CodeError::MissingConstantTerm => Some(ValidationKind::MissingConstantTerm),
            CodeError::NotADivisor { .. } => Some(ValidationKind::NotADivisor),
            CodeError::OutOfRange { .. } => Some(ValidationKind::OutOfRange),
            _ => None,
        }
    }

    /// Create an out of range error for a named parameter
    pub fn out_of_range(name: &'static str, value: usize, reason: impl Into<String>) -> Self {
        CodeError::OutOfRange {
            name,
            value,
            reason: reason.into(),
        }
    }

    /// Create a verification error with a message
    pub fn verification(message: impl Into<String>) -> Self {
        CodeError::Verification {
            message: message.into(),
        }
    }

    /// Create a dimension mismatch error
    pub fn dimension_mismatch(expected: usize, actual: usize, context: impl Into<String>) -> Self {
        CodeError::Matrix {
            message: format!(
                "Dimension mismatch in {}: expected {}, got {}",
                context.into(),
                expected,
                actual
            ),
        }
    }
}

impl From<PolynomialError> for CodeError {
    fn from(err: PolynomialError) -> Self {
        match err {
            PolynomialError::InvalidFormat { message } => CodeError::InvalidFormat { message },
            PolynomialError::NonBinaryCoefficient { index, value } => {
                CodeError::NonBinaryCoefficient { index, value }
            }
            PolynomialError::DivisionByZero => CodeError::Math {
                message: PolynomialError::DivisionByZero.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polynomial_error_conversion() {
        let err: CodeError = PolynomialError::invalid_format("x^2 + y").into();
        assert_eq!(err.kind(), Some(ValidationKind::InvalidFormat));

        let err: CodeError = PolynomialError::NonBinaryCoefficient { index: 0, value: 2 }.into();
        assert_eq!(err.kind(), Some(ValidationKind::NonBinaryCoefficient));

        let err: CodeError = PolynomialError::DivisionByZero.into();
        assert_eq!(err.kind(), None);
    }

    #[test]
    fn test_messages_are_descriptive() {
        let err = CodeError::WrongDegree {
            expected: 4,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "Generator polynomial has 3 coefficients, expected n - k + 1 = 4"
        );

        let err = CodeError::out_of_range("k", 0, "must be at least 1");
        assert_eq!(
            err.to_string(),
            "Parameter 'k' = 0 is out of range: must be at least 1"
        );
    }
}
