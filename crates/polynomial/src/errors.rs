// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for polynomial operations.

use thiserror::Error;

/// Errors that can occur during polynomial operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolynomialError {
    /// Division by the zero polynomial
    #[error("Division by zero polynomial")]
    DivisionByZero,

    /// Text that cannot be read as a polynomial in a single indeterminate
    #[error("Invalid polynomial format: {message}")]
    InvalidFormat { message: String },

    /// A coefficient outside {0, 1}
    #[error("Coefficient {value} at position {index} is not in GF(2)")]
    NonBinaryCoefficient { index: usize, value: i64 },
}

impl PolynomialError {
    /// Create an invalid format error with a message
    pub fn invalid_format(message: impl Into<String>) -> Self {
        PolynomialError::InvalidFormat {
            message: message.into(),
        }
    }
}

/// Result type alias for polynomial operations
pub type PolynomialResult<T> = Result<T, PolynomialError>;
