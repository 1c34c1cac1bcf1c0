// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # GF(2) Polynomial Library
//!
//! Polynomials with coefficients in the two-element field {0, 1}, where addition is XOR
//! and multiplication is AND.
//!
//! ## Features
//!
//! - Normalized bit representation, highest degree first.
//! - Long division with remainder, used to test whether a generator polynomial divides
//!   `x^n - 1` and to obtain the cofactor.
//! - Parsing from expressions (`x^3 + x + 1`) and coefficient lists (`1 0 1 1`).
//! - Serialization: optional serde support.

pub mod errors;
pub mod parse;
pub mod polynomial;

pub use errors::{PolynomialError, PolynomialResult};
pub use parse::{parse_coefficients, MAX_DEGREE};
pub use polynomial::{coefficients_to_bits, divide_mod_2, Gf2Polynomial};
