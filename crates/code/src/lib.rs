// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Binary cyclic code construction.
//!
//! Given a codeword length `n`, a message length `k` and a generator polynomial `g(x)`
//! over GF(2) of degree `n - k` dividing `x^n - 1`, this crate builds the systematic
//! generator matrix `G = [I_k | P]`, the parity-check matrix `H = [P^T | I_(n-k)]`
//! and the parity-check polynomial `h(x) = (x^n - 1) / g(x)`, and encodes messages as
//! `c = d · G (mod 2)`.
//!
//! ## Mathematical Background
//!
//! Row `i` of the raw generator matrix is `g(x)` shifted right by `i` positions. Since
//! the constant term of `g` is 1 these rows are in echelon form with ones on the
//! diagonal, and clearing the entries above the diagonal with row XORs yields the
//! identity block. For `G = [I_k | P]` and `H = [P^T | I_(n-k)]`,
//! `G · H^T = P + P = 0 (mod 2)`, so every codeword lies in the null space of `H`.

pub mod code;
pub mod encoder;
pub mod errors;
pub mod matrix;
pub mod matrix_type;
pub mod params;
pub mod utils;

pub use code::CyclicCode;
pub use encoder::{encode, encode_bits};
pub use errors::{CodeError, CodeResult, ValidationKind};
pub use matrix::{
    build_generator_matrix, build_parity_check_matrix, parity_check_polynomial,
    verify_parity_matrix,
};
pub use matrix_type::{BitMatrix, MatrixLike};
pub use params::{validate_range, CodeParams, MAX_LENGTH};
