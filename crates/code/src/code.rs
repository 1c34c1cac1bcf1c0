// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! The derived description of a cyclic code.

use crate::encoder::encode;
use crate::errors::CodeResult;
use crate::matrix::{build_generator_matrix, parity_check_from_systematic, parity_check_polynomial};
use crate::matrix_type::{dot, BitMatrix};
use crate::params::CodeParams;
use cyclic_polynomial::Gf2Polynomial;
use serde::Serialize;
use tracing::info;

/// A binary cyclic code with its generator matrix, parity-check matrix and
/// parity-check polynomial, all computed once from validated parameters.
///
/// The value is immutable and can be shared across threads for concurrent encoding.
///
/// # Example
///
/// ```
/// use cyclic_code::{CodeParams, CyclicCode};
///
/// let code = CyclicCode::new(CodeParams::parse(7, 4, "x^3 + x + 1").unwrap());
/// assert_eq!(code.parity_polynomial().to_string(), "x^4 + x^2 + x + 1");
///
/// let codeword = code.encode(&[true, false, true, true]).unwrap();
/// assert_eq!(&codeword[..4], &[true, false, true, true]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CyclicCode {
    params: CodeParams,
    generator: BitMatrix,
    parity_check: BitMatrix,
    parity_polynomial: Gf2Polynomial,
}

impl CyclicCode {
    pub fn new(params: CodeParams) -> Self {
        let generator = build_generator_matrix(&params);
        let parity_check = parity_check_from_systematic(&generator);
        let parity_polynomial = parity_check_polynomial(&params);

        info!(
            n = params.n(),
            k = params.k(),
            g = %params.generator(),
            h = %parity_polynomial,
            "constructed cyclic code"
        );

        Self {
            params,
            generator,
            parity_check,
            parity_polynomial,
        }
    }

    /// Validates `(n, k, text)` and builds the code.
    pub fn parse(n: usize, k: usize, generator: &str) -> CodeResult<Self> {
        Ok(Self::new(CodeParams::parse(n, k, generator)?))
    }

    pub fn params(&self) -> &CodeParams {
        &self.params
    }

    pub fn n(&self) -> usize {
        self.params.n()
    }

    pub fn k(&self) -> usize {
        self.params.k()
    }

    /// The generator polynomial g(x).
    pub fn generator_polynomial(&self) -> &Gf2Polynomial {
        self.params.generator()
    }

    /// The systematic generator matrix G = [I_k | P].
    pub fn generator_matrix(&self) -> &BitMatrix {
        &self.generator
    }

    /// The parity-check matrix H = [P^T | I_(n-k)].
    pub fn parity_check_matrix(&self) -> &BitMatrix {
        &self.parity_check
    }

    /// The parity-check polynomial h(x) = (x^n - 1) / g(x).
    pub fn parity_polynomial(&self) -> &Gf2Polynomial {
        &self.parity_polynomial
    }

    /// Encodes a k-bit message into an n-bit codeword.
    pub fn encode(&self, message: &[bool]) -> CodeResult<Vec<bool>> {
        encode(message, &self.generator)
    }

    /// Returns true if `word` has length n and satisfies `word · H^T = 0`.
    pub fn is_codeword(&self, word: &[bool]) -> bool {
        word.len() == self.n()
            && self
                .parity_check
                .data()
                .iter()
                .all(|row| !dot(row, word))
    }
}
