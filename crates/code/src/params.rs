// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Validated code parameters `(n, k, g)`.

use crate::errors::{CodeError, CodeResult};
use cyclic_polynomial::{coefficients_to_bits, divide_mod_2, parse_coefficients, Gf2Polynomial};
use serde::Serialize;
use tracing::debug;

/// Longest codeword accepted. G alone holds up to `n^2 / 4` entries.
pub const MAX_LENGTH: usize = 1 << 12;

/// Checks `1 ≤ n ≤ MAX_LENGTH` and `0 < k < n`.
///
/// `n = 1` is rejected on its own: no `k` satisfies `0 < k < 1`.
pub fn validate_range(n: usize, k: usize) -> CodeResult<()> {
    if n < 1 {
        return Err(CodeError::out_of_range("n", n, "must be at least 1"));
    }
    if n > MAX_LENGTH {
        return Err(CodeError::out_of_range(
            "n",
            n,
            format!("must be at most {MAX_LENGTH}"),
        ));
    }
    if n == 1 {
        return Err(CodeError::out_of_range(
            "k",
            k,
            "no message length satisfies 0 < k < n when n = 1",
        ));
    }
    if k < 1 {
        return Err(CodeError::out_of_range("k", k, "must be at least 1"));
    }
    if k >= n {
        return Err(CodeError::out_of_range(
            "k",
            k,
            format!("must be at most n - 1 = {}", n - 1),
        ));
    }
    Ok(())
}

/// Parameters of a binary cyclic code.
///
/// Only constructible through validation, so every `CodeParams` satisfies:
/// `0 < k < n`, `g` has degree `n - k` with constant term 1, and `g` divides `x^n - 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeParams {
    n: usize,
    k: usize,
    generator: Gf2Polynomial,
}

impl CodeParams {
    /// Validates integer coefficients (highest degree first) as the generator of an
    /// `(n, k)` cyclic code.
    ///
    /// Checks run in order and the first failure is returned: range of `n` and `k`,
    /// coefficient count, binary coefficients, constant term, divisibility of `x^n - 1`.
    ///
    /// The leading coefficient does not take part in the checks; the generator is
    /// stored with degree exactly `n - k`.
    pub fn new(n: usize, k: usize, coefficients: &[i64]) -> CodeResult<Self> {
        validate_range(n, k)?;

        let expected = n - k + 1;
        if coefficients.len() != expected {
            return Err(CodeError::WrongDegree {
                expected,
                actual: coefficients.len(),
            });
        }

        let mut bits = coefficients_to_bits(coefficients)?;

        if !bits[bits.len() - 1] {
            return Err(CodeError::MissingConstantTerm);
        }

        let modulus = Gf2Polynomial::x_pow_n_minus_one(n);
        let (_, remainder) = divide_mod_2(modulus.bits(), &bits);
        if !remainder.is_empty() {
            return Err(CodeError::NotADivisor {
                generator: Gf2Polynomial::from_bits(bits).to_string(),
                n,
                remainder: Gf2Polynomial::from_bits(remainder).to_string(),
            });
        }

        if !bits[0] {
            debug!(n, k, "generator leading coefficient given as 0, taking degree n - k");
            bits[0] = true;
        }

        Ok(Self {
            n,
            k,
            generator: Gf2Polynomial::from_bits(bits),
        })
    }

    /// Parses `text` as the generator and validates it.
    ///
    /// Unreadable text and text with more than one indeterminate fail with
    /// [`CodeError::InvalidFormat`] before any of the checks of [`CodeParams::new`]
    /// that concern the polynomial.
    pub fn parse(n: usize, k: usize, text: &str) -> CodeResult<Self> {
        validate_range(n, k)?;
        let coefficients = parse_coefficients(text)?;
        Self::new(n, k, &coefficients)
    }

    /// Validates an already typed polynomial as the generator.
    pub fn from_polynomial(n: usize, k: usize, generator: &Gf2Polynomial) -> CodeResult<Self> {
        let coefficients: Vec<i64> = generator.bits().iter().map(|&b| b as i64).collect();
        Self::new(n, k, &coefficients)
    }

    /// Codeword length.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Message length.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of parity bits, `n - k`.
    pub fn redundancy(&self) -> usize {
        self.n - self.k
    }

    /// The generator polynomial `g(x)`.
    pub fn generator(&self) -> &Gf2Polynomial {
        &self.generator
    }
}
