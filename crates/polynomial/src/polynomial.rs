// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Polynomial arithmetic over GF(2).

use crate::errors::{PolynomialError, PolynomialResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A polynomial over GF(2) represented by its coefficients in descending order of degree.
///
/// The polynomial is represented as:
/// `a_n * x^n + a_{n-1} * x^{n-1} + ... + a_1 * x + a_0`
/// with every `a_i` in `{0, 1}` stored as a `bool`.
///
/// The representation is always normalized: the leading coefficient is 1, except for the
/// zero polynomial which is stored as the single coefficient `[0]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<bool>", into = "Vec<bool>"))]
pub struct Gf2Polynomial {
    /// Coefficients in descending order (highest degree first).
    pub(crate) bits: Vec<bool>,
}

impl fmt::Display for Gf2Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (i, bit) in self.bits.iter().enumerate() {
            if !bit {
                continue;
            }
            let degree = self.bits.len() - 1 - i;

            if !first {
                write!(f, " + ")?;
            }
            first = false;

            match degree {
                0 => write!(f, "1")?,
                1 => write!(f, "x")?,
                _ => write!(f, "x^{degree}")?,
            }
        }

        if first {
            write!(f, "0")?;
        }

        Ok(())
    }
}

impl Gf2Polynomial {
    /// Creates a polynomial from bits in descending order, stripping leading zeros.
    pub fn from_bits(bits: Vec<bool>) -> Self {
        let bits = strip_leading_zeros(&bits);
        if bits.is_empty() {
            return Self::zero();
        }
        Self { bits }
    }

    /// Creates a polynomial from `0`/`1` coefficients in descending order.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::NonBinaryCoefficient`] for the first coefficient
    /// that is neither 0 nor 1.
    pub fn from_coefficients(coefficients: &[i64]) -> PolynomialResult<Self> {
        let bits = coefficients_to_bits(coefficients)?;
        Ok(Self::from_bits(bits))
    }

    /// Creates a polynomial from bits in ascending order (constant term first).
    pub fn from_ascending_bits(ascending: Vec<bool>) -> Self {
        let mut bits = ascending;
        bits.reverse();
        Self::from_bits(bits)
    }

    /// The zero polynomial.
    pub fn zero() -> Self {
        Self { bits: vec![false] }
    }

    /// The constant polynomial 1.
    pub fn one() -> Self {
        Self { bits: vec![true] }
    }

    /// Builds `x^n - 1`, which over GF(2) is `x^n + 1`.
    ///
    /// For `n = 0` this is the zero polynomial.
    pub fn x_pow_n_minus_one(n: usize) -> Self {
        if n == 0 {
            return Self::zero();
        }
        let mut bits = vec![false; n + 1];
        bits[0] = true;
        bits[n] = true;
        Self { bits }
    }

    /// Returns the coefficients in descending order.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Returns the coefficients in ascending order (constant term first).
    pub fn to_ascending_bits(&self) -> Vec<bool> {
        let mut bits = self.bits.clone();
        bits.reverse();
        bits
    }

    /// Returns the coefficients as `0`/`1` bytes in descending order.
    pub fn to_u8_coefficients(&self) -> Vec<u8> {
        self.bits.iter().map(|&b| b as u8).collect()
    }

    /// Number of stored coefficients (`degree + 1`).
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Always false: even the zero polynomial keeps one coefficient.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Returns the degree of the polynomial.
    ///
    /// The degree of the zero polynomial is 0.
    pub fn degree(&self) -> usize {
        self.bits.len() - 1
    }

    /// Checks if the polynomial is zero.
    pub fn is_zero(&self) -> bool {
        self.bits.iter().all(|b| !b)
    }

    /// Returns the leading coefficient.
    pub fn leading_coefficient(&self) -> bool {
        self.bits[0]
    }

    /// Returns the constant term.
    pub fn constant_term(&self) -> bool {
        self.bits[self.bits.len() - 1]
    }

    /// Renders the coefficients as a bit string, e.g. `1011` for `x^3 + x + 1`.
    pub fn to_bit_string(&self) -> String {
        self.bits.iter().map(|&b| if b { '1' } else { '0' }).collect()
    }

    /// Adds two polynomials (coefficient-wise XOR).
    pub fn add(&self, other: &Self) -> Self {
        let max_length = std::cmp::max(self.bits.len(), other.bits.len());
        let mut result = vec![false; max_length];

        for (i, bit) in self.bits.iter().enumerate() {
            result[max_length - self.bits.len() + i] ^= bit;
        }
        for (i, bit) in other.bits.iter().enumerate() {
            result[max_length - other.bits.len() + i] ^= bit;
        }

        Self::from_bits(result)
    }

    /// Multiplies two polynomials (carry-less product).
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let mut result = vec![false; self.bits.len() + other.bits.len() - 1];
        for (i, &a) in self.bits.iter().enumerate() {
            if !a {
                continue;
            }
            for (j, &b) in other.bits.iter().enumerate() {
                result[i + j] ^= b;
            }
        }

        Self::from_bits(result)
    }

    /// Divides `self` by `divisor`, returning `(quotient, remainder)`.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::DivisionByZero`] if `divisor` is the zero polynomial.
    pub fn div_rem(&self, divisor: &Self) -> PolynomialResult<(Self, Self)> {
        if divisor.is_zero() {
            return Err(PolynomialError::DivisionByZero);
        }

        let (quotient, remainder) = divide_mod_2(&self.bits, &divisor.bits);
        Ok((Self::from_bits(quotient), Self::from_bits(remainder)))
    }

    /// Returns true if `self` divides `other` with zero remainder.
    pub fn divides(&self, other: &Self) -> bool {
        match other.div_rem(self) {
            Ok((_, remainder)) => remainder.is_zero(),
            Err(_) => false,
        }
    }
}

/// Binary polynomial long division, leading coefficient first.
///
/// Returns `(quotient, remainder)`. The remainder has its leading zeros stripped, so an
/// empty remainder means `divisor` divides `dividend` exactly. The leading coefficient of
/// `divisor` is treated as 1 whatever its stored value.
///
/// `divisor` must be non-empty; callers reject empty divisors before reaching this point.
pub fn divide_mod_2(dividend: &[bool], divisor: &[bool]) -> (Vec<bool>, Vec<bool>) {
    let mut work = dividend.to_vec();
    let mut quotient = Vec::with_capacity(dividend.len().saturating_sub(divisor.len()) + 1);
    let mut cursor = 0;

    while cursor < work.len() && work.len() - cursor >= divisor.len() {
        if work[cursor] {
            for (offset, &bit) in divisor.iter().enumerate().skip(1) {
                work[cursor + offset] ^= bit;
            }
            quotient.push(true);
        } else {
            quotient.push(false);
        }
        cursor += 1;
    }

    let remainder = strip_leading_zeros(&work[cursor..]);
    (quotient, remainder)
}

/// Converts `0`/`1` integer coefficients into bits.
///
/// # Errors
///
/// Returns [`PolynomialError::NonBinaryCoefficient`] for the first other value.
pub fn coefficients_to_bits(coefficients: &[i64]) -> PolynomialResult<Vec<bool>> {
    coefficients
        .iter()
        .enumerate()
        .map(|(index, &value)| match value {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(PolynomialError::NonBinaryCoefficient { index, value }),
        })
        .collect()
}

/// Normalizes like [`Gf2Polynomial::from_bits`] but refuses an empty coefficient list.
impl TryFrom<Vec<bool>> for Gf2Polynomial {
    type Error = PolynomialError;

    fn try_from(bits: Vec<bool>) -> PolynomialResult<Self> {
        if bits.is_empty() {
            return Err(PolynomialError::invalid_format("no coefficients"));
        }
        Ok(Self::from_bits(bits))
    }
}

impl From<Gf2Polynomial> for Vec<bool> {
    fn from(polynomial: Gf2Polynomial) -> Self {
        polynomial.bits
    }
}

fn strip_leading_zeros(bits: &[bool]) -> Vec<bool> {
    match bits.iter().position(|&b| b) {
        Some(first) => bits[first..].to_vec(),
        None => Vec::new(),
    }
}
