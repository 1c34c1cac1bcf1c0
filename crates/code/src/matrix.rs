// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::errors::{CodeError, CodeResult};
use crate::matrix_type::BitMatrix;
use crate::params::CodeParams;
use cyclic_polynomial::{divide_mod_2, Gf2Polynomial};
use tracing::{debug, trace};

/// Build the non-systematic generator matrix of size k × n.
/// Row i holds the coefficients of g(x) starting at column i, zero padded:
/// the generator shifted right by i positions.
pub fn raw_generator_matrix(params: &CodeParams) -> BitMatrix {
    let (n, k) = (params.n(), params.k());
    let mut g = BitMatrix::zeros(k, n);

    for i in 0..k {
        for (offset, &bit) in params.generator().bits().iter().enumerate() {
            g.set(i, i + offset, bit);
        }
    }

    g
}

/// Reduce a raw generator matrix to systematic form [I_k | P].
///
/// For each row i and each later row j, row j is XORed into row i when entry (i, j)
/// is 1. Row j is still in raw form at that point, so it has zeros left of column j
/// and a 1 on the diagonal, and the XOR clears column j of row i without touching
/// columns left of j.
pub fn reduce_to_systematic(raw: &BitMatrix) -> BitMatrix {
    let k = raw.rows();
    let mut g = raw.clone();

    for i in 0..k.saturating_sub(1) {
        for j in (i + 1)..k {
            if g.get(i, j) {
                trace!(row = i, with = j, "clearing column");
                g.xor_row_into(i, j);
            }
        }
    }

    g
}

/// Build the systematic generator matrix G = [I_k | P] of size k × n.
pub fn build_generator_matrix(params: &CodeParams) -> BitMatrix {
    let g = reduce_to_systematic(&raw_generator_matrix(params));
    debug!(
        n = params.n(),
        k = params.k(),
        "built systematic generator matrix"
    );
    g
}

/// Build the parity-check matrix H = [P^T | I_(n-k)] of size (n-k) × n from a
/// systematic generator matrix.
///
/// # Errors
///
/// Returns an error if `generator` is not k × n.
pub fn build_parity_check_matrix(
    n: usize,
    k: usize,
    generator: &BitMatrix,
) -> CodeResult<BitMatrix> {
    if generator.rows() != k {
        return Err(CodeError::dimension_mismatch(
            k,
            generator.rows(),
            "generator rows",
        ));
    }
    if generator.cols() != n || k > n {
        return Err(CodeError::dimension_mismatch(
            n,
            generator.cols(),
            "generator columns",
        ));
    }

    Ok(parity_check_from_systematic(generator))
}

pub(crate) fn parity_check_from_systematic(generator: &BitMatrix) -> BitMatrix {
    let (k, n) = (generator.rows(), generator.cols());
    let r = n - k;

    // [0 | I_(n-k)]
    let mut h = BitMatrix::zeros(r, n);
    for i in 0..r {
        h.set(i, k + i, true);
    }

    // First k columns become the transpose of the parity block.
    let parity_t = generator.columns(k..n).transpose();
    for i in 0..r {
        for j in 0..k {
            h.set(i, j, parity_t.get(i, j));
        }
    }

    h
}

/// Compute the parity-check polynomial h(x) = (x^n - 1) / g(x).
pub fn parity_check_polynomial(params: &CodeParams) -> Gf2Polynomial {
    let modulus = Gf2Polynomial::x_pow_n_minus_one(params.n());
    let (quotient, _) = divide_mod_2(modulus.bits(), params.generator().bits());
    Gf2Polynomial::from_bits(quotient)
}

/// Verify that G · H^T = 0 (mod 2)
///
/// # Errors
///
/// Returns [`CodeError::Verification`] naming the first non-zero entry, or a matrix
/// error when the column counts differ.
pub fn verify_parity_matrix(generator: &BitMatrix, h: &BitMatrix) -> CodeResult<()> {
    if h.rows() == 0 || generator.rows() == 0 {
        return Ok(());
    }

    let product = generator.mul_transpose(h)?;

    for (i, row) in product.data().iter().enumerate() {
        if let Some(j) = row.iter().position(|&bit| bit) {
            return Err(CodeError::verification(format!(
                "G · H^T ≠ 0 (mod 2): entry at position ({}, {}) is 1",
                i, j
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: &[&str]) -> BitMatrix {
        BitMatrix::new(
            rows.iter()
                .map(|row| row.chars().map(|c| c == '1').collect())
                .collect(),
        )
        .unwrap()
    }

    fn hamming() -> CodeParams {
        CodeParams::new(7, 4, &[1, 0, 1, 1]).unwrap()
    }

    #[test]
    fn test_raw_generator_is_shifted_g() {
        let raw = raw_generator_matrix(&hamming());
        assert_eq!(
            raw,
            matrix(&["1011000", "0101100", "0010110", "0001011"])
        );
    }

    #[test]
    fn test_systematic_hamming_generator() {
        let g = build_generator_matrix(&hamming());
        assert_eq!(
            g,
            matrix(&["1000101", "0100111", "0010110", "0001011"])
        );
        assert_eq!(g.columns(0..4), BitMatrix::identity(4));
    }

    #[test]
    fn test_hamming_parity_check() {
        let g = build_generator_matrix(&hamming());
        let h = build_parity_check_matrix(7, 4, &g).unwrap();
        assert_eq!(h, matrix(&["1110100", "0111010", "1101001"]));
        assert_eq!(h.columns(4..7), BitMatrix::identity(3));
        assert_eq!(verify_parity_matrix(&g, &h), Ok(()));
    }

    #[test]
    fn test_parity_check_dimension_mismatch() {
        let g = build_generator_matrix(&hamming());
        assert!(matches!(
            build_parity_check_matrix(7, 3, &g),
            Err(CodeError::Matrix { .. })
        ));
        assert!(matches!(
            build_parity_check_matrix(8, 4, &g),
            Err(CodeError::Matrix { .. })
        ));
    }

    #[test]
    fn test_parity_check_polynomial() {
        let h = parity_check_polynomial(&hamming());
        assert_eq!(h.to_string(), "x^4 + x^2 + x + 1");
    }

    #[test]
    fn test_verify_detects_bad_parity_matrix() {
        let g = build_generator_matrix(&hamming());
        let bad = matrix(&["1000000", "0111010", "1101001"]);
        assert!(matches!(
            verify_parity_matrix(&g, &bad),
            Err(CodeError::Verification { .. })
        ));
    }

    #[test]
    fn test_k_equal_one() {
        // x^2 + x + 1 divides x^3 - 1: the (3, 1) repetition code
        let params = CodeParams::new(3, 1, &[1, 1, 1]).unwrap();
        let g = build_generator_matrix(&params);
        assert_eq!(g, matrix(&["111"]));
        let h = build_parity_check_matrix(3, 1, &g).unwrap();
        assert_eq!(h, matrix(&["110", "101"]));
        verify_parity_matrix(&g, &h).unwrap();
    }

    #[test]
    fn test_single_parity_code() {
        // x + 1 divides x^n - 1 for every n
        let params = CodeParams::new(5, 4, &[1, 1]).unwrap();
        let g = build_generator_matrix(&params);
        assert_eq!(g, matrix(&["10001", "01001", "00101", "00011"]));
        let h = build_parity_check_matrix(5, 4, &g).unwrap();
        assert_eq!(h, matrix(&["11111"]));
        assert_eq!(parity_check_polynomial(&params).to_string(), "x^4 + x^3 + x^2 + x + 1");
    }
}
