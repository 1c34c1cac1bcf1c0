// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use cyclic_code::{
    build_generator_matrix, build_parity_check_matrix, verify_parity_matrix, BitMatrix,
    CodeParams, CyclicCode,
};
use cyclic_polynomial::Gf2Polynomial;
use proptest::prelude::*;

/// All generators of proper cyclic codes of length n: divisors of x^n - 1 with
/// constant term 1 and degree between 1 and n - 1.
fn divisors_of_x_n_minus_one(n: usize) -> Vec<Gf2Polynomial> {
    let modulus = Gf2Polynomial::x_pow_n_minus_one(n);
    let mut divisors = Vec::new();

    for degree in 1..n {
        // Leading and constant coefficients fixed to 1, middle bits enumerated.
        let middle = degree.saturating_sub(1);
        for pattern in 0u32..(1 << middle) {
            let mut bits = vec![true];
            bits.extend((0..middle).rev().map(|i| pattern >> i & 1 == 1));
            bits.push(true);
            let candidate = Gf2Polynomial::from_bits(bits);
            if candidate.divides(&modulus) {
                divisors.push(candidate);
            }
        }
    }

    divisors
}

fn arb_code() -> impl Strategy<Value = CyclicCode> {
    (2usize..=12).prop_flat_map(|n| {
        let divisors = divisors_of_x_n_minus_one(n);
        (0..divisors.len()).prop_map(move |i| {
            let g = &divisors[i];
            let params = CodeParams::from_polynomial(n, n - g.degree(), g).unwrap();
            CyclicCode::new(params)
        })
    })
}

fn arb_code_with_messages() -> impl Strategy<Value = (CyclicCode, Vec<bool>, Vec<bool>)> {
    arb_code().prop_flat_map(|code| {
        let k = code.k();
        (
            Just(code),
            prop::collection::vec(any::<bool>(), k),
            prop::collection::vec(any::<bool>(), k),
        )
    })
}

fn xor(a: &[bool], b: &[bool]) -> Vec<bool> {
    a.iter().zip(b).map(|(x, y)| x ^ y).collect()
}

#[test]
fn test_every_length_has_divisors() {
    for n in 2..=12 {
        // x + 1 always divides x^n - 1
        assert!(!divisors_of_x_n_minus_one(n).is_empty(), "n = {}", n);
    }
    assert_eq!(divisors_of_x_n_minus_one(7).len(), 6);
}

proptest! {
    #[test]
    fn generator_starts_with_identity(code in arb_code()) {
        let k = code.k();
        prop_assert_eq!(code.generator_matrix().columns(0..k), BitMatrix::identity(k));
    }

    #[test]
    fn parity_check_ends_with_identity(code in arb_code()) {
        let (n, k) = (code.n(), code.k());
        let h = code.parity_check_matrix();
        prop_assert_eq!(h.rows(), n - k);
        prop_assert_eq!(h.cols(), n);
        prop_assert_eq!(h.columns(k..n), BitMatrix::identity(n - k));
    }

    #[test]
    fn generator_orthogonal_to_parity_check(code in arb_code()) {
        let product = code.generator_matrix().mul_transpose(code.parity_check_matrix()).unwrap();
        prop_assert!(product.is_zero());
        prop_assert!(verify_parity_matrix(code.generator_matrix(), code.parity_check_matrix()).is_ok());
    }

    #[test]
    fn parity_polynomial_is_exact_cofactor(code in arb_code()) {
        let modulus = Gf2Polynomial::x_pow_n_minus_one(code.n());
        let g = code.generator_polynomial();
        let h = code.parity_polynomial();

        let (quotient, remainder) = modulus.div_rem(g).unwrap();
        prop_assert!(remainder.is_zero());
        prop_assert_eq!(&quotient, h);
        prop_assert_eq!(h.degree(), code.k());

        let (cofactor, remainder) = modulus.div_rem(h).unwrap();
        prop_assert!(remainder.is_zero());
        prop_assert_eq!(&cofactor, g);
    }

    #[test]
    fn rebuilding_is_bit_identical(code in arb_code()) {
        let params = code.params().clone();
        let g = build_generator_matrix(&params);
        let h = build_parity_check_matrix(params.n(), params.k(), &g).unwrap();
        prop_assert_eq!(&g, code.generator_matrix());
        prop_assert_eq!(&h, code.parity_check_matrix());
        prop_assert_eq!(CyclicCode::new(params), code);
    }

    #[test]
    fn encoding_is_linear((code, d1, d2) in arb_code_with_messages()) {
        let c1 = code.encode(&d1).unwrap();
        let c2 = code.encode(&d2).unwrap();
        let c_sum = code.encode(&xor(&d1, &d2)).unwrap();
        prop_assert_eq!(c_sum, xor(&c1, &c2));
    }

    #[test]
    fn encoding_is_systematic_codeword((code, d, _) in arb_code_with_messages()) {
        let c = code.encode(&d).unwrap();
        prop_assert_eq!(c.len(), code.n());
        prop_assert_eq!(&c[..code.k()], d.as_slice());
        prop_assert!(code.is_codeword(&c));
    }

    #[test]
    fn codewords_are_closed_under_cyclic_shift((code, d, _) in arb_code_with_messages()) {
        let mut c = code.encode(&d).unwrap();
        c.rotate_right(1);
        prop_assert!(code.is_codeword(&c));
    }
}
