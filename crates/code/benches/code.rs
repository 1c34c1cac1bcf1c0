// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cyclic_code::{CodeParams, CyclicCode};

// (n, k, g) for a few well known codes
const CODES: &[(usize, usize, &str)] = &[
    (7, 4, "x^3 + x + 1"),
    (15, 11, "x^4 + x + 1"),
    (23, 12, "x^11 + x^10 + x^6 + x^5 + x^4 + x^2 + 1"),
    (63, 57, "x^6 + x + 1"),
    (127, 120, "x^7 + x^3 + 1"),
];

fn benchmark_code_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("code_construction");

    for &(n, k, g) in CODES {
        let params = CodeParams::parse(n, k, g).unwrap();

        group.bench_function(&format!("n_{}_k_{}", n, k), |b| {
            b.iter(|| black_box(CyclicCode::new(params.clone())))
        });
    }

    group.finish();
}

fn benchmark_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation");

    for &(n, k, g) in CODES {
        group.bench_function(&format!("n_{}_k_{}", n, k), |b| {
            b.iter(|| black_box(CodeParams::parse(n, k, g).unwrap()))
        });
    }

    group.finish();
}

fn benchmark_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoding");

    for &(n, k, g) in CODES {
        let code = CyclicCode::parse(n, k, g).unwrap();
        let message: Vec<bool> = (0..k).map(|i| i % 3 == 0).collect();

        group.bench_function(&format!("n_{}_k_{}", n, k), |b| {
            b.iter(|| black_box(code.encode(&message).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_code_construction,
    benchmark_validation,
    benchmark_encoding
);
criterion_main!(benches);
