// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::errors::{CodeError, CodeResult};
use crate::matrix_type::BitMatrix;

/// Encode a message d of length k as the codeword c = d · G (mod 2) of length n.
///
/// `c_j` is the XOR over i of `d_i AND G[i][j]`.
pub fn encode(message: &[bool], generator: &BitMatrix) -> CodeResult<Vec<bool>> {
    if message.len() != generator.rows() {
        return Err(CodeError::MessageLength {
            expected: generator.rows(),
            actual: message.len(),
        });
    }

    let mut codeword = vec![false; generator.cols()];
    for (row, _) in generator
        .data()
        .iter()
        .zip(message)
        .filter(|(_, bit)| **bit)
    {
        for (c, &g) in codeword.iter_mut().zip(row) {
            *c ^= g;
        }
    }

    Ok(codeword)
}

/// [`encode`] over `0`/`1` bytes, as produced by [`BitMatrix::to_u8_rows`].
pub fn encode_bits(message: &[u8], generator: &BitMatrix) -> CodeResult<Vec<u8>> {
    let message = message
        .iter()
        .map(|&b| match b {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(CodeError::InvalidFormat {
                message: format!("message bit {b} is not 0 or 1"),
            }),
        })
        .collect::<CodeResult<Vec<bool>>>()?;

    Ok(encode(&message, generator)?
        .into_iter()
        .map(u8::from)
        .collect())
}
