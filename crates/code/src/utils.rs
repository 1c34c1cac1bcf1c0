// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::errors::{CodeError, CodeResult};
use crate::matrix_type::MatrixLike;
use std::fmt::Write;

/// Renders a matrix with a `name (rows x cols):` header and one `[1 0 1]` line per row.
pub fn format_matrix(name: &str, matrix: &dyn MatrixLike) -> String {
    let mut out = format!("{} ({}x{}):\n", name, matrix.rows(), matrix.cols());

    for row in matrix.data() {
        let cells: Vec<&str> = row.iter().map(|&b| if b { "1" } else { "0" }).collect();
        let _ = writeln!(out, "  [{}]", cells.join(" "));
    }

    out
}

pub fn print_matrix(name: &str, matrix: &dyn MatrixLike) {
    println!("{}", format_matrix(name, matrix));
}

/// Renders bits as a string of `0` and `1`.
pub fn bits_to_string(bits: &[bool]) -> String {
    bits.iter().map(|&b| if b { '1' } else { '0' }).collect()
}

/// Reads a bit vector from `1011`, `1 0 1 1` or `1,0,1,1`.
pub fn parse_bits(text: &str) -> CodeResult<Vec<bool>> {
    let bits: CodeResult<Vec<bool>> = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            _ => Err(CodeError::InvalidFormat {
                message: format!("'{c}' is not a bit"),
            }),
        })
        .collect();

    let bits = bits?;
    if bits.is_empty() {
        return Err(CodeError::InvalidFormat {
            message: "no bits given".to_string(),
        });
    }
    Ok(bits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BitMatrix;

    #[test]
    fn test_format_matrix() {
        let m = BitMatrix::new(vec![vec![true, false, true], vec![false, true, true]]).unwrap();
        assert_eq!(
            format_matrix("G", &m),
            "G (2x3):\n  [1 0 1]\n  [0 1 1]\n"
        );
    }

    #[test]
    fn test_bits_round_trip_forms() {
        let expected = vec![true, false, true, true];
        assert_eq!(parse_bits("1011").unwrap(), expected);
        assert_eq!(parse_bits("1 0 1 1").unwrap(), expected);
        assert_eq!(parse_bits("1,0,1,1").unwrap(), expected);
        assert_eq!(bits_to_string(&expected), "1011");
    }

    #[test]
    fn test_parse_bits_rejects() {
        assert!(parse_bits("10a1").is_err());
        assert!(parse_bits("102").is_err());
        assert!(parse_bits("  ").is_err());
    }
}
