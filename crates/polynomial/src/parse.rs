// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Reading polynomials from text.
//!
//! Two notations are accepted:
//!
//! - an expression in a single indeterminate: `x^3 + x + 1`, `x3+x+1`, `2*x^2 - 1`
//! - a coefficient list, highest degree first: `1 0 1 1`, `1,0,1,1`, `[1, 0, 1, 1]`, `1011`
//!
//! Parsing returns raw integer coefficients so that callers can report non-binary
//! coefficients as a separate condition from malformed text.

use crate::errors::{PolynomialError, PolynomialResult};
use tracing::trace;

/// Largest exponent accepted in expression form.
pub const MAX_DEGREE: usize = 1 << 16;

/// Parses `text` into integer coefficients in descending order of degree.
///
/// In expression form, repeated terms of the same degree are summed (`x + x` has the
/// coefficient 2) and the returned length is `max_degree + 1`.
///
/// # Errors
///
/// Returns [`PolynomialError::InvalidFormat`] when the text names more than one
/// indeterminate, cannot be read as a polynomial at all, has an exponent above
/// [`MAX_DEGREE`] or a coefficient that does not fit in an `i64`.
pub fn parse_coefficients(text: &str) -> PolynomialResult<Vec<i64>> {
    let trimmed = strip_brackets(text.trim());
    if trimmed.is_empty() {
        return Err(PolynomialError::invalid_format("empty input"));
    }

    let mut indeterminates: Vec<char> = trimmed
        .chars()
        .filter(|c| c.is_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    indeterminates.sort_unstable();
    indeterminates.dedup();

    let coefficients = match indeterminates.as_slice() {
        [] => parse_list(trimmed)?,
        [var] => parse_expression(trimmed, *var)?,
        _ => {
            return Err(PolynomialError::invalid_format(format!(
                "expected a single indeterminate, found {}",
                indeterminates.iter().collect::<String>()
            )))
        }
    };

    trace!(input = text, ?coefficients, "parsed polynomial");
    Ok(coefficients)
}

fn strip_brackets(text: &str) -> &str {
    let stripped = text
        .strip_prefix('[')
        .and_then(|t| t.strip_suffix(']'))
        .or_else(|| text.strip_prefix('(').and_then(|t| t.strip_suffix(')')));
    stripped.map(str::trim).unwrap_or(text)
}

fn parse_list(text: &str) -> PolynomialResult<Vec<i64>> {
    let separated = text.contains(',') || text.contains(char::is_whitespace);

    if !separated {
        return text
            .chars()
            .map(|c| {
                c.to_digit(10).map(i64::from).ok_or_else(|| {
                    PolynomialError::invalid_format(format!("unexpected character '{c}'"))
                })
            })
            .collect();
    }

    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<i64>().map_err(|_| {
                PolynomialError::invalid_format(format!("'{token}' is not an integer coefficient"))
            })
        })
        .collect()
}

fn parse_expression(text: &str, var: char) -> PolynomialResult<Vec<i64>> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();

    let mut terms: Vec<(usize, i64)> = Vec::new();
    let mut sign = 1i64;
    let mut current = String::new();

    for c in compact.chars() {
        match c {
            '+' | '-' => {
                if current.is_empty() {
                    // A sign may only open the expression.
                    if !terms.is_empty() || sign < 0 || c == '+' {
                        return Err(PolynomialError::invalid_format(format!(
                            "unexpected '{c}' in '{text}'"
                        )));
                    }
                } else {
                    terms.push(parse_term(&current, var, sign)?);
                    current.clear();
                }
                sign = if c == '-' { -1 } else { 1 };
            }
            _ => current.push(c),
        }
    }

    if current.is_empty() {
        return Err(PolynomialError::invalid_format(format!(
            "dangling operator in '{text}'"
        )));
    }
    terms.push(parse_term(&current, var, sign)?);

    // parse_term bounds every degree by MAX_DEGREE
    let max_degree = terms.iter().map(|(degree, _)| *degree).max().unwrap_or(0);
    let mut coefficients = vec![0i64; max_degree + 1];
    for (degree, coefficient) in terms {
        let slot = &mut coefficients[max_degree - degree];
        *slot = slot.checked_add(coefficient).ok_or_else(|| {
            PolynomialError::invalid_format(format!("coefficient of x^{degree} overflows"))
        })?;
    }

    Ok(coefficients)
}

/// Parses a single term such as `x^3`, `2x`, `3*x^2`, `x4` or `1` into `(degree, coefficient)`.
fn parse_term(term: &str, var: char, sign: i64) -> PolynomialResult<(usize, i64)> {
    let invalid = || PolynomialError::invalid_format(format!("cannot read term '{term}'"));
    let signed = |value: i64| value.checked_mul(sign).ok_or_else(invalid);

    let Some(position) = term.find(|c: char| c.to_ascii_lowercase() == var) else {
        let value = term.parse::<i64>().map_err(|_| invalid())?;
        return Ok((0, signed(value)?));
    };

    let (prefix, rest) = term.split_at(position);
    let suffix = &rest[var.len_utf8()..];

    let prefix = prefix.strip_suffix('*').unwrap_or(prefix);
    let coefficient = if prefix.is_empty() {
        1
    } else {
        prefix.parse::<i64>().map_err(|_| invalid())?
    };

    let exponent = suffix.strip_prefix('^').unwrap_or(suffix);
    let degree = if suffix.is_empty() {
        1
    } else if exponent.chars().all(|c| c.is_ascii_digit()) && !exponent.is_empty() {
        exponent.parse::<usize>().map_err(|_| invalid())?
    } else {
        return Err(invalid());
    };
    if degree > MAX_DEGREE {
        return Err(PolynomialError::invalid_format(format!(
            "degree {degree} of term '{term}' exceeds {MAX_DEGREE}"
        )));
    }

    Ok((degree, signed(coefficient)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_invalid_format(result: PolynomialResult<Vec<i64>>) -> bool {
        matches!(result, Err(PolynomialError::InvalidFormat { .. }))
    }

    #[test]
    fn test_expression() {
        assert_eq!(parse_coefficients("x^3 + x + 1").unwrap(), vec![1, 0, 1, 1]);
        assert_eq!(parse_coefficients("x3+x+1").unwrap(), vec![1, 0, 1, 1]);
        assert_eq!(parse_coefficients("X^3 + 1").unwrap(), vec![1, 0, 0, 1]);
        assert_eq!(parse_coefficients("1 + x + x^3").unwrap(), vec![1, 0, 1, 1]);
        assert_eq!(parse_coefficients("x").unwrap(), vec![1, 0]);
    }

    #[test]
    fn test_expression_coefficients() {
        assert_eq!(parse_coefficients("2x^2 + 1").unwrap(), vec![2, 0, 1]);
        assert_eq!(parse_coefficients("3*x + 1").unwrap(), vec![3, 1]);
        assert_eq!(parse_coefficients("x + x + 1").unwrap(), vec![2, 1]);
        assert_eq!(parse_coefficients("x^2 - 1").unwrap(), vec![1, 0, -1]);
        assert_eq!(parse_coefficients("0x^3 + x + 1").unwrap(), vec![0, 0, 1, 1]);
    }

    #[test]
    fn test_list() {
        assert_eq!(parse_coefficients("1 0 1 1").unwrap(), vec![1, 0, 1, 1]);
        assert_eq!(parse_coefficients("1,0,1,1").unwrap(), vec![1, 0, 1, 1]);
        assert_eq!(parse_coefficients("[1, 0, 1, 1]").unwrap(), vec![1, 0, 1, 1]);
        assert_eq!(parse_coefficients("1011").unwrap(), vec![1, 0, 1, 1]);
        assert_eq!(parse_coefficients("1 2 1").unwrap(), vec![1, 2, 1]);
    }

    #[test]
    fn test_multiple_indeterminates() {
        assert!(is_invalid_format(parse_coefficients("x^2 + y")));
        assert!(is_invalid_format(parse_coefficients("xy + 1")));
    }

    #[test]
    fn test_huge_exponent() {
        assert!(is_invalid_format(parse_coefficients("x^18446744073709551615 + 1")));
        assert!(is_invalid_format(parse_coefficients("x^18446744073709551616 + 1")));
        assert!(is_invalid_format(parse_coefficients("x^4000000000000 + 1")));
        assert!(is_invalid_format(parse_coefficients("x^65537")));
        assert_eq!(parse_coefficients("x^65536").unwrap().len(), MAX_DEGREE + 1);
    }

    #[test]
    fn test_coefficient_overflow() {
        assert!(is_invalid_format(parse_coefficients("9223372036854775807x + x")));
        assert!(is_invalid_format(parse_coefficients("-9223372036854775807x - 2x")));
        assert_eq!(
            parse_coefficients("9223372036854775807x - x").unwrap(),
            vec![9223372036854775806, 0]
        );
    }

    #[test]
    fn test_garbage() {
        assert!(is_invalid_format(parse_coefficients("")));
        assert!(is_invalid_format(parse_coefficients("   ")));
        assert!(is_invalid_format(parse_coefficients("x^ + 1")));
        assert!(is_invalid_format(parse_coefficients("x^3 ++ 1")));
        assert!(is_invalid_format(parse_coefficients("x^3 +")));
        assert!(is_invalid_format(parse_coefficients("x^3 + 1.5")));
        assert!(is_invalid_format(parse_coefficients("1;0;1")));
        assert!(is_invalid_format(parse_coefficients("x^3x")));
    }
}
