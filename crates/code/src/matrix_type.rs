// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Binary matrix type with dimension validation.

use crate::errors::{CodeError, CodeResult};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A matrix over GF(2) with runtime-determined dimensions.
///
/// Dimensions are validated at construction and runtime operations check consistency.
///
/// # Example
///
/// ```
/// use cyclic_code::BitMatrix;
///
/// let matrix = BitMatrix::new(vec![vec![true, false], vec![false, true]]).unwrap();
/// assert_eq!(matrix.rows(), 2);
/// assert_eq!(matrix, BitMatrix::identity(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<bool>>", into = "Vec<Vec<bool>>")]
pub struct BitMatrix {
    data: Vec<Vec<bool>>,
    rows: usize,
    cols: usize,
}

impl BitMatrix {
    /// Creates a new matrix from row data, validating dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if rows have inconsistent lengths.
    pub fn new(data: Vec<Vec<bool>>) -> CodeResult<Self> {
        if data.is_empty() {
            return Ok(Self {
                data,
                rows: 0,
                cols: 0,
            });
        }

        let rows = data.len();
        let cols = data[0].len();

        for (i, row) in data.iter().enumerate() {
            if row.len() != cols {
                return Err(CodeError::dimension_mismatch(
                    cols,
                    row.len(),
                    format!("columns in row {}", i),
                ));
            }
        }

        Ok(Self { data, rows, cols })
    }

    /// Creates a zero matrix of the specified dimensions.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![vec![false; cols]; rows],
            rows,
            cols,
        }
    }

    /// Creates the `size × size` identity matrix.
    pub fn identity(size: usize) -> Self {
        let mut matrix = Self::zeros(size, size);
        for (i, row) in matrix.data.iter_mut().enumerate() {
            row[i] = true;
        }
        matrix
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns a reference to the underlying data.
    pub fn data(&self) -> &[Vec<bool>] {
        &self.data
    }

    /// Gets a specific element.
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.data[row][col]
    }

    /// Returns one row.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    pub fn row(&self, row: usize) -> &[bool] {
        &self.data[row]
    }

    /// Returns a copy of one column.
    pub fn column(&self, col: usize) -> Vec<bool> {
        self.data.iter().map(|row| row[col]).collect()
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: bool) {
        self.data[row][col] = value;
    }

    /// XORs row `source` into row `target`.
    pub(crate) fn xor_row_into(&mut self, target: usize, source: usize) {
        let source_row = self.data[source].clone();
        for (cell, bit) in self.data[target].iter_mut().zip(source_row) {
            *cell ^= bit;
        }
    }

    /// Returns the transpose.
    pub fn transpose(&self) -> Self {
        let mut result = Self::zeros(self.cols, self.rows);
        for (i, row) in self.data.iter().enumerate() {
            for (j, &bit) in row.iter().enumerate() {
                result.data[j][i] = bit;
            }
        }
        result
    }

    /// Returns the columns in `range` as a new matrix.
    ///
    /// # Panics
    ///
    /// Panics if `range` exceeds the column count.
    pub fn columns(&self, range: Range<usize>) -> Self {
        let cols = range.len();
        Self {
            data: self.data.iter().map(|row| row[range.clone()].to_vec()).collect(),
            rows: self.rows,
            cols,
        }
    }

    /// Computes `self · other^T (mod 2)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the two matrices have different column counts.
    pub fn mul_transpose(&self, other: &Self) -> CodeResult<Self> {
        if self.cols != other.cols {
            return Err(CodeError::dimension_mismatch(
                self.cols,
                other.cols,
                "columns of A · B^T",
            ));
        }

        let data = self
            .data
            .iter()
            .map(|a| other.data.iter().map(|b| dot(a, b)).collect())
            .collect();

        Ok(Self {
            data,
            rows: self.rows,
            cols: other.rows,
        })
    }

    /// Returns true if every entry is 0.
    pub fn is_zero(&self) -> bool {
        self.data.iter().flatten().all(|&bit| !bit)
    }

    /// Returns the rows as `0`/`1` bytes.
    pub fn to_u8_rows(&self) -> Vec<Vec<u8>> {
        self.data
            .iter()
            .map(|row| row.iter().map(|&bit| bit as u8).collect())
            .collect()
    }
}

/// Inner product over GF(2).
pub(crate) fn dot(a: &[bool], b: &[bool]) -> bool {
    a.iter().zip(b).fold(false, |acc, (&x, &y)| acc ^ (x & y))
}

impl From<BitMatrix> for Vec<Vec<bool>> {
    fn from(matrix: BitMatrix) -> Self {
        matrix.data
    }
}

impl TryFrom<Vec<Vec<bool>>> for BitMatrix {
    type Error = CodeError;

    fn try_from(data: Vec<Vec<bool>>) -> CodeResult<Self> {
        BitMatrix::new(data)
    }
}

/// Trait for matrices that can be rendered by the printing helpers.
pub trait MatrixLike {
    /// Returns the number of rows.
    fn rows(&self) -> usize;

    /// Returns the number of columns.
    fn cols(&self) -> usize;

    /// Returns a reference to the underlying data.
    fn data(&self) -> &[Vec<bool>];
}

impl MatrixLike for BitMatrix {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn data(&self) -> &[Vec<bool>] {
        &self.data
    }
}
