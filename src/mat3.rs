//! Row-major 3x3 matrix for 2D affine transforms in homogeneous coordinates.
//!
//! Storage is a flat array with linear index `col + row * 3`. The top-left
//! 2x2 block carries rotation and scale, the last column carries translation,
//! and the bottom row stays `[0, 0, 1]` for every constructor here, so
//! applying a matrix to a `z = 1` point never needs a perspective divide.
//!
//! Constructors return fully initialized values; there is no partially
//! configured state to reuse by accident.

use std::ops::Mul;

use crate::error::{Error, Result};
use crate::vec::Vec3;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Mat3 {
    cells: [f64; 9],
}

impl Mat3 {
    /// The multiplicative identity.
    pub const fn identity() -> Self {
        Self {
            cells: [
                1.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, //
                0.0, 0.0, 1.0,
            ],
        }
    }

    /// Translation by `(dx, dy)`; the offsets live in the last column.
    pub const fn translation(dx: f64, dy: f64) -> Self {
        Self {
            cells: [
                1.0, 0.0, dx, //
                0.0, 1.0, dy, //
                0.0, 0.0, 1.0,
            ],
        }
    }

    /// Counter-clockwise rotation by `radians` in the top-left 2x2 block.
    pub fn rotation(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self {
            cells: [
                cos, -sin, 0.0, //
                sin, cos, 0.0, //
                0.0, 0.0, 1.0,
            ],
        }
    }

    /// Diagonal scale by `(sx, sy)` with `1` in the homogeneous corner.
    pub const fn scaling(sx: f64, sy: f64) -> Self {
        Self {
            cells: [
                sx, 0.0, 0.0, //
                0.0, sy, 0.0, //
                0.0, 0.0, 1.0,
            ],
        }
    }

    pub const fn from_row_major(cells: [f64; 9]) -> Self {
        Self { cells }
    }

    /// Builds a matrix from the first nine elements of `values`, row-major.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        if values.len() < 9 {
            return Err(Error::ShortSequence {
                expected: 9,
                got: values.len(),
            });
        }
        let mut cells = [0.0; 9];
        cells.copy_from_slice(&values[..9]);
        Ok(Self { cells })
    }

    /// Cell at `(row, col)`, both zero-based.
    pub const fn at(&self, row: usize, col: usize) -> f64 {
        self.cells[col + row * 3]
    }

    pub const fn as_row_major(&self) -> &[f64; 9] {
        &self.cells
    }

    fn row(&self, row: usize) -> Vec3 {
        Vec3::new(
            self.cells[row * 3],
            self.cells[row * 3 + 1],
            self.cells[row * 3 + 2],
        )
    }

    /// Cell-wise comparison within `tolerance`.
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

impl Mul for Mat3 {
    type Output = Mat3;

    /// Standard row-by-column product; operands are unmodified.
    fn mul(self, rhs: Mat3) -> Mat3 {
        let mut cells = [0.0; 9];
        for row in 0..3 {
            for col in 0..3 {
                cells[col + row * 3] = self.cells[row * 3] * rhs.cells[col]
                    + self.cells[1 + row * 3] * rhs.cells[col + 3]
                    + self.cells[2 + row * 3] * rhs.cells[col + 6];
            }
        }
        Mat3 { cells }
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    /// Applies the transform to a homogeneous 3-vector: each result
    /// component is the dot of a matrix row with the vector.
    fn mul(self, vec: Vec3) -> Vec3 {
        Vec3::new(
            self.row(0).dot(vec),
            self.row(1).dot(vec),
            self.row(2).dot(vec),
        )
    }
}
