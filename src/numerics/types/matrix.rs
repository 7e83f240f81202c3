// src/numerics/types/matrix.rs
// Matrix4x4: fixed 4x4 matrix stored as four Vector4 rows.

use core::ops::{Index, IndexMut, Mul, MulAssign};
#[cfg(feature = "serde")]
use serde::{Serialize, Deserialize};

use crate::numerics::error::MatrixError;
use crate::numerics::types::traits::FloatingPoint;
use crate::numerics::types::vector::Vector4;

const ROWS: usize = 4;

/// A 4x4 matrix stored as four row vectors.
///
/// Element `(i, j)` is `m[i][j]`: row `i`, column `j`. Rows are plain
/// `Vector4` values, so every constructor and setter stores its own copy and
/// no two matrices ever share a row.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix4x4<T: FloatingPoint = f32> {
    pub rows: [Vector4<T>; ROWS],
}

pub type Mat4 = Matrix4x4<f32>;
pub type Mat4d = Matrix4x4<f64>;

impl<T: FloatingPoint> Matrix4x4<T> {
    /// Diagonal matrix with `scale` on every diagonal entry and zero elsewhere.
    ///
    /// `new(0)` is the zero matrix, `new(1)` the identity.
    pub fn new(scale: T) -> Self {
        let mut rows = [Vector4::zero(); ROWS];
        for (i, row) in rows.iter_mut().enumerate() {
            row[i] = scale;
        }
        Self { rows }
    }

    /// Construct from a slice holding exactly four rows, in order.
    ///
    /// # Errors
    /// `MatrixError::InvalidArgument` if `rows.len() != 4`.
    pub fn from_row_array(rows: &[Vector4<T>]) -> Result<Self, MatrixError> {
        let rows: [Vector4<T>; ROWS] = rows.try_into().map_err(|_| {
            tracing::debug!(expected = ROWS, found = rows.len(), "rejected row array");
            MatrixError::InvalidArgument {
                expected: ROWS,
                found: rows.len(),
            }
        })?;
        Ok(Self { rows })
    }

    /// Construct from four rows
    pub fn from_rows(a: Vector4<T>, b: Vector4<T>, c: Vector4<T>, d: Vector4<T>) -> Self {
        Self { rows: [a, b, c, d] }
    }

    /// Inverse of [`Matrix4x4::to_array_row_major`].
    pub fn from_array_row_major(values: &[T; 16]) -> Self {
        let mut m = Self::new(T::zero());
        for (i, row) in m.rows.iter_mut().enumerate() {
            row.set(values[i * 4], values[i * 4 + 1], values[i * 4 + 2], values[i * 4 + 3]);
        }
        m
    }

    /// Inverse of [`Matrix4x4::to_array_col_major`].
    pub fn from_array_col_major(values: &[T; 16]) -> Self {
        let mut m = Self::new(T::zero());
        for j in 0..4 {
            for i in 0..ROWS {
                m.rows[i][j] = values[j * 4 + i];
            }
        }
        m
    }

    /// Zero every element in place.
    pub fn zero(&mut self) -> &mut Self {
        for row in self.rows.iter_mut() {
            row.set_zero();
        }
        self
    }

    /// Overwrite every element with the identity matrix, regardless of the
    /// previous contents.
    pub fn identity(&mut self) -> &mut Self {
        let (zero, one) = (T::zero(), T::one());
        self.rows[0].set(one, zero, zero, zero);
        self.rows[1].set(zero, one, zero, zero);
        self.rows[2].set(zero, zero, one, zero);
        self.rows[3].set(zero, zero, zero, one);
        self
    }

    /// Get a row by index. Panics when `idx > 3`.
    pub fn row(&self, idx: usize) -> Vector4<T> {
        self.rows[idx]
    }

    /// Replace a row wholesale and hand the new row back.
    pub fn set_row(&mut self, idx: usize, row: Vector4<T>) -> Vector4<T> {
        self.rows[idx] = row;
        row
    }

    /// Get a column by index
    pub fn column(&self, idx: usize) -> Vector4<T> {
        Vector4::new(
            self.rows[0][idx],
            self.rows[1][idx],
            self.rows[2][idx],
            self.rows[3][idx],
        )
    }

    pub fn transpose(&mut self) -> &mut Self {
        *self = self.transposed();
        self
    }

    pub fn transposed(&self) -> Self {
        Self::from_rows(self.column(0), self.column(1), self.column(2), self.column(3))
    }

    /// Rows 0..3 concatenated, each in column order: `(i, j)` lands at `i * 4 + j`.
    pub fn to_array_row_major(&self) -> [T; 16] {
        let mut out = [T::zero(); 16];
        for (i, row) in self.rows.iter().enumerate() {
            out[i * 4..i * 4 + 4].copy_from_slice(&row.to_array());
        }
        out
    }

    /// Columns 0..3 concatenated: `(i, j)` lands at `j * 4 + i`.
    ///
    /// This is the layout column-major graphics APIs expect for uniform upload.
    pub fn to_array_col_major(&self) -> [T; 16] {
        let mut out = [T::zero(); 16];
        for j in 0..4 {
            for i in 0..ROWS {
                out[j * 4 + i] = self.rows[i][j];
            }
        }
        out
    }

    /// Matrix times column vector. Neither operand is modified.
    pub fn mult_vec4(&self, b: &Vector4<T>) -> Vector4<T> {
        Vector4::new(
            self.rows[0].dot(b),
            self.rows[1].dot(b),
            self.rows[2].dot(b),
            self.rows[3].dot(b),
        )
    }

    /// Replace `self` with the product `self * b` and return `self`.
    ///
    /// Row `i` of the product is the sum over `k` of `b[k]` scaled by
    /// `self[i][k]`. All four rows are computed from the pre-call values
    /// before any of them is written back. Clone first when the left
    /// operand must survive.
    pub fn mult_mat4(&mut self, b: &Matrix4x4<T>) -> &mut Self {
        let mut product = [Vector4::zero(); ROWS];
        for (out, a) in product.iter_mut().zip(self.rows.iter()) {
            *out = b.rows[0] * a.x + b.rows[1] * a.y + b.rows[2] * a.z + b.rows[3] * a.w;
        }
        self.rows = product;
        self
    }
}

impl<T: FloatingPoint> Default for Matrix4x4<T> {
    fn default() -> Self {
        Self::new(T::zero())
    }
}

impl<T: FloatingPoint> TryFrom<&[Vector4<T>]> for Matrix4x4<T> {
    type Error = MatrixError;

    fn try_from(rows: &[Vector4<T>]) -> Result<Self, Self::Error> {
        Self::from_row_array(rows)
    }
}

impl<T: FloatingPoint> TryFrom<Vec<Vector4<T>>> for Matrix4x4<T> {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vector4<T>>) -> Result<Self, Self::Error> {
        Self::from_row_array(&rows)
    }
}

/// Row access by index. Panics when `idx > 3`; no other checking is done.
impl<T: FloatingPoint> Index<usize> for Matrix4x4<T> {
    type Output = Vector4<T>;

    fn index(&self, idx: usize) -> &Vector4<T> {
        &self.rows[idx]
    }
}

impl<T: FloatingPoint> IndexMut<usize> for Matrix4x4<T> {
    fn index_mut(&mut self, idx: usize) -> &mut Vector4<T> {
        &mut self.rows[idx]
    }
}

impl<T: FloatingPoint> Mul<Vector4<T>> for Matrix4x4<T> {
    type Output = Vector4<T>;

    fn mul(self, rhs: Vector4<T>) -> Vector4<T> {
        self.mult_vec4(&rhs)
    }
}

impl<T: FloatingPoint> Mul<Vector4<T>> for &Matrix4x4<T> {
    type Output = Vector4<T>;

    fn mul(self, rhs: Vector4<T>) -> Vector4<T> {
        self.mult_vec4(&rhs)
    }
}

// By-value product: runs the in-place multiply on the left operand and returns it.
impl<T: FloatingPoint> Mul<Matrix4x4<T>> for Matrix4x4<T> {
    type Output = Matrix4x4<T>;

    fn mul(mut self, rhs: Matrix4x4<T>) -> Matrix4x4<T> {
        self.mult_mat4(&rhs);
        self
    }
}

impl<T: FloatingPoint> MulAssign<Matrix4x4<T>> for Matrix4x4<T> {
    fn mul_assign(&mut self, rhs: Matrix4x4<T>) {
        self.mult_mat4(&rhs);
    }
}

#[cfg(feature = "serde")]
impl<T> Serialize for Matrix4x4<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.rows.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> Deserialize<'de> for Matrix4x4<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let rows = <[Vector4<T>; ROWS]>::deserialize(deserializer)?;
        Ok(Matrix4x4 { rows })
    }
}
