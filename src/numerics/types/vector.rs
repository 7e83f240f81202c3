// src/numerics/types/vector.rs
// Vector4 generic implementation with default precision f32.
// Serves as the row type of Matrix4x4.

use core::ops::{Add, Index, IndexMut, Mul, Sub};
#[cfg(feature = "serde")]
use serde::{Serialize, Deserialize};

use super::traits::FloatingPoint;

/// Vector4 is a 4-component vector with template-able numeric type.
///
/// Components are addressable by name (`x`, `y`, `z`, `w`) or by index
/// `0..4` in that order.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vector4<T: FloatingPoint = f32> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

pub type Vec4 = Vector4<f32>;
pub type Vec4d = Vector4<f64>;

#[cfg(feature = "serde")]
impl<T> Serialize for Vector4<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.x, &self.y, &self.z, &self.w).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> Deserialize<'de> for Vector4<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (x, y, z, w) = <(T, T, T, T)>::deserialize(deserializer)?;
        Ok(Vector4 { x, y, z, w })
    }
}

impl<T: FloatingPoint> Vector4<T> {
    /// Construct a new Vector4
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// Vector of all zeros
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::zero())
    }

    /// Overwrite all four components in place.
    pub fn set(&mut self, x: T, y: T, z: T, w: T) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self.w = w;
        self
    }

    /// Zero all four components in place.
    pub fn set_zero(&mut self) -> &mut Self {
        self.set(T::zero(), T::zero(), T::zero(), T::zero())
    }

    /// Components in `x, y, z, w` order.
    pub fn to_array(&self) -> [T; 4] {
        [self.x, self.y, self.z, self.w]
    }

    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }
}

impl<T: FloatingPoint> Default for Vector4<T> {
    fn default() -> Self {
        Self::zero()
    }
}

/// Component access by index. Panics when `idx > 3`.
impl<T: FloatingPoint> Index<usize> for Vector4<T> {
    type Output = T;

    fn index(&self, idx: usize) -> &T {
        match idx {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Vector4 component index out of range: {}", idx),
        }
    }
}

impl<T: FloatingPoint> IndexMut<usize> for Vector4<T> {
    fn index_mut(&mut self, idx: usize) -> &mut T {
        match idx {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Vector4 component index out of range: {}", idx),
        }
    }
}

// Implement operator + for Vector4<T>
impl<T: FloatingPoint> Add for Vector4<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }
}

// Implement operator - for Vector4<T>
impl<T: FloatingPoint> Sub for Vector4<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
        )
    }
}

// vector * scalar
impl<T: FloatingPoint> Mul<T> for Vector4<T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar, self.w * scalar)
    }
}

// scalar * vector; coherence rules require one impl per concrete scalar type.
macro_rules! scalar_mul_vector {
    ($($t:ty),*) => {
        $(
            impl Mul<Vector4<$t>> for $t {
                type Output = Vector4<$t>;

                fn mul(self, v: Vector4<$t>) -> Vector4<$t> {
                    v * self
                }
            }
        )*
    };
}

scalar_mul_vector!(f32, f64);

// Conversions between Vector4<T> and tuples

impl<T: FloatingPoint> From<(T, T, T, T)> for Vector4<T> {
    fn from(tuple: (T, T, T, T)) -> Self {
        Self::new(tuple.0, tuple.1, tuple.2, tuple.3)
    }
}

impl<T: FloatingPoint> From<Vector4<T>> for (T, T, T, T) {
    fn from(v: Vector4<T>) -> Self {
        (v.x, v.y, v.z, v.w)
    }
}

// Conversions between Vector4<T> and arrays [T; 4]

impl<T: FloatingPoint> From<[T; 4]> for Vector4<T> {
    fn from(array: [T; 4]) -> Self {
        Self::new(array[0], array[1], array[2], array[3])
    }
}

impl<T: FloatingPoint> From<&[T; 4]> for Vector4<T> {
    fn from(array: &[T; 4]) -> Self {
        Self::new(array[0], array[1], array[2], array[3])
    }
}

impl<T: FloatingPoint> From<Vector4<T>> for [T; 4] {
    fn from(v: Vector4<T>) -> Self {
        v.to_array()
    }
}
