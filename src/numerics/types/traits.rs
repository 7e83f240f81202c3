// src/numerics/types/traits.rs
// Scalar trait shared by Vector4 and Matrix4x4.

/// FloatingPoint is the scalar bound for vector and matrix components.
///
/// Only the operations the 4x4 algebra needs are required: the four basic
/// arithmetic ops plus additive/multiplicative identities.
pub trait FloatingPoint:
Copy + PartialOrd + core::fmt::Debug
+ core::ops::Add<Output = Self>
+ core::ops::Sub<Output = Self>
+ core::ops::Mul<Output = Self>
+ core::ops::Div<Output = Self>
{
    fn zero() -> Self;
    fn one() -> Self;
}

impl FloatingPoint for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
}

impl FloatingPoint for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
}
