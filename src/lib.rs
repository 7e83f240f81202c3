//! # Quadra
//!
//! A fixed-size 4x4 matrix value type for graphics, physics and transform
//! pipelines.
//!
//! ```rust
//! use quadra::{Mat4, Vec4};
//!
//! let mut m = Mat4::new(1.0);
//! m[0][1] = 2.0;
//! assert_eq!(m * Vec4::new(1.0, 1.0, 0.0, 0.0), Vec4::new(3.0, 1.0, 0.0, 0.0));
//!
//! // Column-major buffer for uniform upload
//! let buffer: [f32; 16] = m.to_array_col_major();
//! assert_eq!(buffer[4], 2.0);
//! ```

pub mod numerics;

pub use numerics::error::MatrixError;
pub use numerics::types::matrix::{Mat4, Mat4d, Matrix4x4};
pub use numerics::types::traits::FloatingPoint;
pub use numerics::types::vector::{Vec4, Vec4d, Vector4};
