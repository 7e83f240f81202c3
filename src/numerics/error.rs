// src/numerics/error.rs

/// Errors raised by matrix construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    #[error("invalid argument: wrong row count (expected {expected}, found {found})")]
    InvalidArgument { expected: usize, found: usize },
}
