#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the algebra operations.
pub mod error;

/// Determinant, inverse, transpose and matrix-vector product.
pub mod matrix;

/// Length, normalization, dot, cross and affine combination of vectors.
pub mod vector;

pub use crate::error::LinalgError;
