use thiserror::Error;

/// An error type for the matrix and vector operations.
#[derive(Error, Debug, PartialEq)]
pub enum LinalgError {
    /// The operand shapes do not agree.
    #[error("Dimension mismatch. Expected {0}, got {1}.")]
    DimensionMismatch(usize, usize),

    /// The matrix has no inverse.
    #[error("Matrix is singular (determinant {0}).")]
    SingularMatrix(f64),

    /// A vector of length zero has no direction.
    #[error("Cannot normalize a zero length vector.")]
    ZeroLengthVector,
}
