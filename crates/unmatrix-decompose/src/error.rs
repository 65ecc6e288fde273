use unmatrix_linalg::LinalgError;

/// An error type for the decomposition module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DecomposeError {
    /// A matrix needs 6 (2d) or 16 (3d) coefficients.
    #[error("Invalid number of coefficients ({0}), expected 6 or 16")]
    InvalidCoefficientCount(usize),

    /// An algebra primitive was called with operands it does not accept.
    #[error(transparent)]
    Linalg(#[from] LinalgError),
}
