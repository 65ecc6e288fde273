use crate::{error::DecomposeError, types::Matrix4};

/// Embed the six coefficients of a 2d affine matrix `[a, b, c, d, tx, ty]` into a 4x4 matrix.
///
/// The layout is the one of a CSS `matrix(a, b, c, d, tx, ty)`:
///
/// ```text
/// [ a,  b,  0, 0 ]
/// [ c,  d,  0, 0 ]
/// [ 0,  0,  1, 0 ]
/// [ tx, ty, 0, 1 ]
/// ```
pub fn matrix_from_2d(t: &[f64; 6]) -> Matrix4 {
    [
        [t[0], t[1], 0.0, 0.0],
        [t[2], t[3], 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [t[4], t[5], 0.0, 1.0],
    ]
}

/// Fill a 4x4 matrix row by row from 16 coefficients, as listed by a CSS `matrix3d(...)`.
pub fn matrix_from_3d(t: &[f64; 16]) -> Matrix4 {
    let mut m = [[0.0; 4]; 4];
    for (row, chunk) in m.iter_mut().zip(t.chunks_exact(4)) {
        row.copy_from_slice(chunk);
    }
    m
}

/// Build a 4x4 matrix from either 6 (2d) or 16 (3d) coefficients.
///
/// # Errors
///
/// Returns [`DecomposeError::InvalidCoefficientCount`] for any other number of coefficients.
///
/// # Example
///
/// ```
/// use unmatrix_decompose::matrix_from_coefficients;
///
/// let m = matrix_from_coefficients(&[1.0, 0.0, 0.0, 1.0, 5.0, -3.0]).unwrap();
/// assert_eq!(m[3], [5.0, -3.0, 0.0, 1.0]);
/// assert!(matrix_from_coefficients(&[1.0, 0.0]).is_err());
/// ```
pub fn matrix_from_coefficients(coefficients: &[f64]) -> Result<Matrix4, DecomposeError> {
    if let Ok(t) = <&[f64; 6]>::try_from(coefficients) {
        return Ok(matrix_from_2d(t));
    }
    if let Ok(t) = <&[f64; 16]>::try_from(coefficients) {
        return Ok(matrix_from_3d(t));
    }
    Err(DecomposeError::InvalidCoefficientCount(coefficients.len()))
}
