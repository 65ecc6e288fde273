use crate::error::LinalgError;

/// Euclidean norm of a vector, `sqrt(sum(v_i^2))`.
///
/// Accumulated with `hypot` so that components near the limits of `f64` neither overflow
/// nor underflow when squared.
pub fn length(v: &[f64]) -> f64 {
    v.iter().fold(0.0, |acc: f64, x| acc.hypot(*x))
}

/// Scale a vector to unit length.
///
/// # Errors
///
/// Returns [`LinalgError::ZeroLengthVector`] when the vector has length zero, instead of
/// producing `NaN` components.
///
/// # Example
///
/// ```
/// use unmatrix_linalg::vector::normalize;
///
/// assert_eq!(normalize(&[3.0, 0.0, 4.0]).unwrap(), [0.6, 0.0, 0.8]);
/// ```
pub fn normalize<const N: usize>(v: &[f64; N]) -> Result<[f64; N], LinalgError> {
    let len = length(v);
    if len == 0.0 {
        return Err(LinalgError::ZeroLengthVector);
    }
    Ok(v.map(|x| x / len))
}

/// Dot product of two vectors of the same length.
///
/// # Errors
///
/// Returns [`LinalgError::DimensionMismatch`] if the lengths differ.
pub fn dot(v1: &[f64], v2: &[f64]) -> Result<f64, LinalgError> {
    if v1.len() != v2.len() {
        return Err(LinalgError::DimensionMismatch(v1.len(), v2.len()));
    }
    Ok(v1.iter().zip(v2).map(|(a, b)| a * b).sum())
}

/// Cross product of two 3-component vectors.
///
/// # Errors
///
/// Returns [`LinalgError::DimensionMismatch`] if either vector does not have 3 components.
pub fn cross(v1: &[f64], v2: &[f64]) -> Result<[f64; 3], LinalgError> {
    let (a, b) = match (v1, v2) {
        ([a0, a1, a2], [b0, b1, b2]) => ([*a0, *a1, *a2], [*b0, *b1, *b2]),
        ([_, _, _], other) | (other, _) => {
            return Err(LinalgError::DimensionMismatch(3, other.len()))
        }
    };

    Ok([
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ])
}

/// Affine combination of two vectors, `ascl * a + bscl * b`.
///
/// Used by the Gram-Schmidt steps to remove the projection of one row from another.
/// Only 2- and 3-component vectors are supported.
///
/// # Errors
///
/// Returns [`LinalgError::DimensionMismatch`] for any other vector size.
pub fn combine<const N: usize>(
    a: &[f64; N],
    b: &[f64; N],
    ascl: f64,
    bscl: f64,
) -> Result<[f64; N], LinalgError> {
    if !(2..=3).contains(&N) {
        return Err(LinalgError::DimensionMismatch(3, N));
    }

    let mut out = [0.0; N];
    for (o, (x, y)) in out.iter_mut().zip(a.iter().zip(b)) {
        *o = ascl * x + bscl * y;
    }
    Ok(out)
}
