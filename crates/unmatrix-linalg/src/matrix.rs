use crate::{error::LinalgError, vector::length};

/// Row-normalized determinant below which a matrix is treated as singular.
///
/// See [`normalized_determinant`].
pub const SINGULAR_EPSILON: f64 = 1e-12;

/// The `N x N` identity matrix.
pub fn identity<const N: usize>() -> [[f64; N]; N] {
    let mut out = [[0.0; N]; N];
    for (i, row) in out.iter_mut().enumerate() {
        row[i] = 1.0;
    }
    out
}

// copy the rows into an owned square array, checking the row count
fn to_square<const N: usize>(m: &[[f64; N]]) -> Result<[[f64; N]; N], LinalgError> {
    if m.len() != N {
        return Err(LinalgError::DimensionMismatch(N, m.len()));
    }
    let mut out = [[0.0; N]; N];
    out.copy_from_slice(m);
    Ok(out)
}

// index of the row at or below `col` with the largest magnitude in column `col`
fn pivot_row<const N: usize>(a: &[[f64; N]; N], col: usize) -> usize {
    (col..N)
        .max_by(|&i, &j| a[i][col].abs().total_cmp(&a[j][col].abs()))
        .unwrap_or(col)
}

/// Compute the determinant of a square matrix.
///
/// Uses Gaussian elimination with partial pivoting on a local copy, so a matrix with an
/// all-zero row or column yields exactly `0.0`.
///
/// # Arguments
///
/// * `m` - The matrix rows. The number of rows must match the row length.
///
/// # Errors
///
/// Returns [`LinalgError::DimensionMismatch`] if the matrix is not square.
///
/// # Example
///
/// ```
/// use unmatrix_linalg::matrix::determinant;
///
/// let m = [[2.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 4.0]];
/// assert_eq!(determinant(&m).unwrap(), 24.0);
/// ```
pub fn determinant<const N: usize>(m: &[[f64; N]]) -> Result<f64, LinalgError> {
    let mut a = to_square(m)?;
    let mut det = 1.0;

    for col in 0..N {
        let pivot = pivot_row(&a, col);
        if a[pivot][col] == 0.0 {
            return Ok(0.0);
        }
        if pivot != col {
            a.swap(pivot, col);
            det = -det;
        }
        det *= a[col][col];

        for row in col + 1..N {
            let factor = a[row][col] / a[col][col];
            for k in col..N {
                a[row][k] -= factor * a[col][k];
            }
        }
    }

    Ok(det)
}

/// Compute the determinant of a square matrix after scaling every row to unit length.
///
/// The result lies in `[-1, 1]` and does not change when a row is multiplied by a positive
/// factor, so it measures how close the rows are to being linearly dependent independently
/// of their magnitude. A zero row gives `0.0`. Non-finite input gives a non-finite or zero
/// result, never a value in `(0, 1]` by accident of overflow.
///
/// # Arguments
///
/// * `m` - The matrix rows. The number of rows must match the row length.
///
/// # Errors
///
/// Returns [`LinalgError::DimensionMismatch`] if the matrix is not square.
///
/// # Example
///
/// ```
/// use unmatrix_linalg::matrix::normalized_determinant;
///
/// let m = [[1e-7, 0.0], [0.0, 1e-7]];
/// assert_eq!(normalized_determinant(&m).unwrap(), 1.0);
/// ```
pub fn normalized_determinant<const N: usize>(m: &[[f64; N]]) -> Result<f64, LinalgError> {
    let mut a = to_square(m)?;
    for row in a.iter_mut() {
        let len = length(row);
        if len == 0.0 {
            return Ok(0.0);
        }
        for val in row.iter_mut() {
            *val /= len;
        }
    }
    determinant(&a)
}

/// Compute the inverse of a square matrix with Gauss-Jordan elimination.
///
/// # Arguments
///
/// * `m` - The matrix rows. The number of rows must match the row length.
///
/// # Errors
///
/// Returns [`LinalgError::DimensionMismatch`] if the matrix is not square and
/// [`LinalgError::SingularMatrix`] if the matrix is singular or not finite, that is unless
/// `|normalized_determinant(m)| >= SINGULAR_EPSILON`. The error carries the determinant.
///
/// # Example
///
/// ```
/// use unmatrix_linalg::matrix::inverse;
///
/// let m = [[2.0, 0.0], [0.0, 4.0]];
/// assert_eq!(inverse(&m).unwrap(), [[0.5, 0.0], [0.0, 0.25]]);
/// ```
pub fn inverse<const N: usize>(m: &[[f64; N]]) -> Result<[[f64; N]; N], LinalgError> {
    let normalized = normalized_determinant(m)?;
    if !normalized.is_finite() || normalized.abs() < SINGULAR_EPSILON {
        return Err(LinalgError::SingularMatrix(determinant(m)?));
    }

    let mut a = to_square(m)?;
    let mut inv = identity::<N>();

    for col in 0..N {
        let pivot = pivot_row(&a, col);
        a.swap(pivot, col);
        inv.swap(pivot, col);

        let p = a[col][col];
        for k in 0..N {
            a[col][k] /= p;
            inv[col][k] /= p;
        }

        for row in 0..N {
            if row == col {
                continue;
            }
            let factor = a[row][col];
            if factor == 0.0 {
                continue;
            }
            for k in 0..N {
                a[row][k] -= factor * a[col][k];
                inv[row][k] -= factor * inv[col][k];
            }
        }
    }

    Ok(inv)
}

/// Transpose a `R x C` matrix into a `C x R` matrix.
pub fn transpose<const R: usize, const C: usize>(m: &[[f64; C]; R]) -> [[f64; R]; C] {
    let mut out = [[0.0; R]; C];
    for (i, row) in m.iter().enumerate() {
        for (j, val) in row.iter().enumerate() {
            out[j][i] = *val;
        }
    }
    out
}

/// Multiply a matrix by a column vector, `m * v`.
///
/// # Arguments
///
/// * `m` - The matrix with `R` rows and `C` columns.
/// * `v` - The vector, which must have `C` components.
///
/// # Returns
///
/// The transformed vector with one component per matrix row.
///
/// # Errors
///
/// Returns [`LinalgError::DimensionMismatch`] if `v.len() != C`.
pub fn multiply<const R: usize, const C: usize>(
    m: &[[f64; C]; R],
    v: &[f64],
) -> Result<[f64; R], LinalgError> {
    if v.len() != C {
        return Err(LinalgError::DimensionMismatch(C, v.len()));
    }

    let mut out = [0.0; R];
    for (o, row) in out.iter_mut().zip(m.iter()) {
        *o = row.iter().zip(v).map(|(a, b)| a * b).sum();
    }
    Ok(out)
}
