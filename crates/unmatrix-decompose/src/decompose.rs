use unmatrix_linalg::{
    matrix::{inverse, multiply, normalized_determinant, transpose, SINGULAR_EPSILON},
    vector::{combine, cross, dot, length, normalize},
    LinalgError,
};

use crate::{
    error::DecomposeError,
    types::{Matrix4, TransformResult, Vector3},
};

/// Below this `cos(rotateY)` the rotation is treated as gimbal locked.
pub const GIMBAL_EPSILON: f64 = 1e-12;

/// Decompose a 4x4 transform matrix into translation, scale, skew, rotation and perspective.
///
/// The input is copied; the caller's matrix is never modified.
///
/// # Arguments
///
/// * `matrix` - The transform, indexed `[row][col]` with the translation in row 3.
///
/// # Returns
///
/// `Ok(None)` when the matrix has no decomposition: its `[3][3]` element is zero, an
/// element is not finite, or its upper-left 3x3 block is singular. Singularity is judged on
/// the block with its rows scaled to unit length, so a uniformly tiny but otherwise valid
/// scale still decomposes.
///
/// # Errors
///
/// Only if an algebra primitive rejects its operands, which does not happen for a 4x4 input
/// that passed the singularity checks.
///
/// # Example
///
/// ```
/// use unmatrix_decompose::decompose;
///
/// let m = [
///     [2.0, 0.0, 0.0, 0.0],
///     [0.0, 3.0, 0.0, 0.0],
///     [0.0, 0.0, 4.0, 0.0],
///     [0.0, 0.0, 0.0, 1.0],
/// ];
/// let t = decompose(&m).unwrap().unwrap();
/// assert_eq!((t.scale_x, t.scale_y, t.scale_z), (2.0, 3.0, 4.0));
///
/// let collapsed = [[0.0; 4]; 4];
/// assert!(decompose(&collapsed).unwrap().is_none());
/// ```
pub fn decompose(matrix: &Matrix4) -> Result<Option<TransformResult>, DecomposeError> {
    let mut matrix = *matrix;

    // normalize the matrix
    let w = matrix[3][3];
    if w == 0.0 {
        log::debug!("matrix[3][3] is zero, no decomposition");
        return Ok(None);
    }
    for val in matrix.iter_mut().flatten() {
        *val /= w;
    }

    if !matrix.iter().flatten().all(|v| v.is_finite()) {
        log::debug!("matrix is not finite, no decomposition");
        return Ok(None);
    }

    // the upper 3x3 block is singular when its rows are (nearly) linearly dependent,
    // whatever their length
    let block = [0, 1, 2].map(|i| [matrix[i][0], matrix[i][1], matrix[i][2]]);
    let det = normalized_determinant(&block)?;
    if !det.is_finite() || det.abs() < SINGULAR_EPSILON {
        log::debug!("upper 3x3 is singular (normalized det = {det}), no decomposition");
        return Ok(None);
    }

    // isolate perspective
    let perspective = if matrix[0][3] != 0.0 || matrix[1][3] != 0.0 || matrix[2][3] != 0.0 {
        let mut perspective_matrix = matrix;
        for row in perspective_matrix.iter_mut().take(3) {
            row[3] = 0.0;
        }
        perspective_matrix[3][3] = 1.0;

        let rhs = [matrix[0][3], matrix[1][3], matrix[2][3], matrix[3][3]];
        let inv = match inverse(&perspective_matrix) {
            Ok(inv) => inv,
            Err(LinalgError::SingularMatrix(det)) => {
                // a translation dwarfing the block leaves no usable perspective solve
                log::debug!("perspective matrix is singular (det = {det}), no decomposition");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        let inverse_transposed = transpose(&inv);
        let perspective = multiply(&inverse_transposed, &rhs)?;
        log::debug!("isolated perspective {perspective:?}");

        // clear the perspective partition
        for row in matrix.iter_mut().take(3) {
            row[3] = 0.0;
        }
        matrix[3][3] = 1.0;
        Some(perspective)
    } else {
        None
    };

    let translate = [matrix[3][0], matrix[3][1], matrix[3][2]];

    // upper-left 3x3 block as three row vectors
    let mut row: [Vector3; 3] = [[0.0; 3]; 3];
    for (r, m) in row.iter_mut().zip(matrix.iter()) {
        r.copy_from_slice(&m[..3]);
    }

    // x scale, then normalize the first row
    let mut scale_x = length(&row[0]);
    row[0] = normalize(&row[0])?;

    // xy shear, then make the second row orthogonal to the first
    let mut skew_xy = dot(&row[0], &row[1])?;
    row[1] = combine(&row[1], &row[0], 1.0, -skew_xy)?;

    let scale_y = length(&row[1]);
    row[1] = normalize(&row[1])?;
    skew_xy /= scale_y;

    // xz and yz shears, orthogonalize the third row
    let mut skew_xz = dot(&row[0], &row[2])?;
    row[2] = combine(&row[2], &row[0], 1.0, -skew_xz)?;
    let mut skew_yz = dot(&row[1], &row[2])?;
    row[2] = combine(&row[2], &row[1], 1.0, -skew_yz)?;

    let scale_z = length(&row[2]);
    row[2] = normalize(&row[2])?;
    skew_xz /= scale_z;
    skew_yz /= scale_z;
    log::trace!("scale ({scale_x}, {scale_y}, {scale_z}) shear ({skew_xy}, {skew_xz}, {skew_yz})");

    // The rows are orthonormal now. A negative determinant means a coordinate system flip,
    // which is folded into the x axis together with the shears that couple to it.
    let pdum3 = cross(&row[1], &row[2])?;
    if dot(&row[0], &pdum3)? < 0.0 {
        scale_x = -scale_x;
        skew_xy = -skew_xy;
        skew_xz = -skew_xz;
        row[0] = row[0].map(|v| -v);
    }

    // asin(-row0.z), with cos(rotateY) taken from the other two components of the unit row
    let cos_y = row[0][0].hypot(row[0][1]);
    let rotate_y = (-row[0][2]).atan2(cos_y);
    let (rotate_x, rotate_z) = if cos_y > GIMBAL_EPSILON {
        (row[1][2].atan2(row[2][2]), row[0][1].atan2(row[0][0]))
    } else {
        log::debug!("gimbal lock, rotateZ folded into rotateX");
        ((-row[2][1]).atan2(row[1][1]), 0.0)
    };

    Ok(Some(TransformResult {
        translate_x: translate[0],
        translate_y: translate[1],
        translate_z: translate[2],
        scale_x,
        scale_y,
        scale_z,
        skew: skew_xy.atan().to_degrees(),
        skew_x: skew_xz.atan().to_degrees(),
        skew_y: skew_yz.atan().to_degrees(),
        rotate_x: rotate_x.to_degrees(),
        rotate_y: rotate_y.to_degrees(),
        rotate_z: rotate_z.to_degrees(),
        perspective,
    }))
}
