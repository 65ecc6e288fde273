use unmatrix_linalg::matrix::{multiply, transpose};

use crate::{
    error::DecomposeError,
    types::{Matrix4, TransformResult, Vector3},
};

// rows of the orthonormal rotation block for rotateZ * rotateY * rotateX
fn rotation_rows(t: &TransformResult) -> [Vector3; 3] {
    let (sa, ca) = t.rotate_x.to_radians().sin_cos();
    let (sb, cb) = t.rotate_y.to_radians().sin_cos();
    let (sg, cg) = t.rotate_z.to_radians().sin_cos();

    [
        [cg * cb, sg * cb, -sb],
        [cg * sb * sa - sg * ca, sg * sb * sa + cg * ca, cb * sa],
        [cg * sb * ca + sg * sa, sg * sb * ca - cg * sa, cb * ca],
    ]
}

/// Rebuild the 4x4 matrix described by a [`TransformResult`].
///
/// This is the inverse of [`crate::decompose`]: the upper-left block is
/// `scale * shear * rotation`, row 3 holds the translation and column 3 is rebuilt from the
/// perspective vector so that decomposing the result yields the same perspective.
///
/// # Errors
///
/// Only if an algebra primitive rejects its operands, which does not happen for 4x4 input.
///
/// # Example
///
/// ```
/// use unmatrix_decompose::{recompose, TransformResult};
///
/// let t = TransformResult { translate_x: 5.0, scale_y: 2.0, ..Default::default() };
/// let m = recompose(&t).unwrap();
/// assert_eq!(m[1][1], 2.0);
/// assert_eq!(m[3], [5.0, 0.0, 0.0, 1.0]);
/// ```
pub fn recompose(t: &TransformResult) -> Result<Matrix4, DecomposeError> {
    let [u0, u1, u2] = rotation_rows(t);
    let k_xy = t.skew.to_radians().tan();
    let k_xz = t.skew_x.to_radians().tan();
    let k_yz = t.skew_y.to_radians().tan();

    let row0 = u0.map(|v| v * t.scale_x);
    let mut row1 = [0.0; 3];
    let mut row2 = [0.0; 3];
    for i in 0..3 {
        row1[i] = t.scale_y * (k_xy * u0[i] + u1[i]);
        row2[i] = t.scale_z * (k_xz * u0[i] + k_yz * u1[i] + u2[i]);
    }

    let mut matrix = [[0.0; 4]; 4];
    for (dst, src) in matrix.iter_mut().zip([row0, row1, row2]) {
        dst[..3].copy_from_slice(&src);
    }
    matrix[3] = [t.translate_x, t.translate_y, t.translate_z, 1.0];

    if let Some(perspective) = t.perspective {
        // decompose solves (M^-1)^T * column = perspective, so the column is M^T * perspective
        let column = multiply(&transpose(&matrix), &perspective)?;
        for (row, val) in matrix.iter_mut().zip(column) {
            row[3] = val;
        }
    }

    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_recompose_identity() -> Result<(), DecomposeError> {
        let m = recompose(&TransformResult::default())?;
        let expected = [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ];
        for (row, expected) in m.iter().zip(expected.iter()) {
            for (a, b) in row.iter().zip(expected) {
                assert_relative_eq!(*a, *b, epsilon = 1e-15);
            }
        }
        Ok(())
    }

    #[test]
    fn test_rotation_rows_are_orthonormal() {
        let t = TransformResult {
            rotate_x: 12.0,
            rotate_y: -35.0,
            rotate_z: 140.0,
            ..Default::default()
        };
        let rows = rotation_rows(&t);
        for i in 0..3 {
            for j in 0..3 {
                let d: f64 = (0..3).map(|k| rows[i][k] * rows[j][k]).sum();
                assert_relative_eq!(d, if i == j { 1.0 } else { 0.0 }, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_recompose_css_rotate() -> Result<(), DecomposeError> {
        // rotate(30deg) is matrix(cos, sin, -sin, cos, 0, 0)
        let m = recompose(&TransformResult {
            rotate_z: 30.0,
            ..Default::default()
        })?;
        let (s, c) = 30f64.to_radians().sin_cos();
        assert_relative_eq!(m[0][0], c, epsilon = 1e-15);
        assert_relative_eq!(m[0][1], s, epsilon = 1e-15);
        assert_relative_eq!(m[1][0], -s, epsilon = 1e-15);
        assert_relative_eq!(m[1][1], c, epsilon = 1e-15);
        Ok(())
    }

    #[test]
    fn test_recompose_perspective_column() -> Result<(), DecomposeError> {
        let m = recompose(&TransformResult {
            perspective: Some([0.0, 0.0, -0.01, 1.0]),
            ..Default::default()
        })?;
        assert_eq!([m[0][3], m[1][3], m[2][3], m[3][3]], [0.0, 0.0, -0.01, 1.0]);
        Ok(())
    }
}
