use serde::{Deserialize, Serialize};

/// A 4x4 homogeneous transform, indexed `[row][col]`.
pub type Matrix4 = [[f64; 4]; 4];

/// A 3d direction or point.
pub type Vector3 = [f64; 3];

/// A homogeneous point or matrix row.
pub type Vector4 = [f64; 4];

/// The perspective vector of a matrix without a perspective partition.
pub const NO_PERSPECTIVE: Vector4 = [0.0, 0.0, 0.0, 1.0];

/// The components recovered from a transform matrix.
///
/// Translations are in the units of the matrix, scales are signed factors and every angle
/// (rotations and skews) is in degrees. Applying the components in the order
/// `perspective, translate, rotateZ, rotateY, rotateX, skew, scale` rebuilds the matrix,
/// see [`crate::recompose`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformResult {
    /// Translation along x.
    pub translate_x: f64,
    /// Translation along y.
    pub translate_y: f64,
    /// Translation along z.
    pub translate_z: f64,
    /// Scale along x. A coordinate system flip is reported as a negative value here.
    pub scale_x: f64,
    /// Scale along y.
    pub scale_y: f64,
    /// Scale along z.
    pub scale_z: f64,
    /// XY shear angle, the shear a 2d `skew(...)` describes.
    pub skew: f64,
    /// XZ shear angle.
    pub skew_x: f64,
    /// YZ shear angle.
    pub skew_y: f64,
    /// Rotation about x.
    pub rotate_x: f64,
    /// Rotation about y, within `[-90, 90]`.
    pub rotate_y: f64,
    /// Rotation about z.
    pub rotate_z: f64,
    /// The perspective vector, `None` when the matrix had no perspective partition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perspective: Option<Vector4>,
}

impl Default for TransformResult {
    fn default() -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            translate_z: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            scale_z: 1.0,
            skew: 0.0,
            skew_x: 0.0,
            skew_y: 0.0,
            rotate_x: 0.0,
            rotate_y: 0.0,
            rotate_z: 0.0,
            perspective: None,
        }
    }
}

impl TransformResult {
    /// The perspective vector, or `(0, 0, 0, 1)` when there is none.
    pub fn perspective_or_identity(&self) -> Vector4 {
        self.perspective.unwrap_or(NO_PERSPECTIVE)
    }

    /// Whether the transform stays in the XY plane, i.e. a 2d `matrix(...)` describes it.
    pub fn is_2d(&self) -> bool {
        self.perspective.is_none()
            && self.translate_z == 0.0
            && self.scale_z == 1.0
            && self.skew_x == 0.0
            && self.skew_y == 0.0
            && self.rotate_x == 0.0
            && self.rotate_y == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity() {
        let t = TransformResult::default();
        assert!(t.is_2d());
        assert_eq!(t.perspective_or_identity(), NO_PERSPECTIVE);
        assert_eq!((t.scale_x, t.scale_y, t.scale_z), (1.0, 1.0, 1.0));
    }

    #[test]
    fn test_is_2d() {
        let t = TransformResult {
            rotate_z: 45.0,
            skew: 10.0,
            ..Default::default()
        };
        assert!(t.is_2d());

        let t = TransformResult {
            rotate_x: 45.0,
            ..Default::default()
        };
        assert!(!t.is_2d());

        let t = TransformResult {
            perspective: Some([0.0, 0.0, -0.01, 1.0]),
            ..Default::default()
        };
        assert!(!t.is_2d());
    }

    #[test]
    fn test_serde_field_names() -> Result<(), serde_json::Error> {
        let t = TransformResult {
            translate_x: 5.0,
            ..Default::default()
        };
        let json = serde_json::to_value(t)?;
        assert_eq!(json["translateX"], 5.0);
        assert_eq!(json["scaleZ"], 1.0);
        assert!(json.get("perspective").is_none());

        let back: TransformResult = serde_json::from_value(json)?;
        assert_eq!(back, t);
        Ok(())
    }
}
