use unmatrix_decompose::{TransformResult, Vector4};

// six decimals, without a trailing "-0"
fn num(v: f64) -> String {
    let v = (v * 1e6).round() / 1e6 + 0.0;
    format!("{}", v)
}

// six significant digits, for scale factors which may be arbitrarily small
fn factor(v: f64) -> String {
    let v = format!("{v:.5e}").parse::<f64>().unwrap_or(v) + 0.0;
    format!("{}", v)
}

// the distance of a `perspective(d)` function, if the vector is exactly that
fn perspective_distance(p: &Vector4) -> Option<f64> {
    match *p {
        [x, y, z, w] if x == 0.0 && y == 0.0 && z < 0.0 && w == 1.0 => Some(-1.0 / z),
        _ => None,
    }
}

/// Format a decomposition as a CSS transform list.
///
/// The functions are listed in the order that rebuilds the decomposed matrix:
/// `translate, rotateZ, rotateY, rotateX, skew, scale`. A transform that stays in the XY
/// plane uses the 2d functions. The XZ and YZ shears have no CSS function and are written as
/// a `matrix3d(...)` shear when nonzero. Only a pure z perspective can be written as
/// `perspective(...)`; other perspective vectors are dropped.
///
/// # Example
///
/// ```
/// use unmatrix_css::to_css;
/// use unmatrix_decompose::TransformResult;
///
/// let t = TransformResult { translate_x: 10.0, rotate_z: 45.0, ..Default::default() };
/// assert_eq!(to_css(&t), "translate(10px, 0px) rotate(45deg) skew(0deg) scale(1, 1)");
/// ```
pub fn to_css(t: &TransformResult) -> String {
    let mut parts = Vec::new();

    if let Some(p) = &t.perspective {
        match perspective_distance(p) {
            Some(d) => parts.push(format!("perspective({}px)", num(d))),
            None => log::warn!("perspective {p:?} has no css function, dropping it"),
        }
    }

    if t.is_2d() {
        parts.push(format!(
            "translate({}px, {}px)",
            num(t.translate_x),
            num(t.translate_y)
        ));
        parts.push(format!("rotate({}deg)", num(t.rotate_z)));
        parts.push(format!("skew({}deg)", num(t.skew)));
        parts.push(format!("scale({}, {})", factor(t.scale_x), factor(t.scale_y)));
        return parts.join(" ");
    }

    parts.push(format!(
        "translate3d({}px, {}px, {}px)",
        num(t.translate_x),
        num(t.translate_y),
        num(t.translate_z)
    ));
    parts.push(format!("rotateZ({}deg)", num(t.rotate_z)));
    parts.push(format!("rotateY({}deg)", num(t.rotate_y)));
    parts.push(format!("rotateX({}deg)", num(t.rotate_x)));
    if t.skew_x != 0.0 || t.skew_y != 0.0 {
        // applied before the xy skew so the shears do not mix
        let k_xz = num(t.skew_x.to_radians().tan());
        let k_yz = num(t.skew_y.to_radians().tan());
        parts.push(format!(
            "matrix3d(1, 0, 0, 0, 0, 1, 0, 0, {}, {}, 1, 0, 0, 0, 0, 1)",
            k_xz, k_yz
        ));
    }
    parts.push(format!("skew({}deg)", num(t.skew)));
    parts.push(format!(
        "scale3d({}, {}, {})",
        factor(t.scale_x),
        factor(t.scale_y),
        factor(t.scale_z)
    ));

    parts.join(" ")
}
