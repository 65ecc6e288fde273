use unmatrix_decompose::{decompose, matrix_from_coefficients, Matrix4, TransformResult};

use crate::error::CssError;

fn parse_part(s: &str) -> Result<f64, CssError> {
    let val = s
        .parse::<f64>()
        .map_err(|e| CssError::ParseFloat(format!("{}: {}", s, e)))?;
    if !val.is_finite() {
        return Err(CssError::ParseFloat(format!("{}: not a finite number", s)));
    }
    Ok(val)
}

/// Parse a computed style `transform` value into a 4x4 matrix.
///
/// Accepts `none`, `matrix(a, b, c, d, tx, ty)` and `matrix3d(...)` with 16 values, which is
/// what a computed style reports. Function names are case insensitive and whitespace around
/// the values is ignored.
///
/// # Returns
///
/// `Ok(None)` for `none`, otherwise the matrix laid out as described in
/// [`unmatrix_decompose::matrix_from_2d`] and [`unmatrix_decompose::matrix_from_3d`].
///
/// # Example
///
/// ```
/// use unmatrix_css::parse_transform;
///
/// let m = parse_transform("matrix(1, 0, 0, 1, 10, 20)").unwrap().unwrap();
/// assert_eq!(m[3], [10.0, 20.0, 0.0, 1.0]);
/// assert_eq!(parse_transform("none").unwrap(), None);
/// ```
pub fn parse_transform(value: &str) -> Result<Option<Matrix4>, CssError> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("none") {
        return Ok(None);
    }

    let (name, args) = value
        .split_once('(')
        .ok_or_else(|| CssError::UnsupportedFunction(value.to_string()))?;
    let name = name.trim().to_ascii_lowercase();

    let expected = match name.as_str() {
        "matrix" => 6,
        "matrix3d" => 16,
        _ => return Err(CssError::UnsupportedFunction(name)),
    };

    let args = args
        .trim_end()
        .strip_suffix(')')
        .ok_or_else(|| CssError::UnterminatedFunction(name.clone()))?;

    let coefficients = args
        .split(',')
        .map(|s| parse_part(s.trim()))
        .collect::<Result<Vec<_>, _>>()?;

    if coefficients.len() != expected {
        return Err(CssError::ArgumentCount {
            function: name,
            expected,
            actual: coefficients.len(),
        });
    }

    Ok(Some(matrix_from_coefficients(&coefficients)?))
}

/// Read a computed style `transform` value and decompose it.
///
/// `Ok(None)` means there is no transform to apply, either because the value is `none` or
/// because the matrix is degenerate (e.g. `scale(0)`).
///
/// # Example
///
/// ```
/// use unmatrix_css::transform_from_css;
///
/// let t = transform_from_css("matrix(2, 0, 0, 3, 5, -3)").unwrap().unwrap();
/// assert_eq!((t.scale_x, t.scale_y), (2.0, 3.0));
/// assert_eq!((t.translate_x, t.translate_y), (5.0, -3.0));
/// ```
pub fn transform_from_css(value: &str) -> Result<Option<TransformResult>, CssError> {
    let Some(matrix) = parse_transform(value)? else {
        return Ok(None);
    };
    let result = decompose(&matrix)?;
    if result.is_none() {
        log::debug!("transform {value} has no decomposition");
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_none() -> Result<(), CssError> {
        assert_eq!(parse_transform("none")?, None);
        assert_eq!(parse_transform("  NONE ")?, None);
        Ok(())
    }

    #[test]
    fn test_parse_matrix() -> Result<(), CssError> {
        let m = parse_transform("matrix(0.5,1e1 , -2, 3,4 ,5)")?;
        assert_eq!(
            m,
            Some([
                [0.5, 10.0, 0.0, 0.0],
                [-2.0, 3.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [4.0, 5.0, 0.0, 1.0],
            ])
        );
        Ok(())
    }

    #[test]
    fn test_parse_matrix3d() -> Result<(), CssError> {
        let m = parse_transform(
            "matrix3d(1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, -0.01, 7, 8, 9, 1)",
        )?;
        let m = m.ok_or(CssError::UnsupportedFunction("none".to_string()))?;
        assert_eq!(m[2], [0.0, 0.0, 1.0, -0.01]);
        assert_eq!(m[3], [7.0, 8.0, 9.0, 1.0]);
        Ok(())
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_transform("rotate(45deg)"),
            Err(CssError::UnsupportedFunction("rotate".to_string()))
        );
        assert_eq!(
            parse_transform("translateX"),
            Err(CssError::UnsupportedFunction("translateX".to_string()))
        );
        assert_eq!(
            parse_transform("matrix(1, 0, 0, 1, 0, 0"),
            Err(CssError::UnterminatedFunction("matrix".to_string()))
        );
        assert_eq!(
            parse_transform("matrix3d(1, 0, 0, 1, 0, 0)"),
            Err(CssError::ArgumentCount {
                function: "matrix3d".to_string(),
                expected: 16,
                actual: 6,
            })
        );
        assert!(matches!(
            parse_transform("matrix(1, 0, 0, 1, 0px, 0)"),
            Err(CssError::ParseFloat(_))
        ));
        assert!(matches!(
            parse_transform("matrix(1, 0, 0, 1, inf, 0)"),
            Err(CssError::ParseFloat(_))
        ));
    }

    #[test]
    fn test_transform_from_css() -> Result<(), CssError> {
        let t = transform_from_css("matrix(0.866025, 0.5, -0.5, 0.866025, 10, 20)")?;
        let t = t.ok_or(CssError::UnsupportedFunction("none".to_string()))?;
        assert_relative_eq!(t.rotate_z, 30.0, epsilon = 1e-4);
        assert_eq!((t.translate_x, t.translate_y), (10.0, 20.0));
        Ok(())
    }

    #[test]
    fn test_transform_from_css_degenerate() -> Result<(), CssError> {
        assert_eq!(transform_from_css("matrix(0, 0, 0, 0, 0, 0)")?, None);
        assert_eq!(transform_from_css("none")?, None);
        Ok(())
    }
}
