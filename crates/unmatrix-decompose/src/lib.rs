#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! Matrices are stored `matrix[row][col]` in the row-vector convention: rows 0..2 of the
//! upper-left block are the images of the x, y and z axes, row 3 holds the translation and
//! column 3 holds the perspective partition. A CSS `matrix3d(...)` list therefore fills the
//! matrix row by row.
//!
//! ```
//! use unmatrix_decompose::{decompose, matrix_from_2d};
//!
//! // translate(10px, 20px) rotate(90deg)
//! let m = matrix_from_2d(&[0.0, 1.0, -1.0, 0.0, 10.0, 20.0]);
//! let t = decompose(&m).unwrap().unwrap();
//! assert!((t.rotate_z - 90.0).abs() < 1e-9);
//! assert_eq!((t.translate_x, t.translate_y), (10.0, 20.0));
//! ```

mod decompose;
mod error;
mod layout;
mod recompose;
mod types;

pub use decompose::*;
pub use error::DecomposeError;
pub use layout::*;
pub use recompose::*;
pub use types::*;
