#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use unmatrix_linalg as linalg;

#[doc(inline)]
pub use unmatrix_decompose as decompose;

#[doc(inline)]
pub use unmatrix_css as css;
