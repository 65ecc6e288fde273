#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the css module.
pub mod error;

/// Formatting a decomposition back into a transform list.
pub mod format;

/// Parsing computed style `transform` values.
pub mod parse;

pub use crate::error::CssError;
pub use crate::format::to_css;
pub use crate::parse::{parse_transform, transform_from_css};
