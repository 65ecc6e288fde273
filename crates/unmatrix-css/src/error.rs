use unmatrix_decompose::DecomposeError;

/// An error type for reading transform values.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CssError {
    /// Only `matrix(...)` and `matrix3d(...)` are accepted, as produced by computed styles.
    #[error("Unsupported transform function {0}")]
    UnsupportedFunction(String),

    /// The argument list is not closed.
    #[error("Unterminated transform function {0}")]
    UnterminatedFunction(String),

    /// The function got the wrong number of arguments.
    #[error("{function} expects {expected} arguments, got {actual}")]
    ArgumentCount {
        /// The function name.
        function: String,
        /// The number of arguments the function takes.
        expected: usize,
        /// The number of arguments found.
        actual: usize,
    },

    /// An argument is not a finite number.
    #[error("Parse error {0}")]
    ParseFloat(String),

    /// Decomposition error.
    #[error(transparent)]
    Decompose(#[from] DecomposeError),
}
