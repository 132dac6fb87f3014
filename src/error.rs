use thiserror::Error;

/// Error types for the simplexopt-rs library.
///
/// The minimization loop itself never fails; these errors cover the
/// surrounding surfaces (configuration, I/O, objective adapters).
#[derive(Error, Debug)]
pub enum SimplexError {
    /// Error for invalid configuration values.
    #[error("Invalid parameter value: {0}")]
    InvalidParameter(String),

    /// Error indicating a mismatch between a vertex and an objective.
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Error during objective function evaluation.
    #[error("Function evaluation error: {0}")]
    FunctionEvaluation(String),

    /// I/O error wrapper.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Generic error for cases that don't fit the other categories.
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for simplexopt-rs operations.
pub type Result<T> = std::result::Result<T, SimplexError>;

impl From<String> for SimplexError {
    fn from(s: String) -> Self {
        SimplexError::Other(s)
    }
}

impl From<&str> for SimplexError {
    fn from(s: &str) -> Self {
        SimplexError::Other(s.to_string())
    }
}
