use thiserror::Error;

/// Custom error type for the ScalarGrad framework.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing, Clone added
pub enum ScalarGradError {
    #[error("Shape mismatch: expected {expected}, got {actual} during operation {operation}")]
    ShapeMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("I/O error for model file {path}: {message}")]
    Io { path: String, message: String },

    #[error("Parse error in model file {path} at line {line}: {message}")]
    Parse {
        path: String,
        line: usize,
        message: String,
    },
    // Add more specific errors as needed
}
