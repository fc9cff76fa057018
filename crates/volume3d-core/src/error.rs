//! Error types for volume3d-rs.

use thiserror::Error;

/// The main error type for volume3d-rs operations.
#[derive(Error, Debug)]
pub enum Volume3dError {
    /// Data size mismatch.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// A coordinate axis has no entries.
    #[error("axis '{0}' has no coordinates")]
    EmptyAxis(&'static str),

    /// The grid has more samples than a 32-bit triangle index can address.
    #[error("grid has {0} samples, which exceeds the 32-bit index range")]
    TooManySamples(usize),

    /// A color specification could not be parsed.
    #[error("invalid color '{0}'")]
    InvalidColor(String),

    /// A named colorscale is not registered.
    #[error("colorscale '{0}' not found")]
    UnknownColorscale(String),

    /// A colorscale stop list is malformed.
    #[error("invalid colorscale: {0}")]
    InvalidColorscale(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for volume3d-rs operations.
pub type Result<T> = std::result::Result<T, Volume3dError>;
