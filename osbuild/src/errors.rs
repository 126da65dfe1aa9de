//! Error types for manifest encoding and assembly.
//!
//! Building stages and their options cannot fail. Errors only arise at the
//! encode/decode boundary and when assembling pipelines.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = ManifestError> = std::result::Result<T, E>;

/// The main error type for osbuild manifest operations.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML encoding or decoding failed.
    #[cfg(feature = "yaml")]
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Writing encoded output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A manifest value was rejected during assembly.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The requested encoding format is not known.
    #[error("unknown manifest format '{0}'")]
    UnknownFormat(String),

    /// The manifest declares a version this crate does not produce.
    #[error("unsupported manifest version \"{0}\"")]
    UnsupportedVersion(String),
}

impl ManifestError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Returns true if the error came from the encoder or decoder.
    #[must_use]
    pub fn is_codec(&self) -> bool {
        match self {
            Self::Json(_) => true,
            #[cfg(feature = "yaml")]
            Self::Yaml(_) => true,
            _ => false,
        }
    }
}
