//! Error types for healthassist
//!
//! A single error enum covers the whole prediction path: loading model
//! artifacts, coercing user input, and scoring feature vectors.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for model loading and diagnosis
#[derive(Error, Debug)]
pub enum DiagnosisError {
    /// Model artifact missing, unreadable, or malformed (fatal at startup)
    #[error("Failed to load model artifact {path}: {reason}")]
    Load { path: PathBuf, reason: String },

    /// User input rejected before reaching the model
    #[error("Invalid input for field #{index} ({field}): {reason}")]
    InvalidInput {
        index: usize,
        field: String,
        reason: String,
    },

    /// Feature vector shape does not match the artifact
    #[error("Inference error: expected {expected} features, got {actual}")]
    Inference { expected: usize, actual: usize },

    /// Numeric failure while scoring
    #[error("Compute error: {0}")]
    Compute(String),

    /// Unknown disease schema identifier
    #[error("Unknown schema '{0}' (expected diabetes, heart or parkinsons)")]
    UnknownSchema(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl DiagnosisError {
    /// Build a load error for `path`
    pub fn load(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        DiagnosisError::Load {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Build an input error for the field at `index`
    pub fn invalid_input(index: usize, field: impl Into<String>, reason: impl Into<String>) -> Self {
        DiagnosisError::InvalidInput {
            index,
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Whether the user can fix this by changing the submission
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            DiagnosisError::InvalidInput { .. } | DiagnosisError::UnknownSchema(_)
        )
    }
}

/// Result type alias for diagnosis operations
pub type Result<T> = std::result::Result<T, DiagnosisError>;
