use crate::repository::RepositoryError;
use std::path::PathBuf;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Validation errors (bad field names, malformed arguments)
    #[error("Validation error: {0}")]
    Validation(String),

    /// A data file could not be read or decoded into records
    #[error("Failed to load {}: {message}", path.display())]
    Load { path: PathBuf, message: String },

    /// Repository construction failed on a schema violation
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl AppError {
    /// Get error code string
    pub fn error_code(&self) -> &str {
        match self {
            AppError::Io(_) => "IO_ERROR",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Load { .. } => "LOAD_ERROR",
            AppError::Repository(RepositoryError::DuplicateIdentity { .. }) => "DUPLICATE_IDENTITY",
            AppError::Repository(RepositoryError::MissingOrInvalidIdentity { .. }) => {
                "MISSING_OR_INVALID_IDENTITY"
            }
        }
    }

    pub fn load(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        AppError::Load {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Conversion from serde_json::Error
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Conversion from config::ConfigError
impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Configuration(err.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, AppError>;
