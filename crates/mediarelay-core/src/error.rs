//! Failure taxonomy for the upload pipeline.
//!
//! Every pipeline failure is an `AppError` variant carrying its HTTP
//! status, client-facing message, and log severity; the api crate wraps
//! this into an `IntoResponse` type.

use std::io;

use crate::models::MediaKind;

/// Severity at which an error is logged at the HTTP boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Expected client mistakes, e.g. a missing file field.
    Debug,
    /// Suspicious but recoverable conditions.
    Warn,
    /// Unexpected failures.
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No {0} file uploaded")]
    MissingFile(MediaKind),

    #[error("Multipart error: {0}")]
    Multipart(String),

    #[error("Storage error: {0}")]
    Transfer(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl AppError {
    pub fn http_status_code(&self) -> u16 {
        match self {
            AppError::MissingFile(_) => 400,
            AppError::Multipart(_) | AppError::Transfer(_) | AppError::Io(_) => 500,
        }
    }

    /// Client-facing message (may differ from the internal error message)
    pub fn client_message(&self) -> String {
        match self {
            AppError::MissingFile(kind) => format!("No {} file uploaded", kind),
            AppError::Multipart(_) | AppError::Transfer(_) | AppError::Io(_) => {
                "Upload failed".to_string()
            }
        }
    }

    /// Underlying failure text exposed in the `details` field of 500 responses.
    pub fn details(&self) -> Option<String> {
        match self {
            AppError::MissingFile(_) => None,
            AppError::Multipart(message) | AppError::Transfer(message) => Some(message.clone()),
            AppError::Io(err) => Some(err.to_string()),
        }
    }

    pub fn log_level(&self) -> LogLevel {
        match self {
            AppError::MissingFile(_) => LogLevel::Debug,
            AppError::Multipart(_) => LogLevel::Warn,
            AppError::Transfer(_) | AppError::Io(_) => LogLevel::Error,
        }
    }
}
