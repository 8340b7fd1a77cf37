//! The [`Storage`] trait that every backend implements.

use crate::StorageBackend;
use async_trait::async_trait;
use thiserror::Error;

/// Errors produced by storage backends.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Object storage behind the upload pipeline.
///
/// The pipeline only ever talks to this trait, so S3 and the local
/// filesystem backend are interchangeable at runtime.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Write `data` under `key` with the given content type and return
    /// the public URL of the stored object.
    async fn upload(&self, key: &str, data: Vec<u8>, content_type: &str)
        -> StorageResult<String>;

    /// Which backend this implementation talks to.
    fn backend_type(&self) -> StorageBackend;
}
