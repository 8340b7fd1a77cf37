//! Storage test doubles.

use async_trait::async_trait;
use mediarelay_core::StorageBackend;
use mediarelay_storage::{Storage, StorageError, StorageResult};
use std::sync::Mutex;

/// Storage backend that fails every upload.
pub struct FailingStorage;

#[async_trait]
impl Storage for FailingStorage {
    async fn upload(
        &self,
        _key: &str,
        _data: Vec<u8>,
        _content_type: &str,
    ) -> StorageResult<String> {
        Err(StorageError::UploadFailed(
            "simulated bucket outage".to_string(),
        ))
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}

/// One upload captured by [RecordingStorage].
pub struct UploadRecord {
    pub key: String,
    pub size: usize,
    pub content_type: String,
}

/// Storage backend that records uploads in memory instead of persisting them.
#[derive(Default)]
pub struct RecordingStorage {
    pub uploads: Mutex<Vec<UploadRecord>>,
}

#[async_trait]
impl Storage for RecordingStorage {
    async fn upload(&self, key: &str, data: Vec<u8>, content_type: &str) -> StorageResult<String> {
        self.uploads.lock().unwrap().push(UploadRecord {
            key: key.to_string(),
            size: data.len(),
            content_type: content_type.to_string(),
        });
        Ok(format!("http://localhost:3000/media/{}", key))
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}
