use crate::{LocalStorage, S3Storage, S3StorageConfig, Storage, StorageBackend, StorageError, StorageResult};
use mediarelay_core::Config;
use std::sync::Arc;

/// Build the storage backend selected by `STORAGE_BACKEND`.
pub async fn create_storage(config: &Config) -> StorageResult<Arc<dyn Storage>> {
    match config.storage_backend {
        StorageBackend::S3 => {
            let bucket = config.r2_bucket_name.clone().ok_or_else(|| {
                StorageError::ConfigError("R2_BUCKET_NAME not configured".to_string())
            })?;
            let endpoint = config.r2_endpoint.clone().ok_or_else(|| {
                StorageError::ConfigError("R2_ENDPOINT not configured".to_string())
            })?;
            let access_key_id = config.r2_access_key_id.clone().ok_or_else(|| {
                StorageError::ConfigError("R2_ACCESS_KEY_ID not configured".to_string())
            })?;
            let secret_access_key = config.r2_secret_access_key.clone().ok_or_else(|| {
                StorageError::ConfigError("R2_SECRET_ACCESS_KEY not configured".to_string())
            })?;

            let storage = S3Storage::new(S3StorageConfig {
                bucket,
                region: config.r2_region.clone(),
                endpoint,
                access_key_id,
                secret_access_key,
                public_base_url: config.public_base_url.clone(),
            })
            .await?;
            Ok(Arc::new(storage))
        }

        StorageBackend::Local => {
            let base_path = config.local_storage_path.clone().ok_or_else(|| {
                StorageError::ConfigError("LOCAL_STORAGE_PATH not configured".to_string())
            })?;
            let base_url = config.local_storage_base_url.clone().ok_or_else(|| {
                StorageError::ConfigError("LOCAL_STORAGE_BASE_URL not configured".to_string())
            })?;

            let storage = LocalStorage::new(base_path, base_url).await?;
            Ok(Arc::new(storage))
        }
    }
}
