use crate::traits::{Storage, StorageError, StorageResult};
use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use object_store::aws::{AmazonS3, AmazonS3Builder};
use object_store::path::Path;
use object_store::{Attribute, Attributes, ObjectStore, PutOptions, PutPayload};

/// Settings for an S3-compatible backend.
///
/// Credentials are passed in explicitly; this type never reads the
/// environment itself.
#[derive(Clone, Debug)]
pub struct S3StorageConfig {
    pub bucket: String,
    /// Region identifier; S3-compatible providers like R2 use `"auto"`.
    pub region: String,
    /// Endpoint URL, e.g. `https://<account>.r2.cloudflarestorage.com`.
    pub endpoint: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    /// Base URL for client-facing object URLs (e.g. a CDN domain). When
    /// unset, URLs use path-style `<endpoint>/<bucket>/<key>`.
    pub public_base_url: Option<String>,
}

/// S3-compatible object storage backend.
#[derive(Clone)]
pub struct S3Storage {
    store: AmazonS3,
    bucket: String,
    endpoint_url: String,
    public_base_url: Option<String>,
}

impl S3Storage {
    /// Connect to the bucket described by `config`.
    pub async fn new(config: S3StorageConfig) -> StorageResult<Self> {
        // Plain-http endpoints only show up with local S3 emulators.
        let allow_http = config.endpoint.starts_with("http://");

        let store = AmazonS3Builder::new()
            .with_region(config.region.clone())
            .with_bucket_name(config.bucket.clone())
            .with_endpoint(config.endpoint.clone())
            .with_allow_http(allow_http)
            .with_access_key_id(config.access_key_id)
            .with_secret_access_key(config.secret_access_key)
            .build()
            .map_err(|e| StorageError::ConfigError(e.to_string()))?;

        Ok(S3Storage {
            store,
            bucket: config.bucket,
            endpoint_url: config.endpoint,
            public_base_url: config.public_base_url,
        })
    }

    /// Client-facing URL of an object.
    ///
    /// Prefers the configured public base URL (CDN / custom domain);
    /// otherwise falls back to path-style `{endpoint}/{bucket}/{key}`.
    fn generate_url(&self, key: &str) -> String {
        if let Some(ref base) = self.public_base_url {
            format!("{}/{}", base.trim_end_matches('/'), key)
        } else {
            let base_url = self.endpoint_url.trim_end_matches('/');
            format!("{}/{}/{}", base_url, self.bucket, key)
        }
    }
}

#[async_trait]
impl Storage for S3Storage {
    async fn upload(
        &self,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> StorageResult<String> {
        let start = std::time::Instant::now();
        let size = data.len() as u64;

        let mut attributes = Attributes::new();
        attributes.insert(Attribute::ContentType, content_type.to_string().into());
        let options = PutOptions {
            attributes,
            ..Default::default()
        };

        let location = Path::from(key.to_string());
        let result = self
            .store
            .put_opts(&location, PutPayload::from(Bytes::from(data)), options)
            .await;

        let duration = start.elapsed().as_secs_f64();

        match result {
            Ok(_) => {
                let url = self.generate_url(key);
                tracing::info!(
                    bucket = %self.bucket,
                    key = %key,
                    content_type = %content_type,
                    size_bytes = size,
                    duration_ms = duration * 1000.0,
                    "Uploaded object to S3"
                );
                Ok(url)
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    bucket = %self.bucket,
                    key = %key,
                    size_bytes = size,
                    duration_ms = duration * 1000.0,
                    "S3 put request failed"
                );
                Err(StorageError::UploadFailed(e.to_string()))
            }
        }
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::S3
    }
}
