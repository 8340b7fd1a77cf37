//! Configuration module
//!
//! All deployment knobs for the relay live here, loaded once from the
//! environment in `Config::from_env()` and passed explicitly to the
//! components that need them. Nothing below the setup layer reads the
//! environment on its own.

use std::env;
use std::path::PathBuf;

use crate::models::MediaKind;
use crate::storage_types::StorageBackend;

// Defaults applied when the environment leaves a knob unset
const DEFAULT_PORT: u16 = 3000;
const MAX_UPLOAD_SIZE_MB: usize = 100;
const DEFAULT_REGION: &str = "auto";
const DEFAULT_FFPROBE_PATH: &str = "ffprobe";
const DEFAULT_AUDIO_EXTENSION: &str = "mp3";
const DEFAULT_VIDEO_EXTENSION: &str = "mp4";

/// Application configuration (upload relay).
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    // Storage backend selection and credentials
    pub storage_backend: StorageBackend,
    pub r2_endpoint: Option<String>,
    pub r2_access_key_id: Option<String>,
    pub r2_secret_access_key: Option<String>,
    pub r2_bucket_name: Option<String>,
    pub r2_region: String,
    /// Base URL prepended to object keys in client-facing URLs. When unset,
    /// URLs fall back to path-style `<endpoint>/<bucket>/<key>`.
    pub public_base_url: Option<String>,
    pub local_storage_path: Option<String>,
    pub local_storage_base_url: Option<String>,
    // Upload pipeline configuration
    pub max_upload_size_bytes: usize,
    pub ffprobe_path: String,
    /// Directory for transient spool files; defaults to the system temp dir.
    pub spool_dir: PathBuf,
    pub audio_default_extension: String,
    pub video_default_extension: String,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let cors_origins: Vec<String> = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();

        let storage_backend = env::var("STORAGE_BACKEND")
            .ok()
            .and_then(|s| s.parse::<StorageBackend>().ok())
            .unwrap_or(StorageBackend::S3);

        let max_upload_size_mb = env::var("MAX_UPLOAD_SIZE_MB")
            .unwrap_or_else(|_| MAX_UPLOAD_SIZE_MB.to_string())
            .parse::<usize>()
            .unwrap_or(MAX_UPLOAD_SIZE_MB);

        let spool_dir = env::var("SPOOL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| env::temp_dir());

        Ok(Config {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid port number"))?,
            cors_origins,
            storage_backend,
            r2_endpoint: env::var("R2_ENDPOINT").ok(),
            r2_access_key_id: env::var("R2_ACCESS_KEY_ID").ok(),
            r2_secret_access_key: env::var("R2_SECRET_ACCESS_KEY").ok(),
            r2_bucket_name: env::var("R2_BUCKET_NAME").ok(),
            r2_region: env::var("R2_REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string()),
            public_base_url: env::var("PUBLIC_BASE_URL").ok(),
            local_storage_path: env::var("LOCAL_STORAGE_PATH").ok(),
            local_storage_base_url: env::var("LOCAL_STORAGE_BASE_URL").ok(),
            max_upload_size_bytes: max_upload_size_mb * 1024 * 1024,
            ffprobe_path: env::var("FFPROBE_PATH")
                .unwrap_or_else(|_| DEFAULT_FFPROBE_PATH.to_string()),
            spool_dir,
            audio_default_extension: env::var("AUDIO_DEFAULT_EXTENSION")
                .unwrap_or_else(|_| DEFAULT_AUDIO_EXTENSION.to_string()),
            video_default_extension: env::var("VIDEO_DEFAULT_EXTENSION")
                .unwrap_or_else(|_| DEFAULT_VIDEO_EXTENSION.to_string()),
        })
    }

    /// Extension applied when the client filename has none.
    pub fn default_extension(&self, kind: MediaKind) -> &str {
        match kind {
            MediaKind::Audio => &self.audio_default_extension,
            MediaKind::Video => &self.video_default_extension,
        }
    }
}
