//! Builders for in-process test servers backed by throwaway storage.
//!
//! Run from the workspace root with `cargo test -p mediarelay-api`.

pub mod storage;

use axum_test::TestServer;
use mediarelay_api::setup::routes;
use mediarelay_api::state::AppState;
use mediarelay_api::MediaProbe;
use mediarelay_core::{Config, StorageBackend};
use mediarelay_storage::{LocalStorage, Storage};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Test application: server plus the temp directories backing it.
pub struct TestApp {
    pub server: TestServer,
    pub storage_dir: TempDir,
    pub spool_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Filesystem path of a stored object inside the local backend.
    pub fn stored_path(&self, key: &str) -> PathBuf {
        self.storage_dir.path().join(key)
    }

    /// Number of files currently sitting in the spool directory.
    pub fn spool_file_count(&self) -> usize {
        std::fs::read_dir(self.spool_dir.path())
            .map(|entries| entries.count())
            .unwrap_or(0)
    }
}

/// Setup test app with local storage in a temp directory.
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with_limit(100 * 1024 * 1024).await
}

/// Setup test app with a specific request body size limit.
pub async fn setup_test_app_with_limit(max_upload_size_bytes: usize) -> TestApp {
    let storage_dir = tempfile::tempdir().expect("Failed to create storage directory");

    let storage: Arc<dyn Storage> = Arc::new(
        LocalStorage::new(
            storage_dir.path(),
            "http://localhost:3000/media".to_string(),
        )
        .await
        .expect("Failed to create local storage"),
    );

    build_app(storage, storage_dir, max_upload_size_bytes).await
}

/// Setup test app whose storage backend fails every upload.
pub async fn setup_failing_app() -> TestApp {
    let storage_dir = tempfile::tempdir().expect("Failed to create storage directory");
    let storage: Arc<dyn Storage> = Arc::new(storage::FailingStorage);
    build_app(storage, storage_dir, 100 * 1024 * 1024).await
}

/// Setup test app whose storage backend records uploads in memory.
pub async fn setup_recording_app() -> (TestApp, Arc<storage::RecordingStorage>) {
    let storage_dir = tempfile::tempdir().expect("Failed to create storage directory");
    let recorder = Arc::new(storage::RecordingStorage::default());
    let app = build_app(recorder.clone(), storage_dir, 100 * 1024 * 1024).await;
    (app, recorder)
}

async fn build_app(
    storage: Arc<dyn Storage>,
    storage_dir: TempDir,
    max_upload_size_bytes: usize,
) -> TestApp {
    let spool_dir = tempfile::tempdir().expect("Failed to create spool directory");

    let config = create_test_config(spool_dir.path().to_path_buf(), max_upload_size_bytes);
    let state = Arc::new(AppState {
        config: config.clone(),
        storage,
        // The probe binary never exists in tests; uploads must still succeed,
        // just without a duration.
        probe: MediaProbe::new("/nonexistent/ffprobe".to_string()),
    });

    let app = routes::setup_routes(&config, state).expect("Failed to setup routes");
    let server = TestServer::new(app.into_make_service()).expect("Failed to create test server");

    TestApp {
        server,
        storage_dir,
        spool_dir,
    }
}

fn create_test_config(spool_dir: PathBuf, max_upload_size_bytes: usize) -> Config {
    Config {
        server_port: 3000,
        cors_origins: vec!["*".to_string()],
        storage_backend: StorageBackend::Local,
        r2_endpoint: None,
        r2_access_key_id: None,
        r2_secret_access_key: None,
        r2_bucket_name: None,
        r2_region: "auto".to_string(),
        public_base_url: None,
        local_storage_path: None,
        local_storage_base_url: None,
        max_upload_size_bytes,
        ffprobe_path: "/nonexistent/ffprobe".to_string(),
        spool_dir,
        audio_default_extension: "mp3".to_string(),
        video_default_extension: "mp4".to_string(),
    }
}
