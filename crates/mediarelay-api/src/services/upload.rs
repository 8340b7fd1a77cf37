//! The upload pipeline: extract, spool, probe, key, transfer.

use std::path::Path;
use std::sync::Arc;

use axum::extract::Multipart;
use mediarelay_core::{keys, AppError, MediaKind, StoredObject};
use tempfile::NamedTempFile;

use crate::state::AppState;
use crate::utils::upload::{extract_media_field, IncomingFile};

/// Transient on-disk copy of an upload.
///
/// The file is removed when this guard drops, whichever way the pipeline
/// exits. Removal errors are logged and never override the response.
struct SpoolFile {
    file: NamedTempFile,
}

impl SpoolFile {
    async fn write(dir: &Path, data: &[u8]) -> Result<Self, AppError> {
        let file = NamedTempFile::new_in(dir)?;
        tokio::fs::write(file.path(), data).await?;
        Ok(SpoolFile { file })
    }

    fn path(&self) -> &Path {
        self.file.path()
    }
}

impl Drop for SpoolFile {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(self.file.path()) {
            tracing::warn!(
                error = %e,
                path = %self.file.path().display(),
                "Failed to remove spool file"
            );
        }
    }
}

/// Coordinates the upload pipeline for both media kinds.
pub struct UploadService {
    state: Arc<AppState>,
}

impl UploadService {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// Run the full pipeline for one multipart request.
    #[tracing::instrument(skip(self, multipart), fields(kind = %kind))]
    pub async fn upload(
        &self,
        kind: MediaKind,
        multipart: Multipart,
    ) -> Result<StoredObject, AppError> {
        let IncomingFile {
            data,
            filename,
            content_type,
        } = extract_media_field(multipart, kind.field_name())
            .await?
            .ok_or(AppError::MissingFile(kind))?;

        let size = data.len() as u64;

        // Audio is spooled to disk for the ffprobe pass; the spool file
        // lives until the transfer attempt resolves.
        let spool = match kind {
            MediaKind::Audio => {
                Some(SpoolFile::write(&self.state.config.spool_dir, &data).await?)
            }
            MediaKind::Video => None,
        };

        let duration = match &spool {
            Some(file) => self.state.probe.duration_seconds(file.path()).await,
            None => None,
        };

        let key = keys::object_key(
            kind,
            filename.as_deref(),
            self.state.config.default_extension(kind),
        );
        let content_type =
            content_type.unwrap_or_else(|| kind.fallback_content_type().to_string());

        let url = self
            .state
            .storage
            .upload(&key, data, &content_type)
            .await
            .map_err(|e| AppError::Transfer(e.to_string()))?;

        drop(spool);

        tracing::info!(
            key = %key,
            size_bytes = size,
            duration = ?duration,
            "Upload relayed to storage"
        );

        Ok(StoredObject {
            kind,
            key,
            url,
            size,
            duration,
        })
    }
}
