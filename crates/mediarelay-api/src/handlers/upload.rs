//! Upload handlers for the two media kinds.
//!
//! Both routes run the same pipeline; the media kind picks the multipart
//! field name, key prefix, and response shape.

use axum::{
    extract::{Multipart, State},
    Json,
};
use mediarelay_core::{MediaKind, UploadResponse};
use std::sync::Arc;

use crate::error::{ErrorResponse, HttpAppError};
use crate::services::upload::UploadService;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/upload-audio",
    tag = "uploads",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Audio uploaded successfully", body = UploadResponse),
        (status = 400, description = "No audio file uploaded", body = ErrorResponse),
        (status = 413, description = "File too large"),
        (status = 500, description = "Upload failed", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "upload_audio"))]
pub async fn upload_audio(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, HttpAppError> {
    upload_media(MediaKind::Audio, state, multipart).await
}

#[utoipa::path(
    post,
    path = "/upload-video",
    tag = "uploads",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Video uploaded successfully", body = UploadResponse),
        (status = 400, description = "No video file uploaded", body = ErrorResponse),
        (status = 413, description = "File too large"),
        (status = 500, description = "Upload failed", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "upload_video"))]
pub async fn upload_video(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, HttpAppError> {
    upload_media(MediaKind::Video, state, multipart).await
}

async fn upload_media(
    kind: MediaKind,
    state: Arc<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, HttpAppError> {
    let stored = UploadService::new(state)
        .upload(kind, multipart)
        .await
        .map_err(HttpAppError::from)?;

    Ok(Json(UploadResponse::from(stored)))
}
