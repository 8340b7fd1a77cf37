//! Domain models for the upload relay.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The two media kinds this service relays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Audio,
    Video,
}

impl MediaKind {
    /// Multipart field name clients must use for this kind.
    pub fn field_name(&self) -> &'static str {
        self.as_str()
    }

    /// Leading path segment of generated object keys.
    pub fn key_prefix(&self) -> &'static str {
        self.as_str()
    }

    /// Content type sent to the object store when the client declares none.
    pub fn fallback_content_type(&self) -> &'static str {
        match self {
            MediaKind::Audio => "audio/mpeg",
            MediaKind::Video => "video/mp4",
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Audio => "audio",
            MediaKind::Video => "video",
        }
    }
}

impl Display for MediaKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// Descriptor of a completed transfer into the object store.
#[derive(Debug, Clone)]
pub struct StoredObject {
    pub kind: MediaKind,
    /// Object key; doubles as the client-visible filename.
    pub key: String,
    pub url: String,
    pub size: u64,
    /// Probed duration in seconds. Audio only; `None` when probing failed.
    pub duration: Option<f64>,
}

/// Response body for a successful upload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadResponse {
    pub success: bool,
    pub url: String,
    /// Alias of `url`, present only for audio uploads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    pub filename: String,
    pub size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

impl From<StoredObject> for UploadResponse {
    fn from(stored: StoredObject) -> Self {
        // audio_url and duration are part of the audio contract only
        let (audio_url, duration) = match stored.kind {
            MediaKind::Audio => (Some(stored.url.clone()), stored.duration),
            MediaKind::Video => (None, None),
        };
        UploadResponse {
            success: true,
            url: stored.url,
            audio_url,
            filename: stored.key,
            size: stored.size,
            duration,
        }
    }
}

/// Response body for the service status route.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceStatus {
    pub status: String,
    pub endpoints: Vec<String>,
}
