//! OpenAPI schema for the RapiDoc viewer at /docs.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use mediarelay_core::models;

/// Returns the OpenAPI spec served at /api/openapi.json.
pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mediarelay API",
        version = "0.1.0",
        description = "Media upload relay with R2-compatible object storage. Accepts audio and video files over multipart/form-data and returns the public URL of the stored object."
    ),
    paths(
        handlers::status::service_status,
        handlers::upload::upload_audio,
        handlers::upload::upload_video,
    ),
    components(
        schemas(
            models::ServiceStatus,
            models::UploadResponse,
            error::ErrorResponse,
        )
    ),
    tags(
        (name = "status", description = "Service health and endpoint discovery"),
        (name = "uploads", description = "Audio and video upload operations")
    )
)]
pub struct ApiDoc;
