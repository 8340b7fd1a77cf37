//! Service status handler.

use axum::Json;
use mediarelay_core::ServiceStatus;

#[utoipa::path(
    get,
    path = "/",
    tag = "status",
    responses(
        (status = 200, description = "Service is running", body = ServiceStatus)
    )
)]
pub async fn service_status() -> Json<ServiceStatus> {
    Json(ServiceStatus {
        status: "R2 upload service running".to_string(),
        endpoints: vec![
            "POST /upload-audio".to_string(),
            "POST /upload-video".to_string(),
        ],
    })
}
