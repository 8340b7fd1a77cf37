//! Multipart form helpers shared by the upload handlers.

use axum::extract::Multipart;
use mediarelay_core::AppError;

/// A file field captured from a multipart request body.
#[derive(Debug)]
pub struct IncomingFile {
    pub data: Vec<u8>,
    pub filename: Option<String>,
    pub content_type: Option<String>,
}

/// Extract the named file field from a multipart form.
///
/// Returns `Ok(None)` when the field is absent so the caller can raise the
/// kind-specific missing-file error. A repeated field is rejected; fields
/// with other names are ignored.
pub async fn extract_media_field(
    mut multipart: Multipart,
    field_name: &str,
) -> Result<Option<IncomingFile>, AppError> {
    let mut incoming: Option<IncomingFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Multipart(format!("Failed to read multipart: {}", e)))?
    {
        let name = field.name().map(|s| s.to_string()).unwrap_or_default();

        if name == field_name {
            if incoming.is_some() {
                return Err(AppError::Multipart(format!(
                    "Multiple '{}' fields are not allowed; send exactly one",
                    field_name
                )));
            }

            let filename = field.file_name().map(|s: &str| s.to_string());
            let content_type = field.content_type().map(|s: &str| s.to_string());

            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Multipart(format!("Failed to read file data: {}", e)))?;

            incoming = Some(IncomingFile {
                data: data.to_vec(),
                filename,
                content_type,
            });
        }
    }

    Ok(incoming)
}
