//! API handlers

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use tracing::Instrument;
use uuid::Uuid;

use crate::api::{ApiError, AppState};
use crate::types::{UploadRequest, UploadResponse, UploadedFile};
use crate::upload::publish;

/// Liveness probe; never touches the pinning provider
pub async fn health_check() -> &'static str {
    "Server Available"
}

/// Pin an uploaded file and its token metadata, returning the token URI
pub async fn upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, ApiError> {
    let multipart = multipart.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let request = parse_upload(multipart).await?;

    let upload_id = Uuid::new_v4();
    let span = tracing::info_span!("upload", %upload_id, json_name = %request.json_name);

    let token_uri = publish(state.pinning.as_ref(), &state.gateway_url, request)
        .instrument(span.clone())
        .await?;

    span.in_scope(|| tracing::info!(%token_uri, "Upload complete"));

    Ok(Json(UploadResponse { token_uri }))
}

/// Collect the form fields. Absent text fields default to empty strings and
/// only the first `file` part carrying a file name is kept.
async fn parse_upload(mut multipart: Multipart) -> Result<UploadRequest, ApiError> {
    let mut request = UploadRequest::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::invalid_form(format!("invalid multipart data: {}", e)))?
    {
        let Some(field_name) = field.name().map(str::to_string) else {
            continue;
        };

        match field_name.as_str() {
            "file" => {
                let Some(file_name) = field.file_name().map(str::to_string) else {
                    continue;
                };
                let content = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::invalid_form(format!("failed to read file: {}", e)))?;

                if request.file.is_none() {
                    request.file = Some(UploadedFile { file_name, content });
                }
            }
            "name" | "description" | "json_name" => {
                let value = field.text().await.map_err(|e| {
                    ApiError::invalid_form(format!("failed to read field '{}': {}", field_name, e))
                })?;

                match field_name.as_str() {
                    "name" => request.name = value,
                    "description" => request.description = value,
                    _ => request.json_name = value,
                }
            }
            _ => {}
        }
    }

    Ok(request)
}
