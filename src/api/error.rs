//! HTTP error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::upload::UploadError;

pub const MISSING_FILE_MESSAGE: &str = "file not found";
pub const IMAGE_UPLOAD_MESSAGE: &str = "error uploading image to pinning service";
pub const METADATA_UPLOAD_MESSAGE: &str = "error uploading metadata to pinning service";

/// Error returned to HTTP callers as `{"message": ...}`
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }

    /// Unreadable multipart form; logged since the handler returns early
    pub fn invalid_form(msg: impl Into<String>) -> Self {
        let message = msg.into();
        tracing::warn!(error = %message, "Invalid upload request");
        Self::bad_request(message)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.into(),
        }
    }
}

impl From<UploadError> for ApiError {
    fn from(err: UploadError) -> Self {
        match err {
            UploadError::MissingFile => {
                tracing::warn!("Upload rejected: no file part");
                Self::bad_request(MISSING_FILE_MESSAGE)
            }
            UploadError::Image(source) => {
                tracing::error!(error = %source, "Failed to pin image");
                Self::internal(IMAGE_UPLOAD_MESSAGE)
            }
            UploadError::Metadata(source) => {
                tracing::error!(error = %source, "Failed to pin metadata");
                Self::internal(METADATA_UPLOAD_MESSAGE)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({
            "message": self.message,
        }));
        (self.status, body).into_response()
    }
}
