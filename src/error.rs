use crate::services::storage::StorageError;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Request-level failures of the upload relay. Converting to a `Response`
/// is the only way a reply leaves the handler, so exactly one response is
/// produced per request.
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("No file uploaded.")]
    NoFile,

    #[error("{0}")]
    Multipart(#[from] MultipartError),

    #[error("{0}")]
    Staging(#[from] std::io::Error),

    #[error("{0}")]
    Storage(#[from] StorageError),
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            UploadError::NoFile => (StatusCode::BAD_REQUEST, "No file uploaded.".to_string()),
            UploadError::Multipart(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            UploadError::Staging(e) => {
                tracing::error!("staging error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            UploadError::Storage(e) => {
                tracing::error!("storage write failed: {}", e);
                // The raw backend message is the response body; this is a
                // demo-grade surface, not a production contract.
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };

        (status, message).into_response()
    }
}
