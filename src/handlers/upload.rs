use crate::AppState;
use crate::error::UploadError;
use axum::extract::{Multipart, State};
use axum::response::Html;
use bytes::Bytes;
use tokio::io::AsyncWriteExt;
use tracing::info;

/// The static upload form. No templating, no caching headers.
const FORM_PAGE: &str = "<form action=\"/upload\" method=\"post\" enctype=\"multipart/form-data\">\
<input type=\"file\" name=\"file\" />\
<button type=\"submit\">Upload</button>\
</form>";

pub async fn serve_form() -> Html<&'static str> {
    Html(FORM_PAGE)
}

/// Relay one multipart upload to the bucket.
///
/// The first field named `file` is the upload; its filename becomes the
/// object key verbatim, so a second upload under the same name silently
/// overwrites the first. Requests without a `file` field get a 400;
/// storage failures surface as a 500 carrying the backend's message.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<&'static str, UploadError> {
    while let Some(mut field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        // Parts without a filename are plain text fields, not uploads.
        let Some(filename) = field.file_name().map(|s| s.to_string()) else {
            continue;
        };
        let content_type = field.content_type().map(|s| s.to_string());

        // Stage to a scoped temp file; RAII removes it on every exit
        // path, success or failure.
        let tmp = tempfile::NamedTempFile::new()?;
        let mut staged = tokio::fs::File::from_std(tmp.reopen()?);
        let mut size: u64 = 0;
        while let Some(chunk) = field.chunk().await? {
            size += chunk.len() as u64;
            staged.write_all(&chunk).await?;
        }
        staged.flush().await?;

        let data = tokio::fs::read(tmp.path()).await?;
        state.storage.put_object(&filename, Bytes::from(data)).await?;

        info!(
            filename = %filename,
            size,
            content_type = content_type.as_deref().unwrap_or("unknown"),
            bucket = %state.config.bucket_name,
            "relayed upload to bucket"
        );
        return Ok("File uploaded to Cloud Storage!");
    }

    Err(UploadError::NoFile)
}
