use crate::config::AppConfig;
use crate::services::storage::{GcsStorage, ObjectStorage};
use anyhow::Context;
use object_store::gcp::GoogleCloudStorageBuilder;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Where the storage client gets its key material from. Resolved once at
/// startup; credential failures abort the process rather than surfacing
/// per request.
#[derive(Debug, PartialEq, Eq)]
pub enum CredentialSource {
    /// Inline service-account JSON from `GCLOUD_CREDENTIALS_JSON`
    InlineJson(String),

    /// Key file named by `GOOGLE_APPLICATION_CREDENTIALS`
    KeyFile(PathBuf),

    /// Ambient credentials of the hosting environment (Cloud Run, GCE)
    Ambient,
}

impl CredentialSource {
    /// Fixed priority order: inline JSON wins over a key-file path, which
    /// wins over ambient credentials. Empty values count as unset.
    pub fn select(inline_json: Option<String>, key_file: Option<String>) -> Self {
        match (inline_json, key_file) {
            (Some(json), _) if !json.is_empty() => Self::InlineJson(json),
            (_, Some(path)) if !path.is_empty() => Self::KeyFile(PathBuf::from(path)),
            _ => Self::Ambient,
        }
    }

    pub fn from_env() -> Self {
        Self::select(
            env::var("GCLOUD_CREDENTIALS_JSON").ok(),
            env::var("GOOGLE_APPLICATION_CREDENTIALS").ok(),
        )
    }
}

/// Build the process-wide storage handle for the configured bucket.
pub fn setup_storage(config: &AppConfig) -> anyhow::Result<Arc<dyn ObjectStorage>> {
    let mut builder = GoogleCloudStorageBuilder::new().with_bucket_name(&config.bucket_name);

    match CredentialSource::from_env() {
        CredentialSource::InlineJson(json) => {
            // Fail fast on malformed credentials; there is no fallback
            // once this variable is set.
            serde_json::from_str::<serde_json::Value>(&json)
                .context("GCLOUD_CREDENTIALS_JSON is not valid JSON")?;
            info!("☁️  Cloud Storage: inline credentials (Bucket: {})", config.bucket_name);
            builder = builder.with_service_account_key(json);
        }
        CredentialSource::KeyFile(path) => {
            info!(
                "☁️  Cloud Storage: key file {} (Bucket: {})",
                path.display(),
                config.bucket_name
            );
            builder = builder.with_service_account_path(path.to_string_lossy());
        }
        CredentialSource::Ambient => {
            info!("☁️  Cloud Storage: ambient credentials (Bucket: {})", config.bucket_name);
        }
    }

    let store = builder
        .build()
        .context("failed to construct Cloud Storage client")?;

    Ok(Arc::new(GcsStorage::new(
        Arc::new(store),
        config.bucket_name.clone(),
    )))
}
