pub mod config;
pub mod error;
pub mod handlers;
pub mod infrastructure;
pub mod services;

use crate::config::AppConfig;
use crate::services::storage::ObjectStorage;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn ObjectStorage>,
    pub config: AppConfig,
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::upload::serve_form))
        .route("/upload", post(handlers::upload::upload))
        // Uploads are not size-limited; axum's 2 MB default would reject
        // anything larger before the handler runs.
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}
