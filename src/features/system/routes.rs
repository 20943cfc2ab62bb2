use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::system::handlers;
use crate::features::system::services::SystemService;

/// Create routes for the system feature
pub fn routes(service: Arc<SystemService>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/stats", get(handlers::get_stats))
        .with_state(service)
}
