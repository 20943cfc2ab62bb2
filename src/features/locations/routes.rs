use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::locations::handlers;
use crate::features::locations::services::LocationService;

/// Create routes for the locations feature
pub fn routes(service: Arc<LocationService>) -> Router {
    Router::new()
        .route("/districts", get(handlers::list_districts))
        .route("/counties/{district_id}", get(handlers::list_counties))
        .route("/sub-counties/{county_id}", get(handlers::list_sub_counties))
        .route("/parishes/{sub_county_id}", get(handlers::list_parishes))
        .route("/villages/{parish_id}", get(handlers::list_villages))
        .route("/search/districts/{query}", get(handlers::search_districts))
        .with_state(service)
}
