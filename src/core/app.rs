use std::sync::Arc;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::SwaggerConfig;
use crate::core::error::AppError;
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::locations::{routes as locations_routes, LocationService};
use crate::features::system::{routes as system_routes, SystemService};

/// Shared services handed to the feature routers
pub struct AppServices {
    pub locations: Arc<LocationService>,
    pub system: Arc<SystemService>,
}

async fn route_not_found() -> AppError {
    AppError::NotFound("Not Found".to_string())
}

/// Assemble the full application router with docs and the HTTP middleware stack
pub fn build_router(
    services: AppServices,
    swagger: &SwaggerConfig,
    cors_allowed_origins: Vec<String>,
) -> Router {
    let swagger_modifier = SwaggerInfoModifier {
        title: swagger.title.clone(),
        version: swagger.version.clone(),
        description: swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .merge(locations_routes::routes(services.locations))
        .merge(system_routes::routes(services.system))
        .fallback(route_not_found)
        .layer(
            ServiceBuilder::new()
                // Generate X-Request-Id using UUID v7 (or use client-provided one)
                .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(middleware::MakeSpanWithRequestId)
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                // Propagate X-Request-Id to response headers
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(middleware::cors_layer(cors_allowed_origins)),
        )
}
