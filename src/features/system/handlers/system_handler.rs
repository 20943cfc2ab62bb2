use std::sync::Arc;

use axum::{extract::State, Json};

use crate::features::system::dtos::{ApiInfoDto, HealthResponseDto, StatsResponseDto};
use crate::features::system::services::SystemService;

/// API information and route index
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "API metadata", body = ApiInfoDto)
    ),
    tag = "system"
)]
pub async fn root(State(service): State<Arc<SystemService>>) -> Json<ApiInfoDto> {
    Json(service.info())
}

/// Health check with data validation
///
/// Always answers 200; `status` is `unhealthy` when any level of the
/// hierarchy is empty.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health", body = HealthResponseDto)
    ),
    tag = "system"
)]
pub async fn health_check(State(service): State<Arc<SystemService>>) -> Json<HealthResponseDto> {
    Json(service.health())
}

/// Dataset statistics
#[utoipa::path(
    get,
    path = "/stats",
    responses(
        (status = 200, description = "Entity counts per level", body = StatsResponseDto)
    ),
    tag = "system"
)]
pub async fn get_stats(State(service): State<Arc<SystemService>>) -> Json<StatsResponseDto> {
    Json(service.stats())
}
