use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::features::locations::dtos::LocationDto;
use crate::features::locations::models::Level;
use crate::features::locations::services::LocationService;
use crate::shared::types::ErrorResponse;

/// List all districts
#[utoipa::path(
    get,
    path = "/districts",
    responses(
        (status = 200, description = "List of districts", body = Vec<LocationDto>)
    ),
    tag = "locations"
)]
pub async fn list_districts(
    State(service): State<Arc<LocationService>>,
) -> Json<Vec<LocationDto>> {
    Json(service.list_districts())
}

/// List counties in a district
#[utoipa::path(
    get,
    path = "/counties/{district_id}",
    params(
        ("district_id" = String, Path, description = "District id")
    ),
    responses(
        (status = 200, description = "Counties in the district", body = Vec<LocationDto>),
        (status = 404, description = "District not found", body = ErrorResponse)
    ),
    tag = "locations"
)]
pub async fn list_counties(
    State(service): State<Arc<LocationService>>,
    Path(district_id): Path<String>,
) -> Result<Json<Vec<LocationDto>>> {
    let counties = service.list_children(Level::County, &district_id)?;
    Ok(Json(counties))
}

/// List sub-counties in a county
#[utoipa::path(
    get,
    path = "/sub-counties/{county_id}",
    params(
        ("county_id" = String, Path, description = "County id")
    ),
    responses(
        (status = 200, description = "Sub-counties in the county", body = Vec<LocationDto>),
        (status = 404, description = "County not found or has no sub-counties", body = ErrorResponse)
    ),
    tag = "locations"
)]
pub async fn list_sub_counties(
    State(service): State<Arc<LocationService>>,
    Path(county_id): Path<String>,
) -> Result<Json<Vec<LocationDto>>> {
    let sub_counties = service.list_children(Level::SubCounty, &county_id)?;
    Ok(Json(sub_counties))
}

/// List parishes in a sub-county
#[utoipa::path(
    get,
    path = "/parishes/{sub_county_id}",
    params(
        ("sub_county_id" = String, Path, description = "Sub-county id")
    ),
    responses(
        (status = 200, description = "Parishes in the sub-county", body = Vec<LocationDto>),
        (status = 404, description = "Sub-county not found or has no parishes", body = ErrorResponse)
    ),
    tag = "locations"
)]
pub async fn list_parishes(
    State(service): State<Arc<LocationService>>,
    Path(sub_county_id): Path<String>,
) -> Result<Json<Vec<LocationDto>>> {
    let parishes = service.list_children(Level::Parish, &sub_county_id)?;
    Ok(Json(parishes))
}

/// List villages in a parish
#[utoipa::path(
    get,
    path = "/villages/{parish_id}",
    params(
        ("parish_id" = String, Path, description = "Parish id")
    ),
    responses(
        (status = 200, description = "Villages in the parish", body = Vec<LocationDto>),
        (status = 404, description = "Parish not found or has no villages", body = ErrorResponse)
    ),
    tag = "locations"
)]
pub async fn list_villages(
    State(service): State<Arc<LocationService>>,
    Path(parish_id): Path<String>,
) -> Result<Json<Vec<LocationDto>>> {
    let villages = service.list_children(Level::Village, &parish_id)?;
    Ok(Json(villages))
}

/// Search districts by name (case-insensitive, partial match)
#[utoipa::path(
    get,
    path = "/search/districts/{query}",
    params(
        ("query" = String, Path, description = "Part of a district name")
    ),
    responses(
        (status = 200, description = "Districts whose name contains the query", body = Vec<LocationDto>),
        (status = 404, description = "No district matches", body = ErrorResponse)
    ),
    tag = "locations"
)]
pub async fn search_districts(
    State(service): State<Arc<LocationService>>,
    Path(query): Path<String>,
) -> Result<Json<Vec<LocationDto>>> {
    let districts = service.search_districts(&query)?;
    Ok(Json(districts))
}
