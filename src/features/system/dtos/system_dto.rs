use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::features::locations::HierarchyStats;

/// Route templates advertised by the index document
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EndpointsDto {
    pub districts: &'static str,
    pub counties: &'static str,
    pub sub_counties: &'static str,
    pub parishes: &'static str,
    pub villages: &'static str,
    pub search_districts: &'static str,
    pub health: &'static str,
    pub stats: &'static str,
    pub docs: &'static str,
}

impl Default for EndpointsDto {
    fn default() -> Self {
        Self {
            districts: "/districts",
            counties: "/counties/{district_id}",
            sub_counties: "/sub-counties/{county_id}",
            parishes: "/parishes/{sub_county_id}",
            villages: "/villages/{parish_id}",
            search_districts: "/search/districts/{query}",
            health: "/health",
            stats: "/stats",
            docs: "/swagger-ui/",
        }
    }
}

/// Response for `GET /`
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ApiInfoDto {
    pub message: String,
    pub description: String,
    pub version: String,
    pub data_source: String,
    pub endpoints: EndpointsDto,
    pub stats: HierarchyStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Response for `GET /health`
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthResponseDto {
    pub status: HealthStatus,
    pub message: String,
    /// True when every level of the hierarchy holds at least one entity
    pub data_loaded: bool,
    pub stats: HierarchyStats,
}

/// Response for `GET /stats`
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StatsResponseDto {
    pub dataset: String,
    pub source: String,
    pub stats: HierarchyStats,
    pub loaded_at: DateTime<Utc>,
}
