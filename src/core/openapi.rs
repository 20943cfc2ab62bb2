use utoipa::{Modify, OpenApi};

use crate::features::locations::{dtos as locations_dtos, handlers as locations_handlers};
use crate::features::locations::HierarchyStats;
use crate::features::system::{dtos as system_dtos, handlers as system_handlers};
use crate::shared::types::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Locations
        locations_handlers::list_districts,
        locations_handlers::list_counties,
        locations_handlers::list_sub_counties,
        locations_handlers::list_parishes,
        locations_handlers::list_villages,
        locations_handlers::search_districts,
        // System
        system_handlers::root,
        system_handlers::health_check,
        system_handlers::get_stats,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            HierarchyStats,
            // Locations
            locations_dtos::LocationDto,
            // System
            system_dtos::ApiInfoDto,
            system_dtos::EndpointsDto,
            system_dtos::HealthResponseDto,
            system_dtos::HealthStatus,
            system_dtos::StatsResponseDto,
        )
    ),
    tags(
        (name = "locations", description = "Administrative hierarchy lookups"),
        (name = "system", description = "Service metadata, health and statistics")
    )
)]
pub struct ApiDoc;

/// Overrides the generated info block with values from configuration
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
