use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::locations::models::District;
use crate::features::locations::store::EntityRef;

/// Response DTO for any hierarchy entity; parent references are stripped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LocationDto {
    #[schema(example = "42")]
    pub id: String,
    #[schema(example = "Gulu")]
    pub name: String,
}

impl From<EntityRef<'_>> for LocationDto {
    fn from(entity: EntityRef<'_>) -> Self {
        Self {
            id: entity.id.to_string(),
            name: entity.name.to_string(),
        }
    }
}

impl From<&District> for LocationDto {
    fn from(district: &District) -> Self {
        Self {
            id: district.id.clone(),
            name: district.name.clone(),
        }
    }
}
