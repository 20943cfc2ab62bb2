use serde::{Deserialize, Serialize};

use crate::features::locations::models::Entity;
use crate::shared::ident::deserialize_id;

/// Sub-county model, keyed to its parent county
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SubCounty {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "county", deserialize_with = "deserialize_id")]
    pub county_id: String,
}

impl Entity for SubCounty {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn parent_id(&self) -> Option<&str> {
        Some(&self.county_id)
    }
}
