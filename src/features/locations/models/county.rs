use serde::{Deserialize, Serialize};

use crate::features::locations::models::Entity;
use crate::shared::ident::deserialize_id;

/// County model, keyed to its parent district
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct County {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "district", deserialize_with = "deserialize_id")]
    pub district_id: String,
}

impl Entity for County {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn parent_id(&self) -> Option<&str> {
        Some(&self.district_id)
    }
}
