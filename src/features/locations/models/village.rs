use serde::{Deserialize, Serialize};

use crate::features::locations::models::Entity;
use crate::shared::ident::deserialize_id;

/// Village model, the leaf level of the hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Village {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "parish", deserialize_with = "deserialize_id")]
    pub parish_id: String,
}

impl Entity for Village {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn parent_id(&self) -> Option<&str> {
        Some(&self.parish_id)
    }
}
