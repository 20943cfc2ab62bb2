use serde::{Deserialize, Serialize};

use crate::features::locations::models::Entity;
use crate::shared::ident::deserialize_id;

/// Parish model, keyed to its parent sub-county
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Parish {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "subcounty", deserialize_with = "deserialize_id")]
    pub subcounty_id: String,
}

impl Entity for Parish {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn parent_id(&self) -> Option<&str> {
        Some(&self.subcounty_id)
    }
}
