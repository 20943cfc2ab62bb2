use serde::{Deserialize, Serialize};

use crate::features::locations::models::Entity;
use crate::shared::ident::deserialize_id;

/// District model, the top level of the Uganda hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct District {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
}

impl Entity for District {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn parent_id(&self) -> Option<&str> {
        None
    }
}
