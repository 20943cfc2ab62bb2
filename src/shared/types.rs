use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned for every non-2xx response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable explanation
    #[schema(example = "District with id '999' not found")]
    pub detail: String,
}
