use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body returned for every non-2xx response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub message: String,
}
