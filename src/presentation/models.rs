//! API request and response models

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::AdviceResponse;

/// Successful advice payload: the plan plus the caller's remaining quota
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdviceApiResponse {
    pub response: AdviceResponse,
    pub remaining_requests: u32,
}

/// Error payload for every non-2xx response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message
    #[schema(example = "Rate limit exceeded. Please try again later.")]
    pub error: String,
    /// Stable machine-readable code
    #[schema(example = "rate_limited")]
    pub code: String,
}

/// Liveness probe response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    #[schema(example = "0.3.0")]
    pub version: String,
}
