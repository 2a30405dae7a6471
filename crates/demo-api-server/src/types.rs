//! Response types for the demo API.
//!
//! This module contains the data transfer objects returned by the API handlers.

use serde::Serialize;
use utoipa::ToSchema;

/// Response for the greeting endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct HelloResponse {
    /// Greeting built from the configured version.
    #[schema(example = "Hello from v1")]
    pub message: String,
    /// Configured build version.
    #[schema(example = "v1")]
    pub version: String,
    /// Local machine hostname, or `unknown` when resolution fails.
    #[schema(example = "demo-api-7f9c")]
    pub hostname: String,
    /// Request wall-clock time as an ISO-8601 UTC instant.
    #[schema(example = "2024-01-01T00:00:00Z")]
    pub timestamp: String,
}

/// Response for the health endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Liveness status, always `UP` while the process serves requests.
    #[schema(example = "UP")]
    pub status: String,
    /// Configured build version.
    #[schema(example = "v1")]
    pub version: String,
}

/// Response for the info endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct InfoResponse {
    /// Application name.
    #[schema(example = "demo-api")]
    pub app: String,
    /// Configured build version.
    #[schema(example = "v1")]
    pub version: String,
    /// Human-readable application description.
    pub description: String,
}
