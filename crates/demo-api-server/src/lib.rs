#![allow(clippy::doc_markdown)]
#![allow(clippy::unused_async)]
//! Demo API Server - HTTP API library for canary rollout demos.
//!
//! This module provides the HTTP handlers, configuration and response types
//! for the demo API.
//!
//! ## OpenAPI Documentation
//!
//! The API is documented using OpenAPI 3.0. Access the interactive
//! documentation at:
//! - Swagger UI: `GET /swagger-ui`
//! - OpenAPI JSON: `GET /api-docs/openapi.json`

mod config;
mod handlers;
mod types;

use utoipa::OpenApi;

// Re-export configuration and types for external use
pub use config::{ApiConfig, AppConfig, ConfigError, LoggingConfig, ServerConfig};
pub use types::*;

// Re-export handlers for routing
pub use handlers::{health_check, hello, info};

// ============================================================================
// OpenAPI Documentation
// ============================================================================

/// Demo API Documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Demo API",
        version = "0.1.0",
        description = "Demo HTTP API surfacing build version, host identity and liveness \
            for canary rollouts."
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    tags(
        (name = "hello", description = "Greeting endpoint"),
        (name = "health", description = "Health check endpoints"),
        (name = "info", description = "Application metadata")
    ),
    paths(
        handlers::hello::hello,
        handlers::health::health_check,
        handlers::info::info
    ),
    components(
        schemas(
            HelloResponse,
            HealthResponse,
            InfoResponse
        )
    )
)]
pub struct ApiDoc;

// ============================================================================
// Application State
// ============================================================================

/// Application state shared across handlers.
pub struct AppState {
    /// Immutable configuration loaded at startup.
    pub config: ApiConfig,
}

// ============================================================================
// Tests
// ============================================================================
