//! Common test utilities for demo-api-server integration tests.

use axum::{routing::get, Router};
use std::sync::Arc;

use demo_api_server::{health_check, hello, info, ApiConfig, AppState};

/// Helper to create a test app with all routes
pub fn create_test_app(config: ApiConfig) -> Router {
    let state = Arc::new(AppState { config });

    Router::new()
        .route("/api/hello", get(hello))
        .route("/api/health", get(health_check))
        .route("/api/info", get(info))
        .with_state(state)
}

/// Helper to build a configuration with the given application version
pub fn config_with_version(version: &str) -> ApiConfig {
    let mut config = ApiConfig::default();
    config.app.version = version.to_string();
    config
}
