//! Greeting handler.

use axum::{extract::State, response::IntoResponse, Json};
use chrono::{SecondsFormat, Utc};
use std::sync::Arc;

use crate::types::HelloResponse;
use crate::AppState;

/// Greeting endpoint.
///
/// Reports the configured version together with the serving host and the
/// request wall-clock time. Hostname resolution failures of any kind fall
/// back to `unknown` and never surface to the caller.
#[utoipa::path(
    get,
    path = "/api/hello",
    tag = "hello",
    responses(
        (status = 200, description = "Greeting with host identity", body = HelloResponse)
    )
)]
pub async fn hello(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let version = &state.config.app.version;

    let hostname = hostname::get().map_or_else(
        |_| "unknown".to_string(),
        |h| h.to_string_lossy().to_string(),
    );

    Json(HelloResponse {
        message: format!("Hello from {version}"),
        version: version.clone(),
        hostname,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
