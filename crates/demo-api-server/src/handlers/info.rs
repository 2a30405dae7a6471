//! Application metadata handler.

use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

use crate::types::InfoResponse;
use crate::AppState;

/// Application info endpoint.
///
/// Everything except `version` is constant for the lifetime of the build.
#[utoipa::path(
    get,
    path = "/api/info",
    tag = "info",
    responses(
        (status = 200, description = "Application metadata", body = InfoResponse)
    )
)]
pub async fn info(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(InfoResponse {
        app: "demo-api".to_string(),
        version: state.config.app.version.clone(),
        description: "Spring Boot Demo API for GitOps APISIX Canary".to_string(),
    })
}
