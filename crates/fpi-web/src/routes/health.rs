//! Health check endpoint.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::error::Result;
use crate::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status.
    pub status: String,
    /// Service name.
    pub service: String,
    /// Server version.
    pub version: String,
    /// Number of stored constraints.
    pub constraints: usize,
}

/// Health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>> {
    let constraints = state.store.count()?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        service: "fpi-web".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        constraints,
    }))
}
