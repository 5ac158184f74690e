//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use domain_claims::ClaimStatus;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Number of canonical statuses loaded into the state machine
    pub statuses: usize,
    pub backend: String,
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        statuses: ClaimStatus::ALL.len(),
        backend: state.config.backend_base_url.clone(),
    })
}
