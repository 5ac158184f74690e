//! HTTP API Layer
//!
//! This crate exposes the claim state machine and the portal permission table
//! over REST using Axum, so every portal surface asks the same tables.
//!
//! # Architecture
//!
//! - **Handlers**: Status lookups, transition checks, claim bucketing, route access
//! - **Middleware**: Authentication, route authorization, tracing, audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;
pub mod auth;
pub mod extract;

use axum::{
    Router,
    routing::{get, post},
    middleware as axum_middleware,
};
use tower_http::trace::TraceLayer;
use tower_http::cors::{CorsLayer, Any};

use crate::config::ApiConfig;
use crate::middleware::{auth_middleware, authorization_middleware, audit_middleware};
use crate::handlers::{access, claims, health, statuses, transitions};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// Requests under `/api/v1` pass through audit logging, then authentication,
/// then route authorization.
pub fn create_router(config: ApiConfig) -> Router {
    let state = AppState { config };

    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(health::health_check));

    let status_routes = Router::new()
        .route("/", get(statuses::list_statuses))
        .route("/:status", get(statuses::get_status))
        .route("/:status/next", get(statuses::get_next_statuses))
        .route("/:status/actions", get(statuses::get_actions));

    let claims_routes = Router::new()
        .route("/categorize", post(claims::categorize));

    let report_routes = Router::new()
        .route("/summary", post(claims::summary));

    // Protected API routes
    let api_routes = Router::new()
        .nest("/statuses", status_routes)
        .route("/transitions/check", post(transitions::check_transition))
        .nest("/claims", claims_routes)
        .nest("/reports", report_routes)
        .route("/access", get(access::check_access))
        .layer(axum_middleware::from_fn(authorization_middleware))
        .layer(axum_middleware::from_fn_with_state(state.clone(), auth_middleware))
        .layer(axum_middleware::from_fn_with_state(state.clone(), audit_middleware));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
