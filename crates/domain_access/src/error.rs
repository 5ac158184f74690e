//! Access domain errors

use thiserror::Error;

/// Errors raised by route authorization
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    #[error("No access rule for route {0}")]
    UnknownRoute(String),

    #[error("Route {route} requires one of: {required}")]
    Forbidden { route: String, required: String },
}
