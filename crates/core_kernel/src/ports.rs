//! Ports for external collaborators
//!
//! The portal never talks to the claims backend directly. Domain services depend on
//! the [`ApiClient`] port, and the transport (HTTP client, token handling, uploads)
//! lives in an adapter outside this workspace. Tests plug in an in-memory adapter.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │   Domain services            │
//! │   (ClaimWorkflowService)     │
//! └──────────────┬───────────────┘
//!                │ ApiClient
//!        ┌───────┴────────┐
//!        ▼                ▼
//!   REST adapter     In-memory mock
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! pub struct ClaimWorkflowService<A: ApiClient> {
//!     api: Arc<A>,
//! }
//!
//! let raw = self.api.get(&format!("/claims/{}", id.as_uuid())).await?;
//! ```

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Error type for port operations
///
/// All adapters report failures through this type so that services handle a
/// backend rejection the same way regardless of transport.
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested entity was not found
    #[error("Not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: String,
        id: String,
    },

    /// The backend rejected the request payload
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// The request conflicts with the backend's current state
    #[error("Conflict: {message}")]
    Conflict {
        message: String,
    },

    /// Connection to the backend failed
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The request timed out
    #[error("Timeout after {duration_ms}ms: {operation}")]
    Timeout {
        operation: String,
        duration_ms: u64,
    },

    /// Authentication or authorization failed
    #[error("Unauthorized: {message}")]
    Unauthorized {
        message: String,
    },

    /// The backend is unavailable
    #[error("Service unavailable: {service}")]
    ServiceUnavailable {
        service: String,
    },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl std::fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Creates a Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        PortError::Conflict {
            message: message.into(),
        }
    }

    /// Creates a Connection error
    pub fn connection(message: impl Into<String>) -> Self {
        PortError::Connection {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Returns true if this error indicates a transient failure that may succeed on retry
    ///
    /// Retrying is left to the caller; nothing in this workspace retries.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            PortError::Connection { .. }
                | PortError::Timeout { .. }
                | PortError::ServiceUnavailable { .. }
        )
    }

    /// Returns true if this error indicates the entity was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }
}

/// Marker trait for all ports
pub trait DomainPort: Send + Sync + 'static {}

/// Generic REST client for the claims backend
///
/// Endpoints are paths relative to the backend base URL (e.g. `/claims/{id}`).
/// Responses are plain JSON; claim payloads carry a `status` field.
#[async_trait]
pub trait ApiClient: DomainPort {
    /// Performs a GET request
    async fn get(&self, endpoint: &str) -> Result<Value, PortError>;

    /// Performs a PATCH request with an optional JSON body
    async fn patch(&self, endpoint: &str, body: Option<Value>) -> Result<Value, PortError>;
}
