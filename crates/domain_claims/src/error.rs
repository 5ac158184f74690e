//! Claims domain errors

use thiserror::Error;

use core_kernel::{ClaimRef, PortError};

/// Errors that can occur in the claims domain
///
/// The state-machine queries never produce these; they come from strict parsing
/// and from the workflow service.
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Unknown claim status: {0}")]
    UnknownStatus(String),

    #[error("Cannot transition claim from {from} to {to}")]
    InvalidStatusTransition { from: String, to: String },

    #[error("Claim in status {status} can only be actioned by {required}")]
    NotPermitted { status: String, required: String },

    #[error("A status change is already in flight for claim {0}")]
    SubmissionInFlight(ClaimRef),

    #[error("Claim has no id; status changes need one")]
    MissingClaimId,

    #[error("Backend error: {0}")]
    Backend(#[from] PortError),

    #[error("Malformed backend response: {0}")]
    MalformedResponse(String),
}

impl ClaimError {
    /// True when the request was stopped locally and never reached the backend
    pub fn is_blocked_locally(&self) -> bool {
        matches!(
            self,
            ClaimError::UnknownStatus(_)
                | ClaimError::InvalidStatusTransition { .. }
                | ClaimError::NotPermitted { .. }
                | ClaimError::SubmissionInFlight(_)
                | ClaimError::MissingClaimId
        )
    }
}
