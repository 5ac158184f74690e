//! Status DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use domain_claims::{ActionRole, ClaimAction, ClaimStatus};

#[derive(Debug, Serialize)]
pub struct NextStatusesResponse {
    pub status: String,
    pub next: Vec<ClaimStatus>,
    pub terminal: bool,
    pub progress: u8,
}

#[derive(Debug, Serialize)]
pub struct ActionsResponse {
    pub status: String,
    pub action_role: Option<ActionRole>,
    pub actions: Vec<ActionOption>,
}

/// One button the caller may press
#[derive(Debug, Serialize)]
pub struct ActionOption {
    pub action: ClaimAction,
    pub target: ClaimStatus,
    pub label: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct TransitionCheckRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub from: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub to: String,
}

#[derive(Debug, Serialize)]
pub struct TransitionCheckResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
