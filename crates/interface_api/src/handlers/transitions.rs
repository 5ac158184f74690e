//! Transition check handler

use axum::Json;
use tracing::debug;
use validator::Validate;

use domain_claims::state_machine::{is_valid_transition, transition_error_message};

use crate::dto::statuses::{TransitionCheckRequest, TransitionCheckResponse};
use crate::error::ApiError;
use crate::extract::ApiJson;

/// Checks whether a status change is legal, with a user-facing message when not
pub async fn check_transition(
    ApiJson(request): ApiJson<TransitionCheckRequest>,
) -> Result<Json<TransitionCheckResponse>, ApiError> {
    request.validate()?;

    let valid = is_valid_transition(&request.from, &request.to);
    debug!(from = %request.from, to = %request.to, valid, "Transition check");

    Ok(Json(TransitionCheckResponse {
        valid,
        message: (!valid).then(|| transition_error_message(&request.from, &request.to)),
    }))
}
