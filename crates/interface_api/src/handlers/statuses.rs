//! Status lookup handlers
//!
//! Thin wrappers over the state-machine queries. Any path segment is accepted;
//! unknown statuses get the fallback display record rather than a 404.

use axum::{extract::Path, Extension, Json};

use domain_claims::state_machine::{
    is_terminal_status, next_statuses, status_config, status_label, workflow_progress,
};
use domain_claims::{available_actions, ClaimStatus, StatusDisplayConfig};

use crate::auth::Claims;
use crate::dto::statuses::{ActionOption, ActionsResponse, NextStatusesResponse};

/// Lists every canonical status config in lifecycle order
pub async fn list_statuses() -> Json<Vec<StatusDisplayConfig>> {
    Json(ClaimStatus::ALL.iter().map(|s| s.config().clone()).collect())
}

pub async fn get_status(Path(status): Path<String>) -> Json<StatusDisplayConfig> {
    Json(status_config(&status).into_owned())
}

pub async fn get_next_statuses(Path(status): Path<String>) -> Json<NextStatusesResponse> {
    Json(NextStatusesResponse {
        next: next_statuses(&status).to_vec(),
        terminal: is_terminal_status(&status),
        progress: workflow_progress(&status),
        status,
    })
}

/// Actions the caller's roles allow on a claim in this status
pub async fn get_actions(
    Extension(claims): Extension<Claims>,
    Path(status): Path<String>,
) -> Json<ActionsResponse> {
    let roles = claims.portal_roles();
    let actions = available_actions(&status, &roles)
        .into_iter()
        .map(|action| ActionOption {
            action,
            target: action.target(),
            label: status_label(action.target().as_str(), true),
        })
        .collect();

    Json(ActionsResponse {
        action_role: status_config(&status).action_role,
        actions,
        status,
    })
}
