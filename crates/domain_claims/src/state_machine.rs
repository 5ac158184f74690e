//! String-facing claim state machine queries
//!
//! These are the lookups the dashboards make against raw backend status values.
//! All of them are total: any input, including empty or garbage strings, yields a
//! well-formed answer.
//!
//! Two resolution rules apply:
//!
//! - Transition queries accept canonical statuses only. A legacy or unknown
//!   status has no legal transitions (fail closed for actions).
//! - Display queries resolve legacy aliases and fall back to
//!   [`StatusDisplayConfig::fallback`] for unknown values (fail open for display).

use std::borrow::Cow;

use crate::display::{ColorCategory, StatusDisplayConfig};
use crate::role::ActionRole;
use crate::status::{ClaimStatus, StatusCode};

pub use crate::progress::workflow_progress;

/// Checks whether `next` is reachable from `current` in one legal step
pub fn is_valid_transition(current: &str, next: &str) -> bool {
    match (
        StatusCode::parse(current).canonical(),
        StatusCode::parse(next).canonical(),
    ) {
        (Some(from), Some(to)) => from.can_transition_to(to),
        _ => false,
    }
}

/// Statuses reachable from `current`, in action-button order
pub fn next_statuses(current: &str) -> &'static [ClaimStatus] {
    StatusCode::parse(current)
        .canonical()
        .map(ClaimStatus::next_statuses)
        .unwrap_or(&[])
}

pub fn is_terminal_status(status: &str) -> bool {
    StatusCode::parse(status).config().is_terminal
}

pub fn requires_action(status: &str) -> bool {
    StatusCode::parse(status).config().requires_action
}

pub fn action_role(status: &str) -> Option<ActionRole> {
    StatusCode::parse(status).config().action_role
}

/// Display config for any status value
pub fn status_config(status: &str) -> Cow<'static, StatusDisplayConfig> {
    StatusCode::parse(status).config()
}

pub fn status_label(status: &str, short: bool) -> String {
    let config = status_config(status);
    if short {
        config.short_label.clone()
    } else {
        config.label.clone()
    }
}

pub fn status_color(status: &str) -> ColorCategory {
    status_config(status).color
}

pub fn status_border_color(status: &str) -> String {
    status_config(status).border_color.clone()
}

pub fn status_bg_color(status: &str) -> String {
    status_config(status).bg_color.clone()
}

pub fn status_text_color(status: &str) -> String {
    status_config(status).text_color.clone()
}

/// User-facing message for a blocked transition
pub fn transition_error_message(current: &str, next: &str) -> String {
    format!(
        "Cannot transition claim from {} to {}",
        status_label(current, false),
        status_label(next, false)
    )
}
