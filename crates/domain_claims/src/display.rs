//! Per-status display and ownership metadata
//!
//! Every status, canonical or legacy, resolves to a fully populated
//! [`StatusDisplayConfig`]. Unknown values get [`StatusDisplayConfig::fallback`],
//! which is the single defaulting policy for the crate: shown generically,
//! never terminal, never actionable.
//!
//! `is_terminal` is not stored per status. It is derived from the transition
//! table when the config map is built, so the two cannot disagree.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::role::ActionRole;
use crate::status::{ClaimStatus, LegacyStatus, StatusCode};

/// Semantic color category used by status chips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorCategory {
    Default,
    Primary,
    Secondary,
    Info,
    Success,
    Warning,
    Error,
}

impl ColorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorCategory::Default => "default",
            ColorCategory::Primary => "primary",
            ColorCategory::Secondary => "secondary",
            ColorCategory::Info => "info",
            ColorCategory::Success => "success",
            ColorCategory::Warning => "warning",
            ColorCategory::Error => "error",
        }
    }
}

/// Display and ownership metadata for one status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusDisplayConfig {
    /// The status key this record describes, as spelled by the backend
    pub status: String,
    pub label: String,
    pub short_label: String,
    pub color: ColorCategory,
    pub bg_color: String,
    pub text_color: String,
    pub border_color: String,
    pub icon: String,
    pub description: String,
    pub is_terminal: bool,
    pub requires_action: bool,
    pub action_role: Option<ActionRole>,
}

impl StatusDisplayConfig {
    /// Record used for any status value not in the table
    pub fn fallback(raw: &str) -> Self {
        Self {
            status: raw.to_string(),
            label: raw.to_string(),
            short_label: raw.to_string(),
            color: ColorCategory::Default,
            bg_color: "#F5F5F5".to_string(),
            text_color: "#424242".to_string(),
            border_color: "#BDBDBD".to_string(),
            icon: "HelpOutline".to_string(),
            description: "Unrecognized claim status".to_string(),
            is_terminal: false,
            requires_action: false,
            action_role: None,
        }
    }
}

struct Appearance {
    label: &'static str,
    short_label: &'static str,
    color: ColorCategory,
    bg_color: &'static str,
    text_color: &'static str,
    border_color: &'static str,
    icon: &'static str,
    description: &'static str,
    action_role: Option<ActionRole>,
}

const fn appearance(status: ClaimStatus) -> Appearance {
    use ColorCategory::*;
    match status {
        ClaimStatus::PendingMedical => Appearance {
            label: "Pending Medical Review",
            short_label: "Pending Medical",
            color: Warning,
            bg_color: "#FFF8E1",
            text_color: "#F57F17",
            border_color: "#FFB300",
            icon: "HourglassEmpty",
            description: "Awaiting clinical review by a medical admin",
            action_role: Some(ActionRole::MedicalAdmin),
        },
        ClaimStatus::ApprovedMedical => Appearance {
            label: "Medically Approved",
            short_label: "Med. Approved",
            color: Info,
            bg_color: "#E3F2FD",
            text_color: "#0D47A1",
            border_color: "#42A5F5",
            icon: "LocalHospital",
            description: "Clinically approved, waiting to be picked up by coordination",
            action_role: Some(ActionRole::CoordinationAdmin),
        },
        ClaimStatus::AwaitingCoordinationReview => Appearance {
            label: "Awaiting Coordination Review",
            short_label: "Coordination",
            color: Info,
            bg_color: "#E8EAF6",
            text_color: "#1A237E",
            border_color: "#5C6BC0",
            icon: "Pending",
            description: "Waiting for the coordination admin's final decision",
            action_role: Some(ActionRole::CoordinationAdmin),
        },
        ClaimStatus::RejectedMedical => Appearance {
            label: "Rejected by Medical Admin",
            short_label: "Rejected",
            color: Error,
            bg_color: "#FFEBEE",
            text_color: "#B71C1C",
            border_color: "#E53935",
            icon: "Cancel",
            description: "Rejected on clinical grounds",
            action_role: None,
        },
        ClaimStatus::ApprovedFinal => Appearance {
            label: "Approved",
            short_label: "Approved",
            color: Success,
            bg_color: "#E8F5E9",
            text_color: "#1B5E20",
            border_color: "#43A047",
            icon: "CheckCircle",
            description: "Approved for reimbursement",
            action_role: Some(ActionRole::CoordinationAdmin),
        },
        ClaimStatus::RejectedFinal => Appearance {
            label: "Rejected",
            short_label: "Rejected",
            color: Error,
            bg_color: "#FFEBEE",
            text_color: "#B71C1C",
            border_color: "#C62828",
            icon: "Block",
            description: "Rejected by coordination",
            action_role: None,
        },
        ClaimStatus::ReturnedForReview => Appearance {
            label: "Returned for Review",
            short_label: "Returned",
            color: Secondary,
            bg_color: "#F3E5F5",
            text_color: "#4A148C",
            border_color: "#AB47BC",
            icon: "Replay",
            description: "Sent back to the medical admin for another review",
            action_role: Some(ActionRole::MedicalAdmin),
        },
        ClaimStatus::ReturnedToProvider => Appearance {
            label: "Returned to Provider",
            short_label: "Needs Info",
            color: Warning,
            bg_color: "#FFF3E0",
            text_color: "#E65100",
            border_color: "#FB8C00",
            icon: "AssignmentReturn",
            description: "Sent back to the provider for corrections",
            action_role: Some(ActionRole::Provider),
        },
        ClaimStatus::PaymentPending => Appearance {
            label: "Payment Pending",
            short_label: "Payment",
            color: Primary,
            bg_color: "#E0F2F1",
            text_color: "#004D40",
            border_color: "#26A69A",
            icon: "Payments",
            description: "Approved and queued for payout",
            action_role: Some(ActionRole::CoordinationAdmin),
        },
        ClaimStatus::Paid => Appearance {
            label: "Paid",
            short_label: "Paid",
            color: Success,
            bg_color: "#E8F5E9",
            text_color: "#1B5E20",
            border_color: "#2E7D32",
            icon: "Paid",
            description: "Reimbursement completed",
            action_role: None,
        },
    }
}

fn build_config(status: ClaimStatus) -> StatusDisplayConfig {
    let look = appearance(status);
    let is_terminal = status.is_terminal();
    let action_role = if is_terminal { None } else { look.action_role };

    StatusDisplayConfig {
        status: status.as_str().to_string(),
        label: look.label.to_string(),
        short_label: look.short_label.to_string(),
        color: look.color,
        bg_color: look.bg_color.to_string(),
        text_color: look.text_color.to_string(),
        border_color: look.border_color.to_string(),
        icon: look.icon.to_string(),
        description: look.description.to_string(),
        is_terminal,
        requires_action: action_role.is_some(),
        action_role,
    }
}

/// Legacy records look like their canonical counterpart but never offer actions
fn build_legacy_config(legacy: LegacyStatus) -> StatusDisplayConfig {
    StatusDisplayConfig {
        status: legacy.as_str().to_string(),
        requires_action: false,
        action_role: None,
        ..build_config(legacy.canonical())
    }
}

static CONFIGS: Lazy<[StatusDisplayConfig; ClaimStatus::COUNT]> =
    Lazy::new(|| ClaimStatus::ALL.map(build_config));

static LEGACY_CONFIGS: Lazy<[StatusDisplayConfig; LegacyStatus::COUNT]> =
    Lazy::new(|| LegacyStatus::ALL.map(build_legacy_config));

impl ClaimStatus {
    pub fn config(self) -> &'static StatusDisplayConfig {
        &CONFIGS[self.index()]
    }
}

impl LegacyStatus {
    pub fn config(self) -> &'static StatusDisplayConfig {
        &LEGACY_CONFIGS[self.index()]
    }
}

impl StatusCode<'_> {
    /// Resolves the display config, borrowing the static record when one exists
    pub fn config(&self) -> Cow<'static, StatusDisplayConfig> {
        match self {
            StatusCode::Canonical(status) => Cow::Borrowed(status.config()),
            StatusCode::Legacy(legacy) => Cow::Borrowed(legacy.config()),
            StatusCode::Unknown(raw) => {
                tracing::trace!(status = %raw, "Using fallback display config");
                Cow::Owned(StatusDisplayConfig::fallback(raw))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_flag_follows_transition_table() {
        for status in ClaimStatus::ALL {
            assert_eq!(status.config().is_terminal, status.next_statuses().is_empty());
        }
    }

    #[test]
    fn test_terminal_statuses_have_no_owner() {
        for status in ClaimStatus::ALL {
            let config = status.config();
            assert_eq!(config.is_terminal, config.action_role.is_none(), "{}", status);
            assert_eq!(config.requires_action, config.action_role.is_some());
        }
    }

    #[test]
    fn test_config_keys_match_status() {
        for status in ClaimStatus::ALL {
            assert_eq!(status.config().status, status.as_str());
        }
        for legacy in LegacyStatus::ALL {
            assert_eq!(legacy.config().status, legacy.as_str());
        }
    }

    #[test]
    fn test_legacy_borrows_canonical_appearance() {
        let legacy = LegacyStatus::Pending.config();
        let canonical = ClaimStatus::PendingMedical.config();
        assert_eq!(legacy.label, canonical.label);
        assert_eq!(legacy.color, canonical.color);
        assert_eq!(legacy.is_terminal, canonical.is_terminal);
        assert!(!legacy.requires_action);
        assert!(legacy.action_role.is_none());
    }

    #[test]
    fn test_fallback_record() {
        let config = StatusDisplayConfig::fallback("SOME_UNKNOWN_STATUS");
        assert_eq!(config.label, "SOME_UNKNOWN_STATUS");
        assert_eq!(config.color, ColorCategory::Default);
        assert!(!config.is_terminal);
        assert!(!config.requires_action);
        assert!(config.action_role.is_none());
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(ClaimStatus::Paid.config()).unwrap();
        assert_eq!(json["shortLabel"], "Paid");
        assert_eq!(json["isTerminal"], true);
        assert_eq!(json["color"], "success");
        assert!(json["actionRole"].is_null());
    }

    #[test]
    fn test_no_empty_fields() {
        for status in ClaimStatus::ALL {
            let config = status.config();
            for field in [
                &config.label,
                &config.short_label,
                &config.bg_color,
                &config.text_color,
                &config.border_color,
                &config.icon,
                &config.description,
            ] {
                assert!(!field.is_empty(), "{} has an empty field", status);
            }
        }
    }
}
