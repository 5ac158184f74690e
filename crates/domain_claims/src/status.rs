//! Claim status enumeration and raw-string normalization
//!
//! The backend sends statuses as strings, and older records still carry legacy
//! spellings. Every raw value goes through [`StatusCode::parse`] exactly once:
//!
//! - canonical names map to [`ClaimStatus`]
//! - legacy aliases map to [`LegacyStatus`], which borrows a canonical status's
//!   display semantics but never its transitions
//! - anything else is [`StatusCode::Unknown`] and gets the fallback treatment
//!
//! Matching is exact and case-sensitive, mirroring the backend's enum.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ClaimError;

/// Canonical claim lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimStatus {
    /// Submitted, waiting for clinical review
    PendingMedical,
    /// Clinically approved
    ApprovedMedical,
    /// Queued for the coordination admin's decision
    AwaitingCoordinationReview,
    /// Rejected on clinical grounds
    RejectedMedical,
    /// Approved for reimbursement
    ApprovedFinal,
    /// Rejected by coordination
    RejectedFinal,
    /// Sent back to the medical admin
    ReturnedForReview,
    /// Sent back to the originating provider for correction
    ReturnedToProvider,
    /// Approved and queued for payout
    PaymentPending,
    /// Reimbursed
    Paid,
}

impl ClaimStatus {
    /// Number of canonical statuses
    pub const COUNT: usize = 10;

    /// All canonical statuses in declaration order
    pub const ALL: [ClaimStatus; Self::COUNT] = [
        ClaimStatus::PendingMedical,
        ClaimStatus::ApprovedMedical,
        ClaimStatus::AwaitingCoordinationReview,
        ClaimStatus::RejectedMedical,
        ClaimStatus::ApprovedFinal,
        ClaimStatus::RejectedFinal,
        ClaimStatus::ReturnedForReview,
        ClaimStatus::ReturnedToProvider,
        ClaimStatus::PaymentPending,
        ClaimStatus::Paid,
    ];

    /// Returns the wire name
    pub const fn as_str(self) -> &'static str {
        match self {
            ClaimStatus::PendingMedical => "PENDING_MEDICAL",
            ClaimStatus::ApprovedMedical => "APPROVED_MEDICAL",
            ClaimStatus::AwaitingCoordinationReview => "AWAITING_COORDINATION_REVIEW",
            ClaimStatus::RejectedMedical => "REJECTED_MEDICAL",
            ClaimStatus::ApprovedFinal => "APPROVED_FINAL",
            ClaimStatus::RejectedFinal => "REJECTED_FINAL",
            ClaimStatus::ReturnedForReview => "RETURNED_FOR_REVIEW",
            ClaimStatus::ReturnedToProvider => "RETURNED_TO_PROVIDER",
            ClaimStatus::PaymentPending => "PAYMENT_PENDING",
            ClaimStatus::Paid => "PAID",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimStatus {
    type Err = ClaimError;

    /// Parses a canonical status; legacy aliases are rejected
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClaimStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ClaimError::UnknownStatus(s.to_string()))
    }
}

/// Status spellings kept for records stored before the two-stage review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LegacyStatus {
    Pending,
    Approved,
    Rejected,
    ApprovedByMedical,
    PendingCoordination,
}

impl LegacyStatus {
    pub const COUNT: usize = 5;

    pub const ALL: [LegacyStatus; Self::COUNT] = [
        LegacyStatus::Pending,
        LegacyStatus::Approved,
        LegacyStatus::Rejected,
        LegacyStatus::ApprovedByMedical,
        LegacyStatus::PendingCoordination,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            LegacyStatus::Pending => "PENDING",
            LegacyStatus::Approved => "APPROVED",
            LegacyStatus::Rejected => "REJECTED",
            LegacyStatus::ApprovedByMedical => "APPROVED_BY_MEDICAL",
            LegacyStatus::PendingCoordination => "PENDING_COORDINATION",
        }
    }

    /// The canonical status whose display semantics this alias borrows
    pub const fn canonical(self) -> ClaimStatus {
        match self {
            LegacyStatus::Pending => ClaimStatus::PendingMedical,
            LegacyStatus::Approved => ClaimStatus::ApprovedFinal,
            LegacyStatus::Rejected => ClaimStatus::RejectedFinal,
            LegacyStatus::ApprovedByMedical => ClaimStatus::ApprovedMedical,
            LegacyStatus::PendingCoordination => ClaimStatus::AwaitingCoordinationReview,
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for LegacyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw status value after normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode<'a> {
    Canonical(ClaimStatus),
    Legacy(LegacyStatus),
    Unknown(&'a str),
}

impl<'a> StatusCode<'a> {
    /// Classifies a raw status string. Never fails.
    pub fn parse(raw: &'a str) -> Self {
        if let Some(status) = ClaimStatus::ALL.into_iter().find(|s| s.as_str() == raw) {
            return StatusCode::Canonical(status);
        }
        if let Some(legacy) = LegacyStatus::ALL.into_iter().find(|s| s.as_str() == raw) {
            return StatusCode::Legacy(legacy);
        }
        StatusCode::Unknown(raw)
    }

    /// The canonical status, if and only if the raw value was canonical
    ///
    /// Use this for anything that decides whether an action is allowed.
    pub fn canonical(&self) -> Option<ClaimStatus> {
        match self {
            StatusCode::Canonical(status) => Some(*status),
            _ => None,
        }
    }

    /// The status whose display semantics apply, resolving legacy aliases
    pub fn display_status(&self) -> Option<ClaimStatus> {
        match self {
            StatusCode::Canonical(status) => Some(*status),
            StatusCode::Legacy(legacy) => Some(legacy.canonical()),
            StatusCode::Unknown(_) => None,
        }
    }

    /// The raw spelling
    pub fn as_str(&self) -> &'a str {
        match self {
            StatusCode::Canonical(status) => status.as_str(),
            StatusCode::Legacy(legacy) => legacy.as_str(),
            StatusCode::Unknown(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, StatusCode::Unknown(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_names_match_as_str() {
        for status in ClaimStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
        for legacy in LegacyStatus::ALL {
            let json = serde_json::to_string(&legacy).unwrap();
            assert_eq!(json, format!("\"{}\"", legacy.as_str()));
        }
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, status) in ClaimStatus::ALL.into_iter().enumerate() {
            assert_eq!(status.index(), i);
        }
        for (i, legacy) in LegacyStatus::ALL.into_iter().enumerate() {
            assert_eq!(legacy.index(), i);
        }
    }

    #[test]
    fn test_from_str_rejects_legacy_and_case_variants() {
        assert_eq!("PAID".parse::<ClaimStatus>().unwrap(), ClaimStatus::Paid);
        assert!("PENDING".parse::<ClaimStatus>().is_err());
        assert!("paid".parse::<ClaimStatus>().is_err());
        assert!(" PAID".parse::<ClaimStatus>().is_err());
    }

    #[test]
    fn test_parse_classifies() {
        assert_eq!(
            StatusCode::parse("APPROVED_FINAL"),
            StatusCode::Canonical(ClaimStatus::ApprovedFinal)
        );
        assert_eq!(
            StatusCode::parse("APPROVED_BY_MEDICAL"),
            StatusCode::Legacy(LegacyStatus::ApprovedByMedical)
        );
        assert_eq!(StatusCode::parse("ON_HOLD"), StatusCode::Unknown("ON_HOLD"));
        assert_eq!(StatusCode::parse(""), StatusCode::Unknown(""));
    }

    #[test]
    fn test_legacy_resolves_for_display_only() {
        let code = StatusCode::parse("REJECTED");
        assert_eq!(code.display_status(), Some(ClaimStatus::RejectedFinal));
        assert_eq!(code.canonical(), None);
        assert!(code.is_known());
        assert_eq!(code.as_str(), "REJECTED");
    }

    #[test]
    fn test_legacy_names_do_not_collide_with_canonical() {
        for legacy in LegacyStatus::ALL {
            assert!(legacy.as_str().parse::<ClaimStatus>().is_err());
        }
    }
}
