//! Coarse workflow progress for progress bars
//!
//! These are fixed presentation values, not graph distances. Terminal outcomes
//! all read as 100 because the claim's journey is over either way.

use crate::status::{ClaimStatus, StatusCode};

impl ClaimStatus {
    /// Percentage of the review pipeline completed, in `0..=100`
    pub const fn workflow_progress(self) -> u8 {
        match self {
            ClaimStatus::ReturnedToProvider => 10,
            ClaimStatus::PendingMedical => 20,
            ClaimStatus::ReturnedForReview => 30,
            ClaimStatus::ApprovedMedical => 50,
            ClaimStatus::AwaitingCoordinationReview => 60,
            ClaimStatus::ApprovedFinal => 80,
            ClaimStatus::PaymentPending => 90,
            ClaimStatus::Paid | ClaimStatus::RejectedMedical | ClaimStatus::RejectedFinal => 100,
        }
    }
}

/// Progress for a raw status; legacy aliases use their canonical value, unknown is 0
pub fn workflow_progress(raw: &str) -> u8 {
    StatusCode::parse(raw)
        .display_status()
        .map(ClaimStatus::workflow_progress)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_values() {
        assert_eq!(workflow_progress("PENDING_MEDICAL"), 20);
        assert_eq!(workflow_progress("APPROVED_MEDICAL"), 50);
        assert_eq!(workflow_progress("APPROVED_FINAL"), 80);
        assert_eq!(workflow_progress("PAID"), 100);
        assert_eq!(workflow_progress("REJECTED_MEDICAL"), 100);
    }

    #[test]
    fn test_legacy_and_unknown() {
        assert_eq!(workflow_progress("APPROVED"), 80);
        assert_eq!(workflow_progress("PENDING"), 20);
        assert_eq!(workflow_progress("ARCHIVED"), 0);
        assert_eq!(workflow_progress(""), 0);
    }

    #[test]
    fn test_terminal_statuses_are_complete() {
        for status in ClaimStatus::ALL {
            let progress = status.workflow_progress();
            assert!(progress <= 100);
            if status.is_terminal() {
                assert_eq!(progress, 100);
            } else {
                assert!(progress < 100);
            }
        }
    }
}
