//! The claim transition table
//!
//! This table is the only authority on which status changes are legal. Every
//! status has an entry; terminal statuses have an empty one. Entry order is the
//! order in which actions are offered to the user.
//!
//! ```text
//! PENDING_MEDICAL ─▶ APPROVED_MEDICAL ─▶ AWAITING_COORDINATION_REVIEW ─┬─▶ APPROVED_FINAL ─▶ PAYMENT_PENDING ─▶ PAID
//!       │                                                              ├─▶ REJECTED_FINAL
//!       └─▶ REJECTED_MEDICAL                                           ├─▶ RETURNED_FOR_REVIEW ─▶ {APPROVED_MEDICAL, REJECTED_MEDICAL}
//!                                                                      └─▶ RETURNED_TO_PROVIDER ─▶ PENDING_MEDICAL
//! ```

use crate::status::ClaimStatus;

/// Status assigned by the backend when a claim is submitted
pub const INITIAL_STATUS: ClaimStatus = ClaimStatus::PendingMedical;

impl ClaimStatus {
    /// Statuses reachable from this one by a single legal transition
    pub const fn next_statuses(self) -> &'static [ClaimStatus] {
        use ClaimStatus::*;
        match self {
            PendingMedical => &[ApprovedMedical, RejectedMedical],
            ApprovedMedical => &[AwaitingCoordinationReview],
            AwaitingCoordinationReview => &[
                ApprovedFinal,
                RejectedFinal,
                ReturnedForReview,
                ReturnedToProvider,
            ],
            ReturnedForReview => &[ApprovedMedical, RejectedMedical],
            ReturnedToProvider => &[PendingMedical],
            ApprovedFinal => &[PaymentPending],
            PaymentPending => &[Paid],
            RejectedMedical | RejectedFinal | Paid => &[],
        }
    }

    /// Checks if `target` is reachable from this status in one step
    pub fn can_transition_to(self, target: ClaimStatus) -> bool {
        self.next_statuses().contains(&target)
    }

    /// A status is terminal iff it has no outgoing transitions
    pub const fn is_terminal(self) -> bool {
        self.next_statuses().is_empty()
    }
}

/// Iterates the full table in declaration order
pub fn transition_table() -> impl Iterator<Item = (ClaimStatus, &'static [ClaimStatus])> {
    ClaimStatus::ALL
        .into_iter()
        .map(|status| (status, status.next_statuses()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_statuses() {
        let terminal: Vec<ClaimStatus> = ClaimStatus::ALL
            .into_iter()
            .filter(|s| s.is_terminal())
            .collect();
        assert_eq!(
            terminal,
            vec![
                ClaimStatus::RejectedMedical,
                ClaimStatus::RejectedFinal,
                ClaimStatus::Paid,
            ]
        );
    }

    #[test]
    fn test_initial_status_is_not_terminal() {
        assert!(!INITIAL_STATUS.is_terminal());
    }

    #[test]
    fn test_every_status_reachable_from_initial() {
        let mut seen = vec![INITIAL_STATUS];
        let mut frontier = vec![INITIAL_STATUS];
        while let Some(status) = frontier.pop() {
            for next in status.next_statuses() {
                if !seen.contains(next) {
                    seen.push(*next);
                    frontier.push(*next);
                }
            }
        }
        assert_eq!(seen.len(), ClaimStatus::COUNT);
    }

    #[test]
    fn test_coordination_review_order() {
        assert_eq!(
            ClaimStatus::AwaitingCoordinationReview.next_statuses(),
            &[
                ClaimStatus::ApprovedFinal,
                ClaimStatus::RejectedFinal,
                ClaimStatus::ReturnedForReview,
                ClaimStatus::ReturnedToProvider,
            ]
        );
    }

    #[test]
    fn test_table_has_one_entry_per_status() {
        assert_eq!(transition_table().count(), ClaimStatus::COUNT);
    }
}
