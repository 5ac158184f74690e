//! Claim status-change workflow
//!
//! Every status change a user can trigger is a [`ClaimAction`]. Before anything is
//! sent to the backend, [`authorize_action`] checks the action against the
//! transition table and the status's owning role. [`ClaimWorkflowService`] adds a
//! single in-flight guard per claim and performs the request through the
//! [`ApiClient`] port.
//!
//! The backend enforces the same rules independently; these checks only keep
//! obviously invalid requests off the wire and decide which buttons to show.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, info, instrument, warn};

use core_kernel::{ApiClient, ClaimRef, Role};
use crate::categorize::{categorize_claims, ClaimBuckets};
use crate::claim::ClaimRecord;
use crate::error::ClaimError;
use crate::report::DashboardSummary;
use crate::state_machine::transition_error_message;
use crate::status::{ClaimStatus, StatusCode};

/// A status change a user can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimAction {
    ApproveMedical,
    RejectMedical,
    ForwardToCoordination,
    ApproveFinal,
    RejectFinal,
    ReturnForReview,
    ReturnToProvider,
    Resubmit,
    InitiatePayment,
    MarkPaid,
}

impl ClaimAction {
    pub const ALL: [ClaimAction; 10] = [
        ClaimAction::ApproveMedical,
        ClaimAction::RejectMedical,
        ClaimAction::ForwardToCoordination,
        ClaimAction::ApproveFinal,
        ClaimAction::RejectFinal,
        ClaimAction::ReturnForReview,
        ClaimAction::ReturnToProvider,
        ClaimAction::Resubmit,
        ClaimAction::InitiatePayment,
        ClaimAction::MarkPaid,
    ];

    /// Status the claim moves to
    pub const fn target(self) -> ClaimStatus {
        match self {
            ClaimAction::ApproveMedical => ClaimStatus::ApprovedMedical,
            ClaimAction::RejectMedical => ClaimStatus::RejectedMedical,
            ClaimAction::ForwardToCoordination => ClaimStatus::AwaitingCoordinationReview,
            ClaimAction::ApproveFinal => ClaimStatus::ApprovedFinal,
            ClaimAction::RejectFinal => ClaimStatus::RejectedFinal,
            ClaimAction::ReturnForReview => ClaimStatus::ReturnedForReview,
            ClaimAction::ReturnToProvider => ClaimStatus::ReturnedToProvider,
            ClaimAction::Resubmit => ClaimStatus::PendingMedical,
            ClaimAction::InitiatePayment => ClaimStatus::PaymentPending,
            ClaimAction::MarkPaid => ClaimStatus::Paid,
        }
    }

    /// The action that moves a claim into `status`
    pub const fn targeting(status: ClaimStatus) -> ClaimAction {
        match status {
            ClaimStatus::ApprovedMedical => ClaimAction::ApproveMedical,
            ClaimStatus::RejectedMedical => ClaimAction::RejectMedical,
            ClaimStatus::AwaitingCoordinationReview => ClaimAction::ForwardToCoordination,
            ClaimStatus::ApprovedFinal => ClaimAction::ApproveFinal,
            ClaimStatus::RejectedFinal => ClaimAction::RejectFinal,
            ClaimStatus::ReturnedForReview => ClaimAction::ReturnForReview,
            ClaimStatus::ReturnedToProvider => ClaimAction::ReturnToProvider,
            ClaimStatus::PendingMedical => ClaimAction::Resubmit,
            ClaimStatus::PaymentPending => ClaimAction::InitiatePayment,
            ClaimStatus::Paid => ClaimAction::MarkPaid,
        }
    }

    /// Last path segment of the backend endpoint
    pub fn endpoint_segment(&self) -> &'static str {
        match self {
            ClaimAction::ApproveMedical => "approve-medical",
            ClaimAction::RejectMedical => "reject-medical",
            ClaimAction::ForwardToCoordination => "forward-to-coordination",
            ClaimAction::ApproveFinal => "approve",
            ClaimAction::RejectFinal => "reject",
            ClaimAction::ReturnForReview => "return-for-review",
            ClaimAction::ReturnToProvider => "return-to-provider",
            ClaimAction::Resubmit => "resubmit",
            ClaimAction::InitiatePayment => "initiate-payment",
            ClaimAction::MarkPaid => "mark-paid",
        }
    }

    /// Full backend endpoint for this action on a claim
    pub fn endpoint(&self, claim_id: &ClaimRef) -> String {
        format!("/claims/{}/{}", claim_id, self.endpoint_segment())
    }
}

/// Actions the user may take on a claim in `status`, in transition-table order
///
/// Empty for terminal, legacy and unknown statuses and for users who do not hold
/// the status's owning role.
pub fn available_actions(status: &str, roles: &[Role]) -> Vec<ClaimAction> {
    let Some(current) = StatusCode::parse(status).canonical() else {
        return Vec::new();
    };
    match current.config().action_role {
        Some(owner) if owner.is_held_by(roles) => current
            .next_statuses()
            .iter()
            .map(|next| ClaimAction::targeting(*next))
            .collect(),
        _ => Vec::new(),
    }
}

/// Checks an action against the transition table and role ownership
///
/// Returns the target status when the request may be sent.
pub fn authorize_action(
    current: &str,
    action: ClaimAction,
    roles: &[Role],
) -> Result<ClaimStatus, ClaimError> {
    let from = StatusCode::parse(current)
        .canonical()
        .ok_or_else(|| ClaimError::UnknownStatus(current.to_string()))?;
    let to = action.target();

    if !from.can_transition_to(to) {
        return Err(ClaimError::InvalidStatusTransition {
            from: from.to_string(),
            to: to.to_string(),
        });
    }

    match from.config().action_role {
        Some(owner) if owner.is_held_by(roles) => Ok(to),
        owner => Err(ClaimError::NotPermitted {
            status: from.to_string(),
            required: owner.map(|r| r.as_str()).unwrap_or("none").to_string(),
        }),
    }
}

/// Dashboard data: claims by bucket plus summary figures
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub buckets: ClaimBuckets<ClaimRecord>,
    pub summary: DashboardSummary,
}

/// Releases a claim's in-flight slot when dropped
struct InFlightGuard<'a> {
    in_flight: &'a Mutex<HashSet<ClaimRef>>,
    claim_id: ClaimRef,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(in_flight: &'a Mutex<HashSet<ClaimRef>>, claim_id: ClaimRef) -> Option<Self> {
        let mut set = in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        if set.insert(claim_id.clone()) {
            Some(Self { in_flight, claim_id })
        } else {
            None
        }
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.claim_id);
    }
}

/// Service for reading claims and submitting status changes
pub struct ClaimWorkflowService<A: ApiClient> {
    api: Arc<A>,
    in_flight: Mutex<HashSet<ClaimRef>>,
}

impl<A: ApiClient> ClaimWorkflowService<A> {
    /// Creates a new workflow service
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    /// Returns true while a status change for `claim_id` is awaiting the backend
    pub fn is_in_flight(&self, claim_id: &ClaimRef) -> bool {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(claim_id)
    }

    /// Fetches a single claim
    #[instrument(skip(self), fields(claim_id = %id))]
    pub async fn fetch_claim(&self, id: &ClaimRef) -> Result<ClaimRecord, ClaimError> {
        debug!("Fetching claim");
        let raw = self.api.get(&format!("/claims/{}", id)).await?;
        let claim = ClaimRecord::from_value(raw)?;
        warn_if_unknown(&claim);
        Ok(claim)
    }

    /// Lists claims visible to the current user
    ///
    /// Accepts either a bare JSON array or an object with a `claims` array.
    #[instrument(skip(self))]
    pub async fn list_claims(&self) -> Result<Vec<ClaimRecord>, ClaimError> {
        debug!("Listing claims");
        let raw = self.api.get("/claims").await?;
        let items = match raw {
            Value::Array(items) => items,
            Value::Object(mut map) => match map.remove("claims") {
                Some(Value::Array(items)) => items,
                _ => {
                    return Err(ClaimError::MalformedResponse(
                        "expected an array of claims".to_string(),
                    ))
                }
            },
            _ => {
                return Err(ClaimError::MalformedResponse(
                    "expected an array of claims".to_string(),
                ))
            }
        };

        let claims = items
            .into_iter()
            .map(ClaimRecord::from_value)
            .collect::<Result<Vec<_>, _>>()?;
        claims.iter().for_each(warn_if_unknown);
        Ok(claims)
    }

    /// Loads, categorizes and summarizes the user's claims
    pub async fn dashboard(&self) -> Result<Dashboard, ClaimError> {
        let buckets = categorize_claims(self.list_claims().await?);
        let summary = buckets.summary();
        Ok(Dashboard { buckets, summary })
    }

    /// Submits a status change for a claim
    ///
    /// The request is only sent when the transition is legal, the user holds the
    /// owning role, the claim carries an id, and no other change for the same
    /// claim is in flight.
    #[instrument(skip(self, claim, roles, notes), fields(claim_id = ?claim.id, action = ?action))]
    pub async fn perform(
        &self,
        claim: &ClaimRecord,
        action: ClaimAction,
        roles: &[Role],
        notes: Option<&str>,
    ) -> Result<ClaimRecord, ClaimError> {
        let target = match authorize_action(&claim.status, action, roles) {
            Ok(target) => target,
            Err(e) => {
                debug!(
                    status = %claim.status,
                    reason = %e,
                    detail = %transition_error_message(&claim.status, action.target().as_str()),
                    "Status change blocked"
                );
                return Err(e);
            }
        };

        let claim_id = claim.id.as_ref().ok_or_else(|| {
            debug!("Claim has no id");
            ClaimError::MissingClaimId
        })?;

        let _guard = InFlightGuard::acquire(&self.in_flight, claim_id.clone()).ok_or_else(|| {
            debug!("Status change already in flight");
            ClaimError::SubmissionInFlight(claim_id.clone())
        })?;

        let body = json!({
            "status": target,
            "notes": notes,
        });

        info!(from = %claim.status, to = %target, "Submitting status change");
        let raw = self.api.patch(&action.endpoint(claim_id), Some(body)).await?;
        let updated = ClaimRecord::from_value(raw)?;

        warn_if_unknown(&updated);
        if updated.canonical_status() != Some(target) {
            warn!(
                expected = %target,
                returned = %updated.status,
                "Backend returned a different status than requested"
            );
        }

        Ok(updated)
    }
}

fn warn_if_unknown(claim: &ClaimRecord) {
    if !claim.status_code().is_known() {
        warn!(claim_id = ?claim.id, status = %claim.status, "Claim has a status unknown to the transition table");
    }
}
