//! Dashboard buckets
//!
//! A claim lands in at most one bucket: [`ClaimBucket::for_status`] is a function
//! of the status, so two buckets can never both claim the same value. Legacy
//! aliases fold into the bucket of their canonical status. Unknown statuses go
//! to `uncategorized` rather than being silently dropped.

use serde::{Deserialize, Serialize};

use crate::claim::ClaimRecord;
use crate::status::{ClaimStatus, StatusCode};

/// Anything that carries a raw claim status
pub trait HasStatus {
    fn status(&self) -> &str;
}

impl HasStatus for ClaimRecord {
    fn status(&self) -> &str {
        &self.status
    }
}

impl HasStatus for str {
    fn status(&self) -> &str {
        self
    }
}

impl HasStatus for String {
    fn status(&self) -> &str {
        self
    }
}

impl<T: HasStatus + ?Sized> HasStatus for &T {
    fn status(&self) -> &str {
        (**self).status()
    }
}

/// Named dashboard bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClaimBucket {
    PendingMedical,
    PendingCoordination,
    Approved,
    Rejected,
    ReturnedToProvider,
}

impl ClaimBucket {
    pub const ALL: [ClaimBucket; 5] = [
        ClaimBucket::PendingMedical,
        ClaimBucket::PendingCoordination,
        ClaimBucket::Approved,
        ClaimBucket::Rejected,
        ClaimBucket::ReturnedToProvider,
    ];

    /// Bucket for a canonical status
    pub const fn of(status: ClaimStatus) -> ClaimBucket {
        match status {
            ClaimStatus::PendingMedical | ClaimStatus::ReturnedForReview => {
                ClaimBucket::PendingMedical
            }
            ClaimStatus::ApprovedMedical | ClaimStatus::AwaitingCoordinationReview => {
                ClaimBucket::PendingCoordination
            }
            ClaimStatus::ApprovedFinal | ClaimStatus::PaymentPending | ClaimStatus::Paid => {
                ClaimBucket::Approved
            }
            ClaimStatus::RejectedMedical | ClaimStatus::RejectedFinal => ClaimBucket::Rejected,
            ClaimStatus::ReturnedToProvider => ClaimBucket::ReturnedToProvider,
        }
    }

    /// Bucket for a raw status, or `None` when the status is unknown
    pub fn for_status(raw: &str) -> Option<ClaimBucket> {
        StatusCode::parse(raw).display_status().map(ClaimBucket::of)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimBucket::PendingMedical => "pendingMedical",
            ClaimBucket::PendingCoordination => "pendingCoordination",
            ClaimBucket::Approved => "approved",
            ClaimBucket::Rejected => "rejected",
            ClaimBucket::ReturnedToProvider => "returnedToProvider",
        }
    }
}

/// Claims partitioned by bucket
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimBuckets<T> {
    pub pending_medical: Vec<T>,
    pub pending_coordination: Vec<T>,
    pub approved: Vec<T>,
    pub rejected: Vec<T>,
    pub returned_to_provider: Vec<T>,
    /// Claims whose status is not known to the table
    pub uncategorized: Vec<T>,
}

impl<T> Default for ClaimBuckets<T> {
    fn default() -> Self {
        Self {
            pending_medical: Vec::new(),
            pending_coordination: Vec::new(),
            approved: Vec::new(),
            rejected: Vec::new(),
            returned_to_provider: Vec::new(),
            uncategorized: Vec::new(),
        }
    }
}

impl<T> ClaimBuckets<T> {
    pub fn get(&self, bucket: ClaimBucket) -> &[T] {
        match bucket {
            ClaimBucket::PendingMedical => &self.pending_medical,
            ClaimBucket::PendingCoordination => &self.pending_coordination,
            ClaimBucket::Approved => &self.approved,
            ClaimBucket::Rejected => &self.rejected,
            ClaimBucket::ReturnedToProvider => &self.returned_to_provider,
        }
    }

    fn get_mut(&mut self, bucket: ClaimBucket) -> &mut Vec<T> {
        match bucket {
            ClaimBucket::PendingMedical => &mut self.pending_medical,
            ClaimBucket::PendingCoordination => &mut self.pending_coordination,
            ClaimBucket::Approved => &mut self.approved,
            ClaimBucket::Rejected => &mut self.rejected,
            ClaimBucket::ReturnedToProvider => &mut self.returned_to_provider,
        }
    }

    /// Total number of claims across all buckets, including uncategorized
    pub fn len(&self) -> usize {
        ClaimBucket::ALL
            .iter()
            .map(|bucket| self.get(*bucket).len())
            .sum::<usize>()
            + self.uncategorized.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partitions claims into dashboard buckets, preserving input order within each
pub fn categorize_claims<T, I>(claims: I) -> ClaimBuckets<T>
where
    T: HasStatus,
    I: IntoIterator<Item = T>,
{
    let mut buckets = ClaimBuckets::default();
    for claim in claims {
        match ClaimBucket::for_status(claim.status()) {
            Some(bucket) => buckets.get_mut(bucket).push(claim),
            None => buckets.uncategorized.push(claim),
        }
    }
    buckets
}
