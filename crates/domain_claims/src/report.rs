//! Dashboard summary figures for the insurance manager's report view

use rust_decimal::Decimal;
use serde::Serialize;
use std::borrow::Borrow;

use crate::categorize::{ClaimBucket, ClaimBuckets};
use crate::claim::ClaimRecord;

/// Count and claimed total for one bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketSummary {
    pub bucket: ClaimBucket,
    pub count: usize,
    pub total_amount: Decimal,
}

/// Totals across every bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub buckets: Vec<BucketSummary>,
    pub uncategorized: usize,
    pub total_claims: usize,
    /// Sum over all claims, uncategorized included; missing amounts count as zero
    pub total_amount: Decimal,
}

impl DashboardSummary {
    pub fn bucket(&self, bucket: ClaimBucket) -> Option<&BucketSummary> {
        self.buckets.iter().find(|summary| summary.bucket == bucket)
    }
}

fn sum_amounts<T: Borrow<ClaimRecord>>(claims: &[T]) -> Decimal {
    claims
        .iter()
        .filter_map(|claim| <T as Borrow<ClaimRecord>>::borrow(claim).amount)
        .sum()
}

impl<T: Borrow<ClaimRecord>> ClaimBuckets<T> {
    /// Summarizes the buckets in [`ClaimBucket::ALL`] order
    pub fn summary(&self) -> DashboardSummary {
        let buckets: Vec<BucketSummary> = ClaimBucket::ALL
            .iter()
            .map(|bucket| {
                let claims = self.get(*bucket);
                BucketSummary {
                    bucket: *bucket,
                    count: claims.len(),
                    total_amount: sum_amounts(claims),
                }
            })
            .collect();

        let total_amount = buckets
            .iter()
            .map(|summary| summary.total_amount)
            .sum::<Decimal>()
            + sum_amounts(&self.uncategorized);

        DashboardSummary {
            buckets,
            uncategorized: self.uncategorized.len(),
            total_claims: self.len(),
            total_amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categorize::categorize_claims;
    use rust_decimal_macros::dec;

    fn claim(status: &str, amount: Option<Decimal>) -> ClaimRecord {
        ClaimRecord {
            amount,
            ..ClaimRecord::from_status(status)
        }
    }

    #[test]
    fn test_summary_totals() {
        let claims = vec![
            claim("PENDING_MEDICAL", Some(dec!(100.00))),
            claim("RETURNED_FOR_REVIEW", Some(dec!(50.25))),
            claim("PAID", Some(dec!(300))),
            claim("APPROVED", None),
            claim("MYSTERY", Some(dec!(10))),
        ];

        let summary = categorize_claims(&claims).summary();

        let pending = summary.bucket(ClaimBucket::PendingMedical).unwrap();
        assert_eq!(pending.count, 2);
        assert_eq!(pending.total_amount, dec!(150.25));

        let approved = summary.bucket(ClaimBucket::Approved).unwrap();
        assert_eq!(approved.count, 2);
        assert_eq!(approved.total_amount, dec!(300));

        assert_eq!(summary.uncategorized, 1);
        assert_eq!(summary.total_claims, 5);
        assert_eq!(summary.total_amount, dec!(460.25));
    }

    #[test]
    fn test_empty_summary_lists_every_bucket() {
        let claims: Vec<ClaimRecord> = Vec::new();
        let summary = categorize_claims(&claims).summary();
        assert_eq!(summary.buckets.len(), ClaimBucket::ALL.len());
        assert_eq!(summary.total_amount, Decimal::ZERO);
        assert!(summary.buckets.iter().all(|b| b.count == 0));
    }
}
