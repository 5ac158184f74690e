//! Property-Based Test Generators
//!
//! Provides proptest strategies for status strings and claim lists.

use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::{ClaimId, Role};
use domain_claims::{ClaimRecord, ClaimStatus, LegacyStatus};

/// Strategy for canonical statuses
pub fn claim_status_strategy() -> impl Strategy<Value = ClaimStatus> {
    prop::sample::select(ClaimStatus::ALL.to_vec())
}

/// Strategy for legacy aliases
pub fn legacy_status_strategy() -> impl Strategy<Value = LegacyStatus> {
    prop::sample::select(LegacyStatus::ALL.to_vec())
}

/// Strategy for raw status strings: canonical, legacy, status-like noise, or arbitrary text
pub fn raw_status_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => claim_status_strategy().prop_map(|s| s.as_str().to_string()),
        1 => legacy_status_strategy().prop_map(|s| s.as_str().to_string()),
        1 => "[A-Z_]{0,30}",
        1 => ".*",
    ]
}

/// Strategy for sets of user roles
pub fn roles_strategy() -> impl Strategy<Value = Vec<Role>> {
    prop::sample::subsequence(Role::ALL.to_vec(), 0..=Role::ALL.len())
}

/// Strategy for claim amounts between 0.01 and 99,999.99
pub fn amount_strategy() -> impl Strategy<Value = Option<Decimal>> {
    prop::option::of((1i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2)))
}

/// Strategy for a single claim record with a raw status
pub fn claim_record_strategy() -> impl Strategy<Value = ClaimRecord> {
    (raw_status_strategy(), amount_strategy()).prop_map(|(status, amount)| ClaimRecord {
        amount,
        ..ClaimRecord::new(ClaimId::new(), status)
    })
}

/// Strategy for claim lists
pub fn claim_list_strategy(max_len: usize) -> impl Strategy<Value = Vec<ClaimRecord>> {
    prop::collection::vec(claim_record_strategy(), 0..=max_len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    proptest! {
        #[test]
        fn claim_records_have_unique_ids(claims in claim_list_strategy(20)) {
            let ids: HashSet<_> = claims.iter().filter_map(|c| c.id.clone()).collect();
            prop_assert_eq!(ids.len(), claims.len());
        }

        #[test]
        fn amounts_are_positive(amount in amount_strategy()) {
            if let Some(amount) = amount {
                prop_assert!(amount > Decimal::ZERO);
            }
        }
    }
}
