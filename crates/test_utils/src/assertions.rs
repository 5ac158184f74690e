//! Custom Test Assertions
//!
//! Assertion helpers for the claim tables that name the offending status
//! instead of just failing an `assert!`.

use std::collections::HashSet;

use domain_claims::{ClaimBucket, ClaimBuckets, ClaimRecord, ClaimStatus, INITIAL_STATUS};

/// Asserts that every status can be reached from the initial status
///
/// Every transition target is a `ClaimStatus`, so the table is closed by type.
/// What can still go wrong is a status no path leads to.
pub fn assert_all_statuses_reachable() {
    let mut seen = HashSet::from([INITIAL_STATUS]);
    let mut frontier = vec![INITIAL_STATUS];
    while let Some(status) = frontier.pop() {
        for next in status.next_statuses() {
            if seen.insert(*next) {
                frontier.push(*next);
            }
        }
    }
    for status in ClaimStatus::ALL {
        assert!(
            seen.contains(&status),
            "{} cannot be reached from {}",
            status,
            INITIAL_STATUS
        );
    }
}

/// Asserts that no status transitions to itself
pub fn assert_no_self_loops() {
    for status in ClaimStatus::ALL {
        assert!(
            !status.can_transition_to(status),
            "{} transitions to itself",
            status
        );
    }
}

/// Asserts that the config's terminal flag agrees with the transition table
pub fn assert_terminal_consistency() {
    for status in ClaimStatus::ALL {
        assert_eq!(
            status.config().is_terminal,
            status.next_statuses().is_empty(),
            "Terminal flag for {} disagrees with the transition table",
            status
        );
    }
}

/// Asserts that each input claim appears exactly once across the buckets
///
/// Claims are matched by address since ids may be missing or repeated.
pub fn assert_buckets_partition(input: &[ClaimRecord], buckets: &ClaimBuckets<&ClaimRecord>) {
    for claim in input {
        let same = |c: &&&ClaimRecord| std::ptr::eq(**c, claim);
        let mut hits = buckets.uncategorized.iter().filter(same).count();
        for bucket in ClaimBucket::ALL {
            hits += buckets.get(bucket).iter().filter(same).count();
        }
        assert_eq!(
            hits, 1,
            "Claim {:?} with status {:?} appears in {} buckets",
            claim.id, claim.status, hits
        );
    }
    assert_eq!(buckets.len(), input.len(), "Bucket sizes do not add up to the input");
}
