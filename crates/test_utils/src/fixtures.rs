//! Pre-built Test Fixtures
//!
//! Provides ready-to-use claim data covering every status the portal can see:
//! canonical, legacy, and unrecognized.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use core_kernel::{ClaimId, Role};
use domain_claims::{ClaimRecord, ClaimStatus, LegacyStatus};

/// Fixture for status strings
pub struct StatusFixtures;

impl StatusFixtures {
    /// Every canonical status string
    pub fn canonical() -> Vec<&'static str> {
        ClaimStatus::ALL.iter().map(|s| s.as_str()).collect()
    }

    /// Every legacy alias string
    pub fn legacy() -> Vec<&'static str> {
        LegacyStatus::ALL.iter().map(|s| s.as_str()).collect()
    }

    /// Strings the table does not know, including near misses
    pub fn unknown() -> Vec<&'static str> {
        vec![
            "",
            " ",
            "SOME_UNKNOWN_STATUS",
            "pending_medical",
            "PENDING_MEDICAL ",
            "PAID\n",
            "null",
            "ÄPPROVED",
        ]
    }

    /// Canonical, legacy and unknown strings together
    pub fn everything() -> Vec<&'static str> {
        let mut all = Self::canonical();
        all.extend(Self::legacy());
        all.extend(Self::unknown());
        all
    }
}

/// Fixture for identifiers
pub struct IdFixtures;

impl IdFixtures {
    /// A fixed claim ID for deterministic tests
    pub fn fixed_claim_id() -> ClaimId {
        ClaimId::from_uuid(Uuid::from_u128(0x0191_2f3c_7a00_7000_8000_0000_0000_0001))
    }

    /// A new random claim ID
    pub fn claim_id() -> ClaimId {
        ClaimId::new_v7()
    }
}

/// Fixture for user role sets
pub struct RoleFixtures;

impl RoleFixtures {
    pub fn medical_admin() -> Vec<Role> {
        vec![Role::MedicalAdmin]
    }

    pub fn coordination_admin() -> Vec<Role> {
        vec![Role::CoordinationAdmin]
    }

    pub fn doctor() -> Vec<Role> {
        vec![Role::Doctor]
    }

    pub fn client() -> Vec<Role> {
        vec![Role::Client]
    }

    pub fn insurance_manager() -> Vec<Role> {
        vec![Role::InsuranceManager]
    }
}

/// Fixture for claim amounts and dates
pub struct ClaimFixtures;

impl ClaimFixtures {
    pub fn consultation_amount() -> Decimal {
        dec!(150.00)
    }

    pub fn imaging_amount() -> Decimal {
        dec!(820.50)
    }

    pub fn submitted_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap()
    }

    /// A freshly submitted claim
    pub fn pending_medical() -> ClaimRecord {
        crate::builders::ClaimRecordBuilder::new()
            .with_status(ClaimStatus::PendingMedical.as_str())
            .build()
    }

    /// One claim in each canonical status
    pub fn one_per_status() -> Vec<ClaimRecord> {
        ClaimStatus::ALL
            .iter()
            .map(|status| {
                crate::builders::ClaimRecordBuilder::new()
                    .with_status(status.as_str())
                    .build()
            })
            .collect()
    }
}
