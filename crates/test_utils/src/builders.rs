//! Test Data Builders
//!
//! Provides builder patterns for constructing claim records with sensible defaults.
//! Tests specify only the fields they care about.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde_json::{Map, Value};

use core_kernel::ClaimRef;
use domain_claims::ClaimRecord;

use crate::fixtures::{ClaimFixtures, IdFixtures};

/// Builder for constructing test claim records
pub struct ClaimRecordBuilder {
    id: Option<ClaimRef>,
    claim_number: Option<String>,
    status: String,
    amount: Option<Decimal>,
    provider_name: Option<String>,
    patient_name: Option<String>,
    submitted_at: Option<DateTime<Utc>>,
    notes: Option<String>,
    extra: Map<String, Value>,
}

impl Default for ClaimRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimRecordBuilder {
    /// Creates a new builder for a pending claim with a consultation amount
    pub fn new() -> Self {
        let id = IdFixtures::claim_id();
        Self {
            id: Some(id.into()),
            claim_number: Some(format!("CLM-{}", &id.as_uuid().simple().to_string()[..8])),
            status: "PENDING_MEDICAL".to_string(),
            amount: Some(ClaimFixtures::consultation_amount()),
            provider_name: Some("Dr. Amina Okafor".to_string()),
            patient_name: Some("Jordan Lee".to_string()),
            submitted_at: Some(ClaimFixtures::submitted_at()),
            notes: None,
            extra: Map::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<ClaimRef>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Drops the id, as in caller-built claim lists
    pub fn without_id(mut self) -> Self {
        self.id = None;
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn without_amount(mut self) -> Self {
        self.amount = None;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Adds a backend field the portal does not model
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Builds the record
    pub fn build(self) -> ClaimRecord {
        ClaimRecord {
            id: self.id,
            claim_number: self.claim_number,
            status: self.status,
            amount: self.amount,
            provider_name: self.provider_name,
            patient_name: self.patient_name,
            submitted_at: self.submitted_at,
            notes: self.notes,
            extra: self.extra,
        }
    }

    /// Builds the record as backend JSON
    pub fn build_json(self) -> Value {
        serde_json::to_value(self.build()).unwrap_or(Value::Null)
    }
}
