//! Claim record as returned by the claims backend
//!
//! The backend owns the claim schema. Only `status` is required here; the id is
//! kept opaque and may be absent on claim lists built by the caller.
//! The fields the dashboards read are typed, and everything else is kept verbatim
//! in `extra` so a record survives a round trip untouched.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use core_kernel::ClaimRef;
use crate::error::ClaimError;
use crate::status::{ClaimStatus, StatusCode};

/// A claim as seen by the portal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimRecord {
    /// Backend identifier, as sent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ClaimRef>,
    /// Human-facing claim number
    #[serde(default, alias = "claimNumber", skip_serializing_if = "Option::is_none")]
    pub claim_number: Option<String>,
    /// Raw status; may be canonical, legacy, or unknown
    pub status: String,
    /// Claimed amount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(default, alias = "providerName", skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
    #[serde(default, alias = "patientName", skip_serializing_if = "Option::is_none")]
    pub patient_name: Option<String>,
    #[serde(default, alias = "submittedAt", skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
    /// Reviewer notes from the last status change
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Backend fields the portal does not interpret
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ClaimRecord {
    /// Creates a minimal record
    pub fn new(id: impl Into<ClaimRef>, status: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::from_status(status)
        }
    }

    /// Creates a record that carries only a status
    pub fn from_status(status: impl Into<String>) -> Self {
        Self {
            id: None,
            claim_number: None,
            status: status.into(),
            amount: None,
            provider_name: None,
            patient_name: None,
            submitted_at: None,
            notes: None,
            extra: Map::new(),
        }
    }

    /// Decodes a backend JSON payload
    pub fn from_value(value: Value) -> Result<Self, ClaimError> {
        serde_json::from_value(value).map_err(|e| ClaimError::MalformedResponse(e.to_string()))
    }

    /// The normalized status
    pub fn status_code(&self) -> StatusCode<'_> {
        StatusCode::parse(&self.status)
    }

    /// The canonical status, if the raw status is canonical
    pub fn canonical_status(&self) -> Option<ClaimStatus> {
        self.status_code().canonical()
    }

    /// Whether the claim has reached an end state, by display semantics
    pub fn is_terminal(&self) -> bool {
        self.status_code().config().is_terminal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::ClaimId;
    use serde_json::json;

    #[test]
    fn test_decodes_minimal_payload() {
        let id = ClaimId::new();
        let record = ClaimRecord::from_value(json!({
            "id": id.as_uuid().to_string(),
            "status": "PENDING_MEDICAL",
        }))
        .unwrap();

        assert_eq!(record.id, Some(ClaimRef::from(id)));
        assert_eq!(record.canonical_status(), Some(ClaimStatus::PendingMedical));
        assert!(record.amount.is_none());
        assert!(record.extra.is_empty());
    }

    #[test]
    fn test_keeps_unknown_fields() {
        let id = ClaimId::new();
        let record = ClaimRecord::from_value(json!({
            "id": id.as_uuid().to_string(),
            "status": "PAID",
            "claimNumber": "CLM-2024-0042",
            "amount": "125.50",
            "serviceType": "LAB",
        }))
        .unwrap();

        assert_eq!(record.claim_number.as_deref(), Some("CLM-2024-0042"));
        assert_eq!(record.extra.get("serviceType"), Some(&json!("LAB")));
        assert!(record.is_terminal());

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["serviceType"], "LAB");
    }

    #[test]
    fn test_decodes_status_only_payload() {
        let record = ClaimRecord::from_value(json!({ "status": "PENDING_MEDICAL" })).unwrap();
        assert_eq!(record.id, None);
        assert_eq!(record, ClaimRecord::from_status("PENDING_MEDICAL"));
        assert!(serde_json::to_value(&record).unwrap().get("id").is_none());
    }

    #[test]
    fn test_decodes_numeric_id() {
        let record = ClaimRecord::from_value(json!({ "id": 42, "status": "PAID" })).unwrap();
        assert_eq!(record.id, Some(ClaimRef::Number(42)));
        assert_eq!(serde_json::to_value(&record).unwrap()["id"], 42);
    }

    #[test]
    fn test_missing_status_is_malformed() {
        let result = ClaimRecord::from_value(json!({ "id": ClaimId::new().as_uuid().to_string() }));
        assert!(matches!(result, Err(ClaimError::MalformedResponse(_))));
    }

    #[test]
    fn test_legacy_status_is_not_canonical() {
        let record = ClaimRecord::new(ClaimId::new(), "REJECTED");
        assert_eq!(record.canonical_status(), None);
        assert!(record.is_terminal());
    }
}
