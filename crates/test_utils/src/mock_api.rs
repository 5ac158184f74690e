//! In-memory claims backend
//!
//! Implements [`ApiClient`] over a list of claim JSON documents so workflow
//! tests run without a network. Every call is recorded, failures can be
//! injected, and PATCH requests can be held open to exercise the in-flight guard.

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Semaphore;

use core_kernel::{ApiClient, DomainPort, PortError};
use domain_claims::ClaimRecord;

/// HTTP method of a recorded call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Patch,
}

/// A request the mock received
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: Method,
    pub endpoint: String,
    pub body: Option<Value>,
}

/// In-memory `ApiClient` adapter
#[derive(Default)]
pub struct InMemoryApi {
    claims: Mutex<Vec<Value>>,
    calls: Mutex<Vec<RecordedCall>>,
    next_failure: Mutex<Option<PortError>>,
    patch_gate: Mutex<Option<Arc<Semaphore>>>,
}

impl InMemoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend seeded with the given claims
    pub fn with_claims(claims: impl IntoIterator<Item = ClaimRecord>) -> Self {
        let api = Self::new();
        for claim in claims {
            api.insert(claim);
        }
        api
    }

    /// Stores a claim, replacing any claim with the same id
    pub fn insert(&self, claim: ClaimRecord) {
        let value = serde_json::to_value(&claim).unwrap_or(Value::Null);
        self.insert_raw(value);
    }

    /// Stores a raw JSON document, replacing any document with the same id
    pub fn insert_raw(&self, value: Value) {
        let mut claims = lock(&self.claims);
        let id = id_text(&value);
        match claims.iter_mut().find(|c| id.is_some() && id_text(c) == id) {
            Some(existing) => *existing = value,
            None => claims.push(value),
        }
    }

    /// The stored document for a claim id
    pub fn stored(&self, id: &str) -> Option<Value> {
        lock(&self.claims)
            .iter()
            .find(|c| id_text(c).as_deref() == Some(id))
            .cloned()
    }

    /// Makes the next call fail with `error`
    pub fn fail_next(&self, error: PortError) {
        *lock(&self.next_failure) = Some(error);
    }

    /// Holds every PATCH until a permit is added to the returned semaphore
    pub fn hold_patches(&self) -> Arc<Semaphore> {
        let gate = Arc::new(Semaphore::new(0));
        *lock(&self.patch_gate) = Some(Arc::clone(&gate));
        gate
    }

    /// All calls received so far
    pub fn calls(&self) -> Vec<RecordedCall> {
        lock(&self.calls).clone()
    }

    /// Number of PATCH calls received so far
    pub fn patch_count(&self) -> usize {
        lock(&self.calls)
            .iter()
            .filter(|c| c.method == Method::Patch)
            .count()
    }

    fn record(&self, method: Method, endpoint: &str, body: Option<Value>) -> Result<(), PortError> {
        lock(&self.calls).push(RecordedCall {
            method,
            endpoint: endpoint.to_string(),
            body,
        });
        match lock(&self.next_failure).take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A document's id as it appears in an endpoint path
fn id_text(claim: &Value) -> Option<String> {
    match claim.get("id")? {
        Value::String(id) => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

/// Splits `/claims/{id}[/{segment}]` into the id
fn claim_id_from(endpoint: &str) -> Option<&str> {
    let mut parts = endpoint.trim_start_matches('/').split('/');
    match (parts.next(), parts.next()) {
        (Some("claims"), Some(id)) if !id.is_empty() => Some(id),
        _ => None,
    }
}

impl DomainPort for InMemoryApi {}

#[async_trait]
impl ApiClient for InMemoryApi {
    async fn get(&self, endpoint: &str) -> Result<Value, PortError> {
        self.record(Method::Get, endpoint, None)?;

        if endpoint.trim_end_matches('/') == "/claims" {
            return Ok(Value::Array(lock(&self.claims).clone()));
        }
        let id = claim_id_from(endpoint).ok_or_else(|| PortError::not_found("Endpoint", endpoint))?;
        self.stored(id).ok_or_else(|| PortError::not_found("Claim", id))
    }

    async fn patch(&self, endpoint: &str, body: Option<Value>) -> Result<Value, PortError> {
        self.record(Method::Patch, endpoint, body.clone())?;

        let gate = lock(&self.patch_gate).clone();
        if let Some(gate) = gate {
            gate.acquire()
                .await
                .map_err(|e| PortError::internal(e.to_string()))?
                .forget();
        }

        let id = claim_id_from(endpoint).ok_or_else(|| PortError::not_found("Endpoint", endpoint))?;
        let mut claims = lock(&self.claims);
        let claim = claims
            .iter_mut()
            .find(|c| id_text(c).as_deref() == Some(id))
            .ok_or_else(|| PortError::not_found("Claim", id))?;

        let body = body.ok_or_else(|| PortError::validation("missing request body"))?;
        let status = body
            .get("status")
            .cloned()
            .ok_or_else(|| PortError::validation("missing status"))?;
        if let Some(object) = claim.as_object_mut() {
            object.insert("status".to_string(), status);
            if let Some(notes) = body.get("notes").filter(|n| !n.is_null()) {
                object.insert("notes".to_string(), notes.clone());
            }
        }
        Ok(claim.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{ClaimId, ClaimRef};
    use serde_json::json;

    #[test]
    fn test_claim_id_from_endpoint() {
        assert_eq!(claim_id_from("/claims/abc"), Some("abc"));
        assert_eq!(claim_id_from("/claims/abc/approve"), Some("abc"));
        assert_eq!(claim_id_from("/claims"), None);
        assert_eq!(claim_id_from("/users/abc"), None);
    }

    #[tokio::test]
    async fn test_patch_updates_status() {
        let id = ClaimId::new();
        let api = InMemoryApi::with_claims([ClaimRecord::new(id, "PENDING_MEDICAL")]);
        let endpoint = format!("/claims/{}/approve-medical", ClaimRef::from(id));

        let updated = api
            .patch(&endpoint, Some(json!({ "status": "APPROVED_MEDICAL", "notes": null })))
            .await
            .unwrap();

        assert_eq!(updated["status"], "APPROVED_MEDICAL");
        assert!(updated.get("notes").is_none());
        assert_eq!(api.patch_count(), 1);
    }

    #[tokio::test]
    async fn test_numeric_ids_match_endpoints() {
        let api = InMemoryApi::new();
        api.insert_raw(json!({ "id": 12, "status": "PAYMENT_PENDING" }));

        assert_eq!(api.get("/claims/12").await.unwrap()["status"], "PAYMENT_PENDING");
        let updated = api
            .patch("/claims/12/mark-paid", Some(json!({ "status": "PAID" })))
            .await
            .unwrap();
        assert_eq!(updated["id"], 12);
        assert_eq!(api.stored("12").unwrap()["status"], "PAID");
    }

    #[tokio::test]
    async fn test_injected_failure_is_consumed() {
        let api = InMemoryApi::new();
        api.fail_next(PortError::connection("refused"));
        assert!(api.get("/claims").await.is_err());
        assert_eq!(api.get("/claims").await.unwrap(), json!([]));
    }
}
