//! Claims handlers
//!
//! The portal does not store claims. These endpoints classify claim lists the
//! caller already holds. Ids are optional; a list of bare statuses is enough.

use axum::Json;
use tracing::debug;

use domain_claims::{categorize_claims, ClaimRecord, Dashboard, DashboardSummary};

use crate::extract::ApiJson;

/// Buckets claims for the dashboards
pub async fn categorize(ApiJson(claims): ApiJson<Vec<ClaimRecord>>) -> Json<Dashboard> {
    debug!(count = claims.len(), "Categorizing claims");
    let buckets = categorize_claims(claims);
    let summary = buckets.summary();
    Json(Dashboard { buckets, summary })
}

/// Summary figures only, for the reporting views
pub async fn summary(ApiJson(claims): ApiJson<Vec<ClaimRecord>>) -> Json<DashboardSummary> {
    Json(categorize_claims(&claims).summary())
}
