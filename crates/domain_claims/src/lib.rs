//! Claims Domain
//!
//! This crate implements the claim lifecycle state machine that every portal
//! surface consults before offering or submitting a status change.
//!
//! # Claim Lifecycle
//!
//! ```text
//! PENDING_MEDICAL -> APPROVED_MEDICAL -> AWAITING_COORDINATION_REVIEW -> APPROVED_FINAL -> PAYMENT_PENDING -> PAID
//!        |                                          |-> REJECTED_FINAL
//!        '-> REJECTED_MEDICAL                       |-> RETURNED_FOR_REVIEW  -> APPROVED_MEDICAL | REJECTED_MEDICAL
//!                                                   '-> RETURNED_TO_PROVIDER -> PENDING_MEDICAL
//! ```
//!
//! The tables are static and immutable. The query functions in [`state_machine`]
//! are pure and total over arbitrary strings; only [`workflow`] talks to the
//! backend.

pub mod status;
pub mod transitions;
pub mod role;
pub mod display;
pub mod progress;
pub mod state_machine;
pub mod categorize;
pub mod report;
pub mod claim;
pub mod workflow;
pub mod error;

pub use status::{ClaimStatus, LegacyStatus, StatusCode};
pub use transitions::{transition_table, INITIAL_STATUS};
pub use role::ActionRole;
pub use display::{ColorCategory, StatusDisplayConfig};
pub use categorize::{categorize_claims, ClaimBucket, ClaimBuckets, HasStatus};
pub use report::{BucketSummary, DashboardSummary};
pub use claim::ClaimRecord;
pub use workflow::{authorize_action, available_actions, ClaimAction, ClaimWorkflowService, Dashboard};
pub use error::ClaimError;
