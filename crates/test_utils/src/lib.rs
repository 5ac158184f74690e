//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! claims portal test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built status strings, roles and claims
//! - `builders`: Builder for claim records
//! - `mock_api`: In-memory `ApiClient` adapter
//! - `assertions`: Assertion helpers for the claim tables
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod mock_api;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use mock_api::*;
pub use assertions::*;
pub use generators::*;
