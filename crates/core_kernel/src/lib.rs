//! Core Kernel - Foundational types shared by the claims portal crates
//!
//! This crate provides the building blocks used across all domain modules:
//! - Strongly-typed identifiers
//! - Portal user roles
//! - The `ApiClient` port through which the claims backend is reached

pub mod identifiers;
pub mod role;
pub mod ports;
pub mod error;

pub use identifiers::{ClaimId, ClaimRef};
pub use role::Role;
pub use ports::{ApiClient, DomainPort, PortError};
pub use error::CoreError;
