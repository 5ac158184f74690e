//! Request handlers

pub mod access;
pub mod claims;
pub mod health;
pub mod statuses;
pub mod transitions;
