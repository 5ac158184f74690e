//! Ownership of the next action on a claim

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::Role;

/// The actor group expected to move a claim out of its current status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionRole {
    MedicalAdmin,
    CoordinationAdmin,
    /// Whoever originated the claim: a healthcare provider or the client
    Provider,
}

impl ActionRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionRole::MedicalAdmin => "MEDICAL_ADMIN",
            ActionRole::CoordinationAdmin => "COORDINATION_ADMIN",
            ActionRole::Provider => "PROVIDER",
        }
    }

    /// Checks whether a single user role belongs to this group
    pub fn includes(&self, role: Role) -> bool {
        match self {
            ActionRole::MedicalAdmin => role == Role::MedicalAdmin,
            ActionRole::CoordinationAdmin => role == Role::CoordinationAdmin,
            ActionRole::Provider => role.is_healthcare_provider() || role == Role::Client,
        }
    }

    /// Checks whether any of the user's roles belongs to this group
    pub fn is_held_by(&self, roles: &[Role]) -> bool {
        roles.iter().any(|role| self.includes(*role))
    }
}

impl fmt::Display for ActionRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
