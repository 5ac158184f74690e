//! Portal user roles
//!
//! Roles arrive from the identity provider as loosely formatted strings
//! (`"lab-tech"`, `"LAB_TECH"`, `"labTech"`). They are normalized once here so the
//! claim and access tables only ever compare enum values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// A role held by a portal user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Insured member submitting their own claims
    Client,
    Doctor,
    Pharmacist,
    LabTech,
    Radiologist,
    /// First-line clinical reviewer
    MedicalAdmin,
    /// Final financial/administrative decision maker
    CoordinationAdmin,
    /// Read-only reporting across all claims
    InsuranceManager,
}

impl Role {
    /// Every role, in dashboard priority order
    pub const ALL: [Role; 8] = [
        Role::InsuranceManager,
        Role::CoordinationAdmin,
        Role::MedicalAdmin,
        Role::Doctor,
        Role::Pharmacist,
        Role::LabTech,
        Role::Radiologist,
        Role::Client,
    ];

    /// Returns the canonical wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Client => "CLIENT",
            Role::Doctor => "DOCTOR",
            Role::Pharmacist => "PHARMACIST",
            Role::LabTech => "LAB_TECH",
            Role::Radiologist => "RADIOLOGIST",
            Role::MedicalAdmin => "MEDICAL_ADMIN",
            Role::CoordinationAdmin => "COORDINATION_ADMIN",
            Role::InsuranceManager => "INSURANCE_MANAGER",
        }
    }

    /// Returns true for roles that originate claims on behalf of a patient
    pub fn is_healthcare_provider(&self) -> bool {
        matches!(
            self,
            Role::Doctor | Role::Pharmacist | Role::LabTech | Role::Radiologist
        )
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_uppercase())
            .collect();

        match key.as_str() {
            "CLIENT" => Ok(Role::Client),
            "DOCTOR" => Ok(Role::Doctor),
            "PHARMACIST" => Ok(Role::Pharmacist),
            "LABTECH" => Ok(Role::LabTech),
            "RADIOLOGIST" => Ok(Role::Radiologist),
            "MEDICALADMIN" => Ok(Role::MedicalAdmin),
            "COORDINATIONADMIN" => Ok(Role::CoordinationAdmin),
            "INSURANCEMANAGER" => Ok(Role::InsuranceManager),
            _ => Err(CoreError::validation(format!("Unknown role: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_common_spellings() {
        assert_eq!("LAB_TECH".parse::<Role>().unwrap(), Role::LabTech);
        assert_eq!("lab-tech".parse::<Role>().unwrap(), Role::LabTech);
        assert_eq!("labTech".parse::<Role>().unwrap(), Role::LabTech);
        assert_eq!(" medical_admin ".parse::<Role>().unwrap(), Role::MedicalAdmin);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("superuser".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for role in Role::ALL {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_healthcare_providers() {
        assert!(Role::Radiologist.is_healthcare_provider());
        assert!(!Role::Client.is_healthcare_provider());
        assert!(!Role::MedicalAdmin.is_healthcare_provider());
    }
}
