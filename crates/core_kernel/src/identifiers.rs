//! Strongly-typed identifiers for portal entities
//!
//! Claim identifiers generated by the portal are UUID newtypes that serialize as
//! the bare UUID. Identifiers received from the backend are kept opaque in
//! [`ClaimRef`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates a new time-ordered identifier (v7)
            pub fn new_v7() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates from an existing UUID
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Returns the identifier prefix for display
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let uuid_str = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                Ok(Self(Uuid::parse_str(uuid_str)?))
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Uuid {
                id.0
            }
        }
    };
}

define_id!(ClaimId, "CLM");

/// Claim identifier exactly as the backend sent it
///
/// The backend owns claim ids and is not bound to UUIDs; numeric and
/// free-form string ids both appear. The portal only echoes them back in
/// endpoint paths, so it keeps them opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClaimRef {
    Number(i64),
    Text(String),
}

impl fmt::Display for ClaimRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClaimRef::Number(n) => write!(f, "{}", n),
            ClaimRef::Text(s) => f.write_str(s),
        }
    }
}

impl From<ClaimId> for ClaimRef {
    fn from(id: ClaimId) -> Self {
        ClaimRef::Text(id.as_uuid().to_string())
    }
}

impl From<i64> for ClaimRef {
    fn from(n: i64) -> Self {
        ClaimRef::Number(n)
    }
}

impl From<&str> for ClaimRef {
    fn from(s: &str) -> Self {
        ClaimRef::Text(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_id_display() {
        let id = ClaimId::new();
        assert!(id.to_string().starts_with("CLM-"));
    }

    #[test]
    fn test_id_parsing_accepts_prefixed_and_bare() {
        let original = ClaimId::new();
        let prefixed: ClaimId = original.to_string().parse().unwrap();
        let bare: ClaimId = original.as_uuid().to_string().parse().unwrap();
        assert_eq!(original, prefixed);
        assert_eq!(original, bare);
    }

    #[test]
    fn test_serializes_as_bare_uuid() {
        let id = ClaimId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.as_uuid()));
    }

    #[test]
    fn test_claim_ref_accepts_numbers_and_strings() {
        let number: ClaimRef = serde_json::from_str("42").unwrap();
        let text: ClaimRef = serde_json::from_str("\"CLM-2024-0042\"").unwrap();
        assert_eq!(number, ClaimRef::Number(42));
        assert_eq!(number.to_string(), "42");
        assert_eq!(text.to_string(), "CLM-2024-0042");
        assert_eq!(serde_json::to_string(&number).unwrap(), "42");
    }
}
