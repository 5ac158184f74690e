//! Authentication and authorization

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use core_kernel::Role;
use domain_access::parse_roles;

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Role names as issued by the identity provider
    pub roles: Vec<String>,
    /// Expiration timestamp
    pub exp: i64,
    /// Issued at timestamp
    pub iat: i64,
}

impl Claims {
    /// Recognized portal roles; unknown names are dropped
    pub fn portal_roles(&self) -> Vec<Role> {
        parse_roles(&self.roles)
    }
}

/// Auth errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token expired")]
    TokenExpired,
    #[error("Missing role: {0}")]
    MissingRole(Role),
}

/// Creates a new JWT token
///
/// # Arguments
///
/// * `user_id` - User identifier
/// * `roles` - User's roles
/// * `secret` - JWT secret key
/// * `expiration_secs` - Token validity in seconds
pub fn create_token(
    user_id: &str,
    roles: &[Role],
    secret: &str,
    expiration_secs: u64,
) -> Result<String, AuthError> {
    let now = Utc::now();
    let exp = now + Duration::seconds(expiration_secs as i64);

    let claims = Claims {
        sub: user_id.to_string(),
        roles: roles.iter().map(|r| r.as_str().to_string()).collect(),
        exp: exp.timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| AuthError::InvalidToken)
}

/// Validates a JWT token
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, AuthError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        _ => AuthError::InvalidToken,
    })?;

    Ok(token_data.claims)
}

/// Checks if user has required role
pub fn has_role(claims: &Claims, required: Role) -> bool {
    claims.portal_roles().contains(&required)
}

/// Fails with [`AuthError::MissingRole`] unless the user holds `required`
pub fn require_role(claims: &Claims, required: Role) -> Result<(), AuthError> {
    if has_role(claims, required) {
        Ok(())
    } else {
        Err(AuthError::MissingRole(required))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_token_round_trip() {
        let token = create_token("user-1", &[Role::MedicalAdmin], SECRET, 60).unwrap();
        let claims = validate_token(&token, SECRET).unwrap();
        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.portal_roles(), vec![Role::MedicalAdmin]);
        assert!(has_role(&claims, Role::MedicalAdmin));
        assert!(require_role(&claims, Role::CoordinationAdmin).is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = create_token("user-1", &[Role::Client], SECRET, 60).unwrap();
        assert!(matches!(validate_token(&token, "other"), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_unknown_role_names_ignored() {
        let claims = Claims {
            sub: "user-2".to_string(),
            roles: vec!["lab-tech".to_string(), "admin".to_string()],
            exp: 0,
            iat: 0,
        };
        assert_eq!(claims.portal_roles(), vec![Role::LabTech]);
    }
}
