//! Session token issuing and verification

use crate::auth::models::{Role, User};
use crate::error::{Error, Result};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Signed claim set carried by the session cookie
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Username
    pub username: String,
    /// Email
    pub email: String,
    /// Display name
    pub name: String,
    /// Role embedded at login time
    pub role: Role,
    /// Issued at
    pub iat: i64,
    /// Expiration time
    pub exp: i64,
}

impl Claims {
    /// Create claims for a user with the given lifetime in hours
    pub fn from_user(user: &User, ttl_hours: i64) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            sub: user.id.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
            iat: now,
            exp: now + ttl_hours * 3600,
        }
    }

    /// Check if the claim set is past its expiry
    pub fn is_expired(&self) -> bool {
        chrono::Utc::now().timestamp() > self.exp
    }
}

/// Sign a session token for a user. Pure function of its inputs and the secret.
pub fn issue_token(user: &User, secret: &str, ttl_hours: i64) -> Result<String> {
    let claims = Claims::from_user(user, ttl_hours);
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| Error::Other(format!("Failed to sign token: {}", e)))
}

/// Validate and decode a session token.
///
/// Expired tokens and bad signatures fail with distinct errors; both map to 401
/// at the API boundary.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => Error::TokenExpired,
        _ => Error::TokenInvalid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    fn test_user(role: Role) -> User {
        User::new(
            "testuser".to_string(),
            "test@algoforge.io".to_string(),
            "Test User".to_string(),
            "not-a-real-hash".to_string(),
            role,
        )
    }

    #[test]
    fn test_issue_and_verify_token() {
        let user = test_user(Role::Admin);
        let token = issue_token(&user, SECRET, 24).expect("Failed to issue token");
        let claims = verify_token(&token, SECRET).expect("Failed to verify token");

        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.username, "testuser");
        assert_eq!(claims.role, Role::Admin);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_invalid_token() {
        let result = verify_token("invalid.token.here", SECRET);
        assert!(matches!(result, Err(Error::TokenInvalid)));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let user = test_user(Role::Student);
        let token = issue_token(&user, SECRET, 24).unwrap();
        let result = verify_token(&token, "another-secret");
        assert!(matches!(result, Err(Error::TokenInvalid)));
    }

    #[test]
    fn test_expired_token_rejected() {
        let user = test_user(Role::Student);
        // Negative lifetime puts exp well past the validation leeway
        let token = issue_token(&user, SECRET, -2).unwrap();
        let result = verify_token(&token, SECRET);
        assert!(matches!(result, Err(Error::TokenExpired)));
    }

    #[test]
    fn test_token_embeds_role() {
        let user = test_user(Role::SuperAdmin);
        let token = issue_token(&user, SECRET, 1).unwrap();
        let claims = verify_token(&token, SECRET).unwrap();
        assert_eq!(claims.role, Role::SuperAdmin);
        assert!(claims.exp - claims.iat <= 3600);
    }
}
