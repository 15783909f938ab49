//! Authentication models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User roles for authorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    /// Enrolled student - access to the student area only
    Student,
    /// Staff - access to the admin dashboards
    Admin,
    /// Operator - full access including analytics and user management
    SuperAdmin,
}

impl Role {
    /// Whether this role satisfies a required role.
    /// Roles are ordered: super-admin covers admin, admin covers student.
    pub fn satisfies(&self, required: Role) -> bool {
        self >= &required
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Student => write!(f, "student"),
            Role::Admin => write!(f, "admin"),
            Role::SuperAdmin => write!(f, "super-admin"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "student" => Ok(Role::Student),
            "admin" => Ok(Role::Admin),
            "super-admin" => Ok(Role::SuperAdmin),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

/// User record as persisted in the document store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: String,
    /// Username for login (unique)
    pub username: String,
    /// Email for login (unique)
    pub email: String,
    /// Display name
    pub name: String,
    /// One-way bcrypt hash, never serialized out to clients
    pub password_hash: String,
    /// User's role
    pub role: Role,
    /// Soft-disable flag; inactive users cannot log in
    pub is_active: bool,
    /// Whether the email address has been verified
    pub email_verified: bool,
    /// When the account was created
    pub created_at: DateTime<Utc>,
    /// Last successful login
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    /// Create a new active user with an already-hashed password
    pub fn new(
        username: String,
        email: String,
        name: String,
        password_hash: String,
        role: Role,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            username,
            email,
            name,
            password_hash,
            role,
            is_active: true,
            email_verified: false,
            created_at: Utc::now(),
            last_login: None,
        }
    }
}

/// Login credentials; `identifier` accepts username or email
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(alias = "email")]
    pub username: String,
    pub password: String,
    pub role: Role,
}

/// Login response with token
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: UserInfo,
    pub token: String,
}

/// Student self-signup payload
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub name: String,
    pub password: String,
}

/// User information in responses (no password hash)
#[derive(Debug, Clone, Serialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub is_active: bool,
    pub email_verified: bool,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            name: user.name,
            role: user.role,
            is_active: user.is_active,
            email_verified: user.email_verified,
            created_at: user.created_at,
            last_login: user.last_login,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_ordering() {
        assert!(Role::SuperAdmin.satisfies(Role::Admin));
        assert!(Role::SuperAdmin.satisfies(Role::Student));
        assert!(Role::Admin.satisfies(Role::Student));
        assert!(!Role::Student.satisfies(Role::Admin));
        assert!(!Role::Admin.satisfies(Role::SuperAdmin));
    }

    #[test]
    fn test_role_display_round_trip() {
        for role in [Role::Student, Role::Admin, Role::SuperAdmin] {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_role_serde_kebab_case() {
        let json = serde_json::to_string(&Role::SuperAdmin).unwrap();
        assert_eq!(json, "\"super-admin\"");
    }
}
