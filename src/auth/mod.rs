//! Authentication, session cookies and role gating

pub mod cookie;
pub mod jwt;
pub mod middleware;
pub mod models;
pub mod password;
pub mod policy;

pub use cookie::{clear_cookie, session_cookie, token_from_headers, SESSION_COOKIE};
pub use jwt::{issue_token, verify_token, Claims};
pub use middleware::{maintenance_gate, role_gate, CurrentUser};
pub use models::{LoginRequest, LoginResponse, Role, SignupRequest, User, UserInfo};
pub use password::{hash_password, verify_password};
pub use policy::{evaluate, required_role, GateOutcome};
