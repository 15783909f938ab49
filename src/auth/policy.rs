//! Route access policy
//!
//! A single static table maps route groups to the role they require; one gate
//! function consults it. Handlers never compare roles themselves.

use crate::auth::jwt::{verify_token, Claims};
use crate::auth::models::Role;

/// Route-group policy table. Matching is per path segment, so `/admin` does not
/// capture `/administrators`.
pub const ROUTE_POLICY: &[(&str, Role)] = &[
    ("/super-admin", Role::SuperAdmin),
    ("/analytics", Role::SuperAdmin),
    ("/admin", Role::Admin),
    ("/student", Role::Student),
    ("/api/super-admin", Role::SuperAdmin),
    ("/api/analytics", Role::SuperAdmin),
    ("/api/admin", Role::Admin),
    ("/api/student", Role::Student),
];

/// Role required for a request path, if the path falls in a gated group
pub fn required_role(path: &str) -> Option<Role> {
    ROUTE_POLICY
        .iter()
        .find(|(prefix, _)| path == *prefix || path.starts_with(&format!("{}/", prefix)))
        .map(|(_, role)| *role)
}

/// Outcome of gating one request
#[derive(Debug)]
pub enum GateOutcome {
    /// Route is not in any gated group
    Public,
    /// Token verified and role satisfies the policy
    Authorized(Claims),
    /// No token, expired token, or bad signature
    TokenInvalid,
    /// Token verified but role does not satisfy the policy
    Forbidden,
}

/// Evaluate the gate for a request: `Unauthenticated -> TokenInvalid | TokenValid
/// -> Authorized | Forbidden`. The protected handler is never partially executed.
pub fn evaluate(path: &str, token: Option<&str>, secret: &str) -> GateOutcome {
    let Some(required) = required_role(path) else {
        return GateOutcome::Public;
    };

    let Some(token) = token else {
        return GateOutcome::TokenInvalid;
    };

    let claims = match verify_token(token, secret) {
        Ok(claims) => claims,
        Err(_) => return GateOutcome::TokenInvalid,
    };

    if claims.role.satisfies(required) {
        GateOutcome::Authorized(claims)
    } else {
        GateOutcome::Forbidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::jwt::issue_token;
    use crate::auth::models::User;

    const SECRET: &str = "policy-test-secret";

    fn token_for(role: Role) -> String {
        let user = User::new(
            "gate".to_string(),
            "gate@algoforge.io".to_string(),
            "Gate".to_string(),
            "hash".to_string(),
            role,
        );
        issue_token(&user, SECRET, 1).unwrap()
    }

    #[test]
    fn test_required_role_lookup() {
        assert_eq!(required_role("/admin/leads"), Some(Role::Admin));
        assert_eq!(required_role("/super-admin"), Some(Role::SuperAdmin));
        assert_eq!(required_role("/analytics/overview"), Some(Role::SuperAdmin));
        assert_eq!(required_role("/api/admin/leads"), Some(Role::Admin));
        assert_eq!(required_role("/"), None);
        assert_eq!(required_role("/blog"), None);
        // Prefixes match whole segments only
        assert_eq!(required_role("/administrators"), None);
    }

    #[test]
    fn test_public_route_needs_no_token() {
        assert!(matches!(
            evaluate("/blog", None, SECRET),
            GateOutcome::Public
        ));
    }

    #[test]
    fn test_missing_token_is_invalid() {
        assert!(matches!(
            evaluate("/admin/leads", None, SECRET),
            GateOutcome::TokenInvalid
        ));
    }

    #[test]
    fn test_garbage_token_is_invalid() {
        assert!(matches!(
            evaluate("/admin/leads", Some("garbage"), SECRET),
            GateOutcome::TokenInvalid
        ));
    }

    #[test]
    fn test_admin_authorized_for_admin_group() {
        let token = token_for(Role::Admin);
        assert!(matches!(
            evaluate("/admin/leads", Some(&token), SECRET),
            GateOutcome::Authorized(_)
        ));
    }

    #[test]
    fn test_admin_forbidden_from_super_admin_group() {
        let token = token_for(Role::Admin);
        assert!(matches!(
            evaluate("/super-admin/users", Some(&token), SECRET),
            GateOutcome::Forbidden
        ));
        assert!(matches!(
            evaluate("/analytics/overview", Some(&token), SECRET),
            GateOutcome::Forbidden
        ));
    }

    #[test]
    fn test_super_admin_covers_admin_group() {
        let token = token_for(Role::SuperAdmin);
        assert!(matches!(
            evaluate("/admin/leads", Some(&token), SECRET),
            GateOutcome::Authorized(_)
        ));
    }

    #[test]
    fn test_student_forbidden_from_admin_group() {
        let token = token_for(Role::Student);
        assert!(matches!(
            evaluate("/api/admin/leads", Some(&token), SECRET),
            GateOutcome::Forbidden
        ));
    }
}
