//! Authentication and authorization tests

use algoforge::auth::{
    clear_cookie, evaluate, hash_password, issue_token, required_role, session_cookie,
    verify_password, verify_token, GateOutcome, Role, User,
};
use algoforge::error::Error;

const SECRET: &str = "integration-test-secret";

fn make_user(username: &str, role: Role) -> User {
    User::new(
        username.to_string(),
        format!("{}@algoforge.io", username),
        username.to_string(),
        hash_password("Algoforge@1980").unwrap(),
        role,
    )
}

#[test]
fn test_token_round_trip() {
    let user = make_user("admin", Role::Admin);
    let token = issue_token(&user, SECRET, 24).expect("Failed to issue token");
    assert_eq!(token.split('.').count(), 3); // JWT format: header.payload.signature

    let claims = verify_token(&token, SECRET).expect("Failed to verify token");
    assert_eq!(claims.sub, user.id);
    assert_eq!(claims.username, "admin");
    assert_eq!(claims.role, Role::Admin);
    assert!(!claims.is_expired());
}

#[test]
fn test_token_role_matches_stored_role() {
    for role in [Role::Student, Role::Admin, Role::SuperAdmin] {
        let user = make_user("someone", role);
        let token = issue_token(&user, SECRET, 1).unwrap();
        let claims = verify_token(&token, SECRET).unwrap();
        assert_eq!(claims.role, role);
    }
}

#[test]
fn test_expired_token_fails_with_expired() {
    let user = make_user("old", Role::Student);
    let token = issue_token(&user, SECRET, -2).unwrap();
    assert!(matches!(
        verify_token(&token, SECRET),
        Err(Error::TokenExpired)
    ));
}

#[test]
fn test_tampered_token_fails_with_invalid() {
    let user = make_user("victim", Role::Student);
    let token = issue_token(&user, SECRET, 24).unwrap();

    // Flip a character in the signature segment
    let mut parts: Vec<String> = token.split('.').map(String::from).collect();
    let sig = parts[2].clone();
    let flipped = if sig.starts_with('A') { "B" } else { "A" };
    parts[2] = format!("{}{}", flipped, &sig[1..]);
    let tampered = parts.join(".");

    assert!(matches!(
        verify_token(&tampered, SECRET),
        Err(Error::TokenInvalid)
    ));
}

#[test]
fn test_malformed_token_rejection() {
    assert!(verify_token("not-a-jwt-token", SECRET).is_err());
    assert!(verify_token("", SECRET).is_err());
}

#[test]
fn test_password_hash_round_trip() {
    let hash = hash_password("Algoforge@1980").unwrap();
    assert!(verify_password("Algoforge@1980", &hash));
    assert!(!verify_password("Algoforge@1981", &hash));
}

#[test]
fn test_session_cookie_shape() {
    let cookie = session_cookie("tok", 24, false);
    assert!(cookie.starts_with("token=tok"));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Path=/"));
    assert!(cookie.contains("SameSite=Strict"));
    assert!(cookie.contains("Max-Age=86400"));

    let cleared = clear_cookie(true);
    assert!(cleared.contains("Max-Age=0"));
    assert!(cleared.contains("Secure"));
}

#[test]
fn test_policy_table_groups() {
    assert_eq!(required_role("/admin"), Some(Role::Admin));
    assert_eq!(required_role("/admin/anything/nested"), Some(Role::Admin));
    assert_eq!(required_role("/super-admin"), Some(Role::SuperAdmin));
    assert_eq!(required_role("/analytics"), Some(Role::SuperAdmin));
    assert_eq!(required_role("/api/admin/leads"), Some(Role::Admin));
    assert_eq!(required_role("/api/analytics/overview"), Some(Role::SuperAdmin));
    assert_eq!(required_role("/api/leads"), None);
    assert_eq!(required_role("/login"), None);
}

#[test]
fn test_gate_full_state_machine() {
    let student = issue_token(&make_user("s", Role::Student), SECRET, 1).unwrap();
    let admin = issue_token(&make_user("a", Role::Admin), SECRET, 1).unwrap();
    let super_admin = issue_token(&make_user("sa", Role::SuperAdmin), SECRET, 1).unwrap();

    // Public path never needs a token
    assert!(matches!(evaluate("/", None, SECRET), GateOutcome::Public));

    // Missing or bad token on a gated path
    assert!(matches!(
        evaluate("/admin", None, SECRET),
        GateOutcome::TokenInvalid
    ));
    assert!(matches!(
        evaluate("/admin", Some("junk"), SECRET),
        GateOutcome::TokenInvalid
    ));

    // Role ordering
    assert!(matches!(
        evaluate("/admin", Some(&admin), SECRET),
        GateOutcome::Authorized(_)
    ));
    assert!(matches!(
        evaluate("/admin", Some(&super_admin), SECRET),
        GateOutcome::Authorized(_)
    ));
    assert!(matches!(
        evaluate("/admin", Some(&student), SECRET),
        GateOutcome::Forbidden
    ));
    assert!(matches!(
        evaluate("/super-admin", Some(&admin), SECRET),
        GateOutcome::Forbidden
    ));
    assert!(matches!(
        evaluate("/student", Some(&student), SECRET),
        GateOutcome::Authorized(_)
    ));
}

#[test]
fn test_gate_rejects_expired_token() {
    let expired = issue_token(&make_user("gone", Role::Admin), SECRET, -2).unwrap();
    assert!(matches!(
        evaluate("/admin", Some(&expired), SECRET),
        GateOutcome::TokenInvalid
    ));
}
