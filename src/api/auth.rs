//! Login, signup and session handlers

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::auth::models::{LoginRequest, LoginResponse, Role, SignupRequest, User, UserInfo};
use crate::auth::{clear_cookie, hash_password, issue_token, session_cookie, CurrentUser};
use crate::error::{Error, Result};

use super::routes::ApiResponse;
use super::server::SharedState;

/// POST /api/auth
///
/// The requested role is part of the authorization contract: an account whose
/// stored role differs from the claimed one is rejected even with a correct
/// password, and the token embeds the stored role.
pub async fn login(
    State(state): State<SharedState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse> {
    if req.username.trim().is_empty() || req.password.is_empty() {
        return Err(Error::Validation(
            "Username and password are required".to_string(),
        ));
    }

    let user = state
        .store
        .find_by_credentials(req.username.trim(), &req.password)
        .await?;

    if user.role != req.role {
        tracing::warn!(
            "Login rejected for {}: requested {} access",
            user.username,
            req.role
        );
        return Err(Error::RoleMismatch(req.role));
    }

    let ttl_hours = if user.role == Role::SuperAdmin {
        state.config.auth.super_admin_ttl_hours
    } else {
        state.config.auth.token_ttl_hours
    };

    let token = issue_token(&user, &state.config.auth.jwt_secret, ttl_hours)?;
    state.store.record_login(&user.id).await?;

    tracing::info!("User {} logged in as {}", user.username, user.role);

    let cookie = session_cookie(&token, ttl_hours, state.config.auth.secure_cookies);
    let body = LoginResponse {
        success: true,
        user: UserInfo::from(user),
        token,
    };

    Ok(([(SET_COOKIE, cookie)], Json(body)))
}

/// POST /api/auth/signup - student self-signup
pub async fn signup(
    State(state): State<SharedState>,
    Json(req): Json<SignupRequest>,
) -> Result<impl IntoResponse> {
    validate_signup(&req)?;

    let user = User::new(
        req.username.trim().to_string(),
        req.email.trim().to_lowercase(),
        req.name.trim().to_string(),
        hash_password(&req.password)?,
        Role::Student,
    );

    let created = state.store.insert_user(user).await?;

    tracing::info!("New student signup: {}", created.username);

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(UserInfo::from(created))),
    ))
}

/// POST /api/auth/logout
///
/// Logout is purely client-side cookie deletion; the token itself stays valid
/// until its natural expiry.
pub async fn logout(State(state): State<SharedState>) -> impl IntoResponse {
    let cookie = clear_cookie(state.config.auth.secure_cookies);
    ([(SET_COOKIE, cookie)], Json(ApiResponse::ok("logged out")))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<SharedState>,
    CurrentUser(claims): CurrentUser,
) -> Result<impl IntoResponse> {
    let user = state
        .store
        .get_user(&claims.sub)
        .await
        .ok_or_else(|| Error::NotFound("User".to_string()))?;

    Ok(Json(ApiResponse::ok(UserInfo::from(user))))
}

fn validate_signup(req: &SignupRequest) -> Result<()> {
    if req.username.trim().len() < 3 {
        return Err(Error::Validation(
            "Username must be at least 3 characters".to_string(),
        ));
    }
    if !req.email.contains('@') {
        return Err(Error::Validation("A valid email is required".to_string()));
    }
    if req.name.trim().is_empty() {
        return Err(Error::Validation("Name is required".to_string()));
    }
    if req.password.len() < 8 {
        return Err(Error::Validation(
            "Password must be at least 8 characters".to_string(),
        ));
    }
    Ok(())
}
