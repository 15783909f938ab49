//! Admin and super-admin user management

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use rand::distr::{Alphanumeric, SampleString};
use serde::{Deserialize, Serialize};

use crate::auth::models::{Role, User, UserInfo};
use crate::auth::password::hash_password;
use crate::error::{Error, Result};

use super::routes::ApiResponse;
use super::server::SharedState;

/// GET /api/admin/users
pub async fn list(State(state): State<SharedState>) -> impl IntoResponse {
    let users: Vec<UserInfo> = state
        .store
        .list_users()
        .await
        .into_iter()
        .map(UserInfo::from)
        .collect();
    Json(ApiResponse::ok(users))
}

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub name: String,
    pub role: Role,
}

/// A created account together with its generated temporary password, shown
/// exactly once
#[derive(Debug, Serialize)]
pub struct CreatedUser {
    #[serde(flatten)]
    pub user: UserInfo,
    pub temporary_password: String,
}

/// POST /api/super-admin/users
///
/// Staff accounts are provisioned with a generated temporary password.
pub async fn create(
    State(state): State<SharedState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<impl IntoResponse> {
    if req.username.trim().len() < 3 {
        return Err(Error::Validation(
            "Username must be at least 3 characters".to_string(),
        ));
    }
    if !req.email.contains('@') {
        return Err(Error::Validation("A valid email is required".to_string()));
    }

    let temporary_password = Alphanumeric.sample_string(&mut rand::rng(), 16);

    let user = User::new(
        req.username.trim().to_string(),
        req.email.trim().to_lowercase(),
        req.name.trim().to_string(),
        hash_password(&temporary_password)?,
        req.role,
    );

    let created = state.store.insert_user(user).await?;

    tracing::info!("Provisioned {} account {}", created.role, created.username);

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(CreatedUser {
            user: UserInfo::from(created),
            temporary_password,
        })),
    ))
}

#[derive(Debug, Deserialize)]
pub struct RoleUpdate {
    pub role: Role,
}

/// PUT /api/super-admin/users/{id}/role
pub async fn set_role(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(req): Json<RoleUpdate>,
) -> Result<impl IntoResponse> {
    let user = state.store.set_user_role(&id, req.role).await?;
    Ok(Json(ApiResponse::ok(UserInfo::from(user))))
}

#[derive(Debug, Deserialize)]
pub struct ActiveUpdate {
    pub is_active: bool,
}

/// PUT /api/super-admin/users/{id}/active
///
/// Accounts are soft-disabled, never deleted.
pub async fn set_active(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(req): Json<ActiveUpdate>,
) -> Result<impl IntoResponse> {
    let user = state.store.set_user_active(&id, req.is_active).await?;
    Ok(Json(ApiResponse::ok(UserInfo::from(user))))
}
