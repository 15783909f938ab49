//! Blog handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{Error, Result};
use crate::store::{NewPost, PostUpdate};

use super::routes::ApiResponse;
use super::server::SharedState;

/// GET /api/blog
pub async fn list_public_posts(State(state): State<SharedState>) -> impl IntoResponse {
    Json(ApiResponse::ok(state.store.list_posts(true).await))
}

/// GET /api/blog/{slug}
pub async fn get_public_post(
    State(state): State<SharedState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse> {
    let post = state
        .store
        .get_post_by_slug(&slug)
        .await
        .filter(|p| p.published)
        .ok_or_else(|| Error::NotFound("Post".to_string()))?;
    Ok(Json(ApiResponse::ok(post)))
}

/// GET /api/admin/blog
pub async fn list_all_posts(State(state): State<SharedState>) -> impl IntoResponse {
    Json(ApiResponse::ok(state.store.list_posts(false).await))
}

/// POST /api/admin/blog
pub async fn create_post(
    State(state): State<SharedState>,
    Json(req): Json<NewPost>,
) -> Result<impl IntoResponse> {
    if req.title.trim().is_empty() {
        return Err(Error::Validation("Title is required".to_string()));
    }
    if req.slug.trim().is_empty() {
        return Err(Error::Validation("Slug is required".to_string()));
    }

    let post = state.store.create_post(req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(post))))
}

/// PUT /api/admin/blog/{id}
pub async fn update_post(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(req): Json<PostUpdate>,
) -> Result<impl IntoResponse> {
    let post = state.store.update_post(&id, req).await?;
    Ok(Json(ApiResponse::ok(post)))
}

/// DELETE /api/admin/blog/{id}
pub async fn delete_post(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    state.store.delete_post(&id).await?;
    Ok(Json(ApiResponse::ok("deleted")))
}
