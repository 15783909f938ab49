//! Course catalog handlers
//!
//! Public routes expose published courses with their modules and content;
//! admin routes manage the full catalog.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::store::{
    Content, ContentUpdate, Course, CourseUpdate, Module, NewContent, NewCourse, NewModule,
};

use super::routes::ApiResponse;
use super::server::SharedState;

/// A course expanded with its modules and their content
#[derive(Debug, Serialize)]
pub struct CourseDetail {
    #[serde(flatten)]
    pub course: Course,
    pub modules: Vec<ModuleDetail>,
}

#[derive(Debug, Serialize)]
pub struct ModuleDetail {
    #[serde(flatten)]
    pub module: Module,
    pub content: Vec<Content>,
}

// Public routes

/// GET /api/courses
pub async fn list_public_courses(State(state): State<SharedState>) -> impl IntoResponse {
    Json(ApiResponse::ok(state.store.list_courses(true).await))
}

/// GET /api/courses/{slug}
pub async fn get_public_course(
    State(state): State<SharedState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse> {
    let course = state
        .store
        .get_course_by_slug(&slug)
        .await
        .filter(|c| c.published)
        .ok_or_else(|| Error::NotFound("Course".to_string()))?;

    let mut modules = Vec::new();
    for module in state.store.list_modules(&course.id).await {
        let content = state.store.list_content(&module.id).await;
        modules.push(ModuleDetail { module, content });
    }

    Ok(Json(ApiResponse::ok(CourseDetail { course, modules })))
}

// Admin routes

/// GET /api/admin/courses
pub async fn list_all_courses(State(state): State<SharedState>) -> impl IntoResponse {
    Json(ApiResponse::ok(state.store.list_courses(false).await))
}

/// POST /api/admin/courses
pub async fn create_course(
    State(state): State<SharedState>,
    Json(req): Json<NewCourse>,
) -> Result<impl IntoResponse> {
    if req.title.trim().is_empty() {
        return Err(Error::Validation("Title is required".to_string()));
    }
    if !is_valid_slug(&req.slug) {
        return Err(Error::Validation(
            "Slug must be lowercase letters, digits and dashes".to_string(),
        ));
    }

    let course = state.store.create_course(req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(course))))
}

/// PUT /api/admin/courses/{id}
pub async fn update_course(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(req): Json<CourseUpdate>,
) -> Result<impl IntoResponse> {
    let course = state.store.update_course(&id, req).await?;
    Ok(Json(ApiResponse::ok(course)))
}

/// DELETE /api/admin/courses/{id} - cascades into modules and content
pub async fn delete_course(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    state.store.delete_course(&id).await?;
    Ok(Json(ApiResponse::ok("deleted")))
}

/// GET /api/admin/courses/{id}/modules
pub async fn list_modules(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    if state.store.get_course(&id).await.is_none() {
        return Err(Error::NotFound("Course".to_string()));
    }
    Ok(Json(ApiResponse::ok(state.store.list_modules(&id).await)))
}

/// POST /api/admin/modules
pub async fn create_module(
    State(state): State<SharedState>,
    Json(req): Json<NewModule>,
) -> Result<impl IntoResponse> {
    if req.title.trim().is_empty() {
        return Err(Error::Validation("Title is required".to_string()));
    }
    let module = state.store.create_module(req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(module))))
}

/// DELETE /api/admin/modules/{id} - cascades into content, detaches from course
pub async fn delete_module(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    state.store.delete_module(&id).await?;
    Ok(Json(ApiResponse::ok("deleted")))
}

/// GET /api/admin/modules/{id}/content
pub async fn list_content(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    if state.store.get_module(&id).await.is_none() {
        return Err(Error::NotFound("Module".to_string()));
    }
    Ok(Json(ApiResponse::ok(state.store.list_content(&id).await)))
}

/// POST /api/admin/content
pub async fn create_content(
    State(state): State<SharedState>,
    Json(req): Json<NewContent>,
) -> Result<impl IntoResponse> {
    if req.title.trim().is_empty() {
        return Err(Error::Validation("Title is required".to_string()));
    }
    let content = state.store.create_content(req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(content))))
}

/// PUT /api/admin/content/{id}
pub async fn update_content(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(req): Json<ContentUpdate>,
) -> Result<impl IntoResponse> {
    let content = state.store.update_content(&id, req).await?;
    Ok(Json(ApiResponse::ok(content)))
}

/// DELETE /api/admin/content/{id}
pub async fn delete_content(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    state.store.delete_content(&id).await?;
    Ok(Json(ApiResponse::ok("deleted")))
}

fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_validation() {
        assert!(is_valid_slug("algorithms-1"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("Has Spaces"));
        assert!(!is_valid_slug("UPPER"));
    }
}
