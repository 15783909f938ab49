//! Lead capture and admin lead management

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::store::{LeadStatus, NewLead};

use super::routes::ApiResponse;
use super::server::SharedState;

/// POST /api/leads - public lead-capture form
pub async fn submit(
    State(state): State<SharedState>,
    Json(req): Json<NewLead>,
) -> Result<impl IntoResponse> {
    if req.name.trim().is_empty() {
        return Err(Error::Validation("Name is required".to_string()));
    }
    if !req.email.contains('@') {
        return Err(Error::Validation("A valid email is required".to_string()));
    }

    let lead = state.store.create_lead(req).await?;

    tracing::info!("Captured {:?} lead {}", lead.form_type, lead.id);

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(lead))))
}

/// GET /api/admin/leads
pub async fn list(State(state): State<SharedState>) -> impl IntoResponse {
    Json(ApiResponse::ok(state.store.list_leads().await))
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: LeadStatus,
}

/// PUT /api/admin/leads/{id}/status
pub async fn update_status(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(req): Json<StatusUpdate>,
) -> Result<impl IntoResponse> {
    let lead = state.store.update_lead_status(&id, req.status).await?;
    Ok(Json(ApiResponse::ok(lead)))
}

/// DELETE /api/admin/leads/{id}
pub async fn remove(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    state.store.delete_lead(&id).await?;
    Ok(Json(ApiResponse::ok("deleted")))
}
