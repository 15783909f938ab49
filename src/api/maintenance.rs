//! Maintenance-mode control endpoint

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::error::{Error, Result};

use super::server::SharedState;

/// GET /api/maintenance
pub async fn status(State(state): State<SharedState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "maintenance": state.maintenance.is_enabled(),
        "since": state.maintenance.enabled_since(),
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlAction {
    Enable,
    Disable,
}

#[derive(Debug, Deserialize)]
pub struct ControlRequest {
    pub action: ControlAction,
    pub key: String,
}

/// POST /api/maintenance
///
/// Key-authenticated toggle. This endpoint stays reachable while maintenance is
/// active, otherwise it could never be disabled remotely.
pub async fn control(
    State(state): State<SharedState>,
    Json(req): Json<ControlRequest>,
) -> Result<impl IntoResponse> {
    if !state.maintenance.verify_key(&req.key) {
        tracing::warn!("Maintenance control called with a bad key");
        return Err(Error::Unauthorized("Invalid maintenance key".to_string()));
    }

    match req.action {
        ControlAction::Enable => {
            state.maintenance.enable()?;
            tracing::info!("Maintenance mode enabled");
        }
        ControlAction::Disable => {
            state.maintenance.disable()?;
            tracing::info!("Maintenance mode disabled");
        }
    }

    Ok(Json(serde_json::json!({
        "success": true,
        "maintenance": state.maintenance.is_enabled(),
    })))
}
