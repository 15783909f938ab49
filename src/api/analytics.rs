//! Analytics call-through handlers
//!
//! Super-admin only (enforced by the route policy). Requests go straight to the
//! third-party reporting API; a provider failure surfaces to the caller.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use std::collections::HashMap;

use crate::error::Result;

use super::routes::ApiResponse;
use super::server::SharedState;

/// GET /api/analytics/{report}
pub async fn report(
    State(state): State<SharedState>,
    Path(report): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse> {
    let query: Vec<(String, String)> = params.into_iter().collect();
    let data = state.analytics.fetch_report(&report, &query).await?;
    Ok(Json(ApiResponse::ok(data)))
}
