//! Request gating middleware and extractors

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

use crate::api::server::SharedState;
use crate::auth::cookie::token_from_headers;
use crate::auth::jwt::{verify_token, Claims};
use crate::auth::policy::{evaluate, GateOutcome};
use crate::error::Error;

/// Role-gate middleware. Consults the policy table for the request path and
/// rejects before the protected handler ever runs.
///
/// Browser routes are redirected to the login page; API routes get a 401
/// envelope.
pub async fn role_gate(
    State(state): State<SharedState>,
    mut req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path().to_string();
    let token = token_from_headers(req.headers());

    match evaluate(&path, token.as_deref(), &state.config.auth.jwt_secret) {
        GateOutcome::Public => next.run(req).await,
        GateOutcome::Authorized(claims) => {
            req.extensions_mut().insert(claims);
            next.run(req).await
        }
        GateOutcome::TokenInvalid | GateOutcome::Forbidden => {
            tracing::debug!("Gate rejected request to {}", path);
            if path.starts_with("/api/") {
                Error::Unauthorized("This route requires authorization".to_string())
                    .into_response()
            } else {
                Redirect::to("/login").into_response()
            }
        }
    }
}

/// Maintenance-mode middleware. When the marker is present, every route except
/// the control endpoint and the health check serves the unavailable response.
/// The flag is read once per request; a toggle racing a read is acceptable.
pub async fn maintenance_gate(
    State(state): State<SharedState>,
    req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path();

    if path == "/api/maintenance" || path == "/api/health" {
        return next.run(req).await;
    }

    if state.maintenance.is_enabled() {
        let since = state.maintenance.enabled_since();
        return crate::ui::maintenance_response(path, since);
    }

    next.run(req).await
}

/// Extractor for the authenticated identity on routes outside the gated groups
/// (e.g. `/api/auth/me`). Verifies the session token itself.
pub struct CurrentUser(pub Claims);

impl FromRequestParts<SharedState> for CurrentUser {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        // The role gate may already have verified this request
        if let Some(claims) = parts.extensions.get::<Claims>() {
            return Ok(CurrentUser(claims.clone()));
        }

        let token = token_from_headers(&parts.headers)
            .ok_or_else(|| Error::Unauthorized("Missing session token".to_string()))?;
        let claims = verify_token(&token, &state.config.auth.jwt_secret)?;
        Ok(CurrentUser(claims))
    }
}
