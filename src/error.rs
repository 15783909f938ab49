//! Error types for the AlgoForge backend

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::auth::models::Role;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config file not found. Run 'algoforge init' first.")]
    ConfigNotFound,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid credentials.")]
    InvalidCredentials,

    #[error("Invalid credentials. This account is not authorized for {0} access.")]
    RoleMismatch(Role),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Session expired")]
    TokenExpired,

    #[error("Invalid session token")]
    TokenInvalid,

    #[error("{0} not found")]
    NotFound(String),

    #[error("An account with this {field} already exists")]
    Conflict { field: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Other(err.to_string())
    }
}

impl Error {
    /// HTTP status code for the API error envelope
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::InvalidCredentials
            | Error::RoleMismatch(_)
            | Error::Unauthorized(_)
            | Error::TokenExpired
            | Error::TokenInvalid => StatusCode::UNAUTHORIZED,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Conflict { .. } => StatusCode::CONFLICT,
            Error::Upstream(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Internal details stay in the logs, not in the envelope
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Internal error: {}", self);
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        let body = serde_json::json!({
            "success": false,
            "message": message,
        });

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, Error>;
