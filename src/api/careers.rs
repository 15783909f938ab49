//! Careers intake and admin application management

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::store::{ApplicationStatus, NewApplication};

use super::routes::ApiResponse;
use super::server::SharedState;

/// POST /api/careers - public application form (multipart)
///
/// Text fields plus an optional `resume` file. The resume is a direct
/// pass-through write into the upload directory.
pub async fn apply(
    State(state): State<SharedState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse> {
    let mut name = None;
    let mut email = None;
    let mut phone = None;
    let mut position = None;
    let mut cover_note = None;
    let mut resume_path = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::Validation(format!("Malformed form data: {}", e)))?
    {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "name" => name = Some(read_text(field).await?),
            "email" => email = Some(read_text(field).await?),
            "phone" => phone = Some(read_text(field).await?),
            "position" => position = Some(read_text(field).await?),
            "cover_note" => cover_note = Some(read_text(field).await?),
            "resume" => {
                let filename = stored_filename(field.file_name());
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| Error::Validation(format!("Failed to read resume: {}", e)))?;
                if bytes.is_empty() {
                    continue;
                }
                let target = state.config.storage.upload_dir.join(&filename);
                tokio::fs::write(&target, &bytes).await?;
                resume_path = Some(filename);
            }
            _ => {}
        }
    }

    let name = name
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| Error::Validation("Name is required".to_string()))?;
    let email = email
        .filter(|e| e.contains('@'))
        .ok_or_else(|| Error::Validation("A valid email is required".to_string()))?;
    let position = position
        .filter(|p| !p.trim().is_empty())
        .ok_or_else(|| Error::Validation("Position is required".to_string()))?;

    let application = state
        .store
        .create_application(NewApplication {
            name,
            email,
            phone,
            position,
            cover_note,
            resume_path,
        })
        .await?;

    tracing::info!(
        "Career application {} for {}",
        application.id,
        application.position
    );

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(application))))
}

/// GET /api/admin/careers
pub async fn list(State(state): State<SharedState>) -> impl IntoResponse {
    Json(ApiResponse::ok(state.store.list_applications().await))
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: ApplicationStatus,
}

/// PUT /api/admin/careers/{id}/status
pub async fn update_status(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(req): Json<StatusUpdate>,
) -> Result<impl IntoResponse> {
    let application = state
        .store
        .update_application_status(&id, req.status)
        .await?;
    Ok(Json(ApiResponse::ok(application)))
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String> {
    field
        .text()
        .await
        .map_err(|e| Error::Validation(format!("Malformed form data: {}", e)))
}

/// Unique stored filename; only the original extension is kept
fn stored_filename(original: Option<&str>) -> String {
    let extension = original
        .and_then(|n| std::path::Path::new(n).extension())
        .and_then(|e| e.to_str())
        .filter(|e| e.chars().all(|c| c.is_ascii_alphanumeric()))
        .unwrap_or("bin");
    format!("{}.{}", uuid::Uuid::new_v4(), extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_filename_keeps_extension() {
        let name = stored_filename(Some("resume.pdf"));
        assert!(name.ends_with(".pdf"));
    }

    #[test]
    fn test_stored_filename_rejects_odd_extension() {
        let name = stored_filename(Some("../../etc/passwd"));
        assert!(name.ends_with(".bin"));
    }

    #[test]
    fn test_stored_filename_without_original() {
        let name = stored_filename(None);
        assert!(name.ends_with(".bin"));
    }
}
