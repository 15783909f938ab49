//! Career application collection operations

use super::{ApplicationStatus, CareerApplication, Store};
use crate::error::{Error, Result};
use chrono::Utc;

/// New-application fields collected from the careers form; the resume arrives
/// separately as a multipart upload.
#[derive(Debug, Clone)]
pub struct NewApplication {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub position: String,
    pub cover_note: Option<String>,
    pub resume_path: Option<String>,
}

impl Store {
    pub async fn create_application(&self, new: NewApplication) -> Result<CareerApplication> {
        let application = CareerApplication {
            id: uuid::Uuid::new_v4().to_string(),
            name: new.name,
            email: new.email,
            phone: new.phone,
            position: new.position,
            cover_note: new.cover_note,
            resume_path: new.resume_path,
            status: ApplicationStatus::Received,
            created_at: Utc::now(),
        };

        {
            let mut db = self.db().write().await;
            db.applications
                .insert(application.id.clone(), application.clone());
        }
        self.save().await?;
        Ok(application)
    }

    /// All applications, newest first
    pub async fn list_applications(&self) -> Vec<CareerApplication> {
        let db = self.db().read().await;
        let mut applications: Vec<CareerApplication> =
            db.applications.values().cloned().collect();
        applications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        applications
    }

    pub async fn get_application(&self, id: &str) -> Option<CareerApplication> {
        let db = self.db().read().await;
        db.applications.get(id).cloned()
    }

    pub async fn update_application_status(
        &self,
        id: &str,
        status: ApplicationStatus,
    ) -> Result<CareerApplication> {
        let application = {
            let mut db = self.db().write().await;
            let application = db
                .applications
                .get_mut(id)
                .ok_or_else(|| Error::NotFound("Application".to_string()))?;
            application.status = status;
            application.clone()
        };
        self.save().await?;
        Ok(application)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_application_lifecycle() {
        let dir = tempdir().unwrap();
        let store = Store::open(dir.path().join("db.json")).await.unwrap();

        let application = store
            .create_application(NewApplication {
                name: "Sam".to_string(),
                email: "sam@example.com".to_string(),
                phone: None,
                position: "Rust Instructor".to_string(),
                cover_note: None,
                resume_path: Some("uploads/resume.pdf".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(application.status, ApplicationStatus::Received);

        let updated = store
            .update_application_status(&application.id, ApplicationStatus::Shortlisted)
            .await
            .unwrap();
        assert_eq!(updated.status, ApplicationStatus::Shortlisted);
    }
}
