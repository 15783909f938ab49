//! Lead collection operations

use super::{Lead, LeadStatus, NewLead, Store};
use crate::error::{Error, Result};
use chrono::Utc;

impl Store {
    pub async fn create_lead(&self, new: NewLead) -> Result<Lead> {
        let lead = Lead {
            id: uuid::Uuid::new_v4().to_string(),
            name: new.name,
            email: new.email,
            phone: new.phone,
            form_type: new.form_type,
            course_interest: new.course_interest,
            message: new.message,
            status: LeadStatus::New,
            created_at: Utc::now(),
        };

        {
            let mut db = self.db().write().await;
            db.leads.insert(lead.id.clone(), lead.clone());
        }
        self.save().await?;
        Ok(lead)
    }

    /// All leads, newest first
    pub async fn list_leads(&self) -> Vec<Lead> {
        let db = self.db().read().await;
        let mut leads: Vec<Lead> = db.leads.values().cloned().collect();
        leads.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        leads
    }

    pub async fn get_lead(&self, id: &str) -> Option<Lead> {
        let db = self.db().read().await;
        db.leads.get(id).cloned()
    }

    pub async fn update_lead_status(&self, id: &str, status: LeadStatus) -> Result<Lead> {
        let lead = {
            let mut db = self.db().write().await;
            let lead = db
                .leads
                .get_mut(id)
                .ok_or_else(|| Error::NotFound("Lead".to_string()))?;
            lead.status = status;
            lead.clone()
        };
        self.save().await?;
        Ok(lead)
    }

    pub async fn delete_lead(&self, id: &str) -> Result<()> {
        {
            let mut db = self.db().write().await;
            if db.leads.remove(id).is_none() {
                return Err(Error::NotFound("Lead".to_string()));
            }
        }
        self.save().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::FormType;
    use tempfile::tempdir;

    fn demo_lead(name: &str) -> NewLead {
        NewLead {
            name: name.to_string(),
            email: format!("{}@example.com", name),
            phone: None,
            form_type: FormType::Demo,
            course_interest: Some("rust-101".to_string()),
            message: None,
        }
    }

    #[tokio::test]
    async fn test_lead_lifecycle() {
        let dir = tempdir().unwrap();
        let store = Store::open(dir.path().join("db.json")).await.unwrap();

        let lead = store.create_lead(demo_lead("jane")).await.unwrap();
        assert_eq!(lead.status, LeadStatus::New);

        let updated = store
            .update_lead_status(&lead.id, LeadStatus::Contacted)
            .await
            .unwrap();
        assert_eq!(updated.status, LeadStatus::Contacted);

        store.delete_lead(&lead.id).await.unwrap();
        assert!(store.get_lead(&lead.id).await.is_none());
    }

    #[tokio::test]
    async fn test_update_missing_lead() {
        let dir = tempdir().unwrap();
        let store = Store::open(dir.path().join("db.json")).await.unwrap();

        let result = store.update_lead_status("missing", LeadStatus::Closed).await;
        assert!(matches!(result, Err(Error::NotFound(_))));
    }
}
