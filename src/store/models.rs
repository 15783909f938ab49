//! Document store records
//!
//! Plain records with enumerated sub-fields. Relationships are reference-by-id;
//! cascade cleanup lives in the store operations, not here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which public form captured a lead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormType {
    Contact,
    Demo,
    Brochure,
    Newsletter,
}

/// Follow-up status of a lead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    New,
    Contacted,
    Converted,
    Closed,
}

/// A captured lead from one of the public forms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub form_type: FormType,
    pub course_interest: Option<String>,
    pub message: Option<String>,
    pub status: LeadStatus,
    pub created_at: DateTime<Utc>,
}

/// New-lead payload from the public form
#[derive(Debug, Clone, Deserialize)]
pub struct NewLead {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub form_type: FormType,
    pub course_interest: Option<String>,
    pub message: Option<String>,
}

/// Review status of a career application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Received,
    Shortlisted,
    Rejected,
    Hired,
}

/// A careers/resume intake record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerApplication {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub position: String,
    pub cover_note: Option<String>,
    /// Path of the uploaded resume under the upload directory
    pub resume_path: Option<String>,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
}

/// A course on the public catalog. References its modules by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    /// Unique URL slug
    pub slug: String,
    pub description: String,
    pub module_ids: Vec<String>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A module within a course. References its content by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    pub id: String,
    pub course_id: String,
    pub title: String,
    pub description: Option<String>,
    pub content_ids: Vec<String>,
    pub position: u32,
}

/// Kind of a content item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Video,
    Article,
    Quiz,
    Exercise,
}

/// A content item within a module
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub id: String,
    pub module_id: String,
    pub title: String,
    pub content_type: ContentType,
    /// Body text or media URL depending on content_type
    pub body: String,
    pub position: u32,
}

/// A blog post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    /// Unique URL slug
    pub slug: String,
    pub author: String,
    pub excerpt: Option<String>,
    pub body: String,
    pub tags: Vec<String>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
