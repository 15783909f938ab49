//! File-backed document store
//!
//! The backing database is a single JSON document file with an in-memory cache.
//! Reads hit the cache; every mutation takes the write lock, applies all of its
//! steps, then persists with an atomic temp-file + rename. Multi-step flows
//! (e.g. create content, then append its id to the parent module) therefore
//! commit as one write.

mod blog;
mod careers;
mod catalog;
mod leads;
mod models;
mod users;

pub use blog::{NewPost, PostUpdate};
pub use careers::NewApplication;
pub use catalog::{ContentUpdate, CourseUpdate, NewContent, NewCourse, NewModule};
pub use models::*;

use crate::auth::models::User;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::RwLock;

/// All collections, as serialized to the store file
#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct Database {
    #[serde(default)]
    pub users: HashMap<String, User>,
    #[serde(default)]
    pub leads: HashMap<String, Lead>,
    #[serde(default)]
    pub applications: HashMap<String, CareerApplication>,
    #[serde(default)]
    pub courses: HashMap<String, Course>,
    #[serde(default)]
    pub modules: HashMap<String, Module>,
    #[serde(default)]
    pub content: HashMap<String, Content>,
    #[serde(default)]
    pub posts: HashMap<String, BlogPost>,

    // Secondary indexes for O(1) unique-field lookups (rebuilt on load)
    #[serde(skip)]
    pub username_index: HashMap<String, String>,
    #[serde(skip)]
    pub email_index: HashMap<String, String>,
    #[serde(skip)]
    pub course_slug_index: HashMap<String, String>,
    #[serde(skip)]
    pub post_slug_index: HashMap<String, String>,
}

impl Database {
    /// Rebuild all secondary indexes from primary data
    fn rebuild_indexes(&mut self) {
        self.username_index.clear();
        self.email_index.clear();
        self.course_slug_index.clear();
        self.post_slug_index.clear();

        for (id, user) in &self.users {
            self.username_index
                .insert(user.username.to_lowercase(), id.clone());
            self.email_index.insert(user.email.to_lowercase(), id.clone());
        }
        for (id, course) in &self.courses {
            self.course_slug_index.insert(course.slug.clone(), id.clone());
        }
        for (id, post) in &self.posts {
            self.post_slug_index.insert(post.slug.clone(), id.clone());
        }
    }
}

/// On-disk format for the store file
#[derive(Debug, Deserialize)]
struct StoreFile {
    /// Version for future migrations
    #[allow(dead_code)]
    version: u32,
    data: Database,
}

#[derive(Serialize)]
struct StoreFileRef<'a> {
    version: u32,
    data: &'a Database,
}

/// Handle to the document store. Cheap to clone; clones share the cache.
pub struct Store {
    path: PathBuf,
    db: Arc<RwLock<Database>>,
}

impl Clone for Store {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            db: Arc::clone(&self.db),
        }
    }
}

impl Store {
    /// Open the store, loading existing data if present
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        if path.exists() {
            Self::load(path).await
        } else {
            let store = Self {
                path,
                db: Arc::new(RwLock::new(Database::default())),
            };
            store.save().await?;
            Ok(store)
        }
    }

    async fn load(path: PathBuf) -> Result<Self> {
        let content = fs::read_to_string(&path).await?;
        let store_file: StoreFile = serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("Corrupt store file: {}", e)))?;

        let mut db = store_file.data;
        db.rebuild_indexes();

        Ok(Self {
            path,
            db: Arc::new(RwLock::new(db)),
        })
    }

    /// Persist the current state. Writes to a temp file first so a crash never
    /// leaves a half-written store behind.
    pub(crate) async fn save(&self) -> Result<()> {
        let content = {
            let db = self.db.read().await;
            serde_json::to_string_pretty(&StoreFileRef {
                version: 1,
                data: &*db,
            })?
        };

        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, &content).await?;
        fs::rename(&temp_path, &self.path).await?;

        Ok(())
    }

    pub(crate) fn db(&self) -> &RwLock<Database> {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::models::Role;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_open_creates_store_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.json");

        let _store = Store::open(&path).await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_data_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.json");

        {
            let store = Store::open(&path).await.unwrap();
            let user = User::new(
                "persisted".to_string(),
                "persisted@algoforge.io".to_string(),
                "Persisted".to_string(),
                "hash".to_string(),
                Role::Student,
            );
            store.insert_user(user).await.unwrap();
        }

        let store = Store::open(&path).await.unwrap();
        let found = store.find_user_by_identifier("persisted").await;
        assert!(found.is_some());
        assert_eq!(found.unwrap().email, "persisted@algoforge.io");
    }
}
