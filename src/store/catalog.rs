//! Course / module / content collection operations
//!
//! Modules reference their course, content references its module. Deletes
//! cascade: removing a course removes its modules and their content; removing a
//! module removes its content and detaches it from the course. Each cascade
//! runs under one write lock and commits as a single save.

use super::{Content, ContentType, Course, Module, Store};
use crate::error::{Error, Result};
use chrono::Utc;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct NewCourse {
    pub title: String,
    pub slug: String,
    pub description: String,
    #[serde(default)]
    pub published: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CourseUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub published: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewModule {
    pub course_id: String,
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub position: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewContent {
    pub module_id: String,
    pub title: String,
    pub content_type: ContentType,
    pub body: String,
    #[serde(default)]
    pub position: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentUpdate {
    pub title: Option<String>,
    pub body: Option<String>,
    pub position: Option<u32>,
}

impl Store {
    // ---- Courses ----

    pub async fn create_course(&self, new: NewCourse) -> Result<Course> {
        let now = Utc::now();
        let course = Course {
            id: uuid::Uuid::new_v4().to_string(),
            title: new.title,
            slug: new.slug,
            description: new.description,
            module_ids: Vec::new(),
            published: new.published,
            created_at: now,
            updated_at: now,
        };

        {
            let mut db = self.db().write().await;
            if db.course_slug_index.contains_key(&course.slug) {
                return Err(Error::Conflict { field: "slug" });
            }
            db.course_slug_index
                .insert(course.slug.clone(), course.id.clone());
            db.courses.insert(course.id.clone(), course.clone());
        }
        self.save().await?;
        Ok(course)
    }

    /// Courses, optionally restricted to published ones, ordered by title
    pub async fn list_courses(&self, published_only: bool) -> Vec<Course> {
        let db = self.db().read().await;
        let mut courses: Vec<Course> = db
            .courses
            .values()
            .filter(|c| !published_only || c.published)
            .cloned()
            .collect();
        courses.sort_by(|a, b| a.title.cmp(&b.title));
        courses
    }

    pub async fn get_course(&self, id: &str) -> Option<Course> {
        let db = self.db().read().await;
        db.courses.get(id).cloned()
    }

    pub async fn get_course_by_slug(&self, slug: &str) -> Option<Course> {
        let db = self.db().read().await;
        let id = db.course_slug_index.get(slug)?;
        db.courses.get(id).cloned()
    }

    pub async fn update_course(&self, id: &str, update: CourseUpdate) -> Result<Course> {
        let course = {
            let mut db = self.db().write().await;
            let course = db
                .courses
                .get_mut(id)
                .ok_or_else(|| Error::NotFound("Course".to_string()))?;

            if let Some(title) = update.title {
                course.title = title;
            }
            if let Some(description) = update.description {
                course.description = description;
            }
            if let Some(published) = update.published {
                course.published = published;
            }
            course.updated_at = Utc::now();
            course.clone()
        };
        self.save().await?;
        Ok(course)
    }

    /// Delete a course and cascade into its modules and their content
    pub async fn delete_course(&self, id: &str) -> Result<()> {
        {
            let mut db = self.db().write().await;
            let course = db
                .courses
                .remove(id)
                .ok_or_else(|| Error::NotFound("Course".to_string()))?;
            db.course_slug_index.remove(&course.slug);

            for module_id in &course.module_ids {
                if let Some(module) = db.modules.remove(module_id) {
                    for content_id in &module.content_ids {
                        db.content.remove(content_id);
                    }
                }
            }
        }
        self.save().await
    }

    // ---- Modules ----

    /// Create a module and append it to its parent course. Both steps commit as
    /// one save.
    pub async fn create_module(&self, new: NewModule) -> Result<Module> {
        let module = Module {
            id: uuid::Uuid::new_v4().to_string(),
            course_id: new.course_id.clone(),
            title: new.title,
            description: new.description,
            content_ids: Vec::new(),
            position: new.position,
        };

        {
            let mut db = self.db().write().await;
            let course = db
                .courses
                .get_mut(&new.course_id)
                .ok_or_else(|| Error::NotFound("Course".to_string()))?;
            course.module_ids.push(module.id.clone());
            course.updated_at = Utc::now();
            db.modules.insert(module.id.clone(), module.clone());
        }
        self.save().await?;
        Ok(module)
    }

    pub async fn get_module(&self, id: &str) -> Option<Module> {
        let db = self.db().read().await;
        db.modules.get(id).cloned()
    }

    /// Modules of a course, in position order
    pub async fn list_modules(&self, course_id: &str) -> Vec<Module> {
        let db = self.db().read().await;
        let mut modules: Vec<Module> = db
            .modules
            .values()
            .filter(|m| m.course_id == course_id)
            .cloned()
            .collect();
        modules.sort_by_key(|m| m.position);
        modules
    }

    /// Delete a module: its content records are removed and it is detached from
    /// the parent course's module list.
    pub async fn delete_module(&self, id: &str) -> Result<()> {
        {
            let mut db = self.db().write().await;
            let module = db
                .modules
                .remove(id)
                .ok_or_else(|| Error::NotFound("Module".to_string()))?;

            for content_id in &module.content_ids {
                db.content.remove(content_id);
            }

            if let Some(course) = db.courses.get_mut(&module.course_id) {
                course.module_ids.retain(|m| m != id);
                course.updated_at = Utc::now();
            }
        }
        self.save().await
    }

    // ---- Content ----

    /// Create a content item and append it to its parent module. Both steps
    /// commit as one save.
    pub async fn create_content(&self, new: NewContent) -> Result<Content> {
        let content = Content {
            id: uuid::Uuid::new_v4().to_string(),
            module_id: new.module_id.clone(),
            title: new.title,
            content_type: new.content_type,
            body: new.body,
            position: new.position,
        };

        {
            let mut db = self.db().write().await;
            let module = db
                .modules
                .get_mut(&new.module_id)
                .ok_or_else(|| Error::NotFound("Module".to_string()))?;
            module.content_ids.push(content.id.clone());
            db.content.insert(content.id.clone(), content.clone());
        }
        self.save().await?;
        Ok(content)
    }

    pub async fn get_content(&self, id: &str) -> Option<Content> {
        let db = self.db().read().await;
        db.content.get(id).cloned()
    }

    /// Content of a module, in position order
    pub async fn list_content(&self, module_id: &str) -> Vec<Content> {
        let db = self.db().read().await;
        let mut content: Vec<Content> = db
            .content
            .values()
            .filter(|c| c.module_id == module_id)
            .cloned()
            .collect();
        content.sort_by_key(|c| c.position);
        content
    }

    pub async fn update_content(&self, id: &str, update: ContentUpdate) -> Result<Content> {
        let content = {
            let mut db = self.db().write().await;
            let content = db
                .content
                .get_mut(id)
                .ok_or_else(|| Error::NotFound("Content".to_string()))?;

            if let Some(title) = update.title {
                content.title = title;
            }
            if let Some(body) = update.body {
                content.body = body;
            }
            if let Some(position) = update.position {
                content.position = position;
            }
            content.clone()
        };
        self.save().await?;
        Ok(content)
    }

    /// Delete a content item and detach it from its module
    pub async fn delete_content(&self, id: &str) -> Result<()> {
        {
            let mut db = self.db().write().await;
            let content = db
                .content
                .remove(id)
                .ok_or_else(|| Error::NotFound("Content".to_string()))?;

            if let Some(module) = db.modules.get_mut(&content.module_id) {
                module.content_ids.retain(|c| c != id);
            }
        }
        self.save().await
    }
}
