//! Blog post collection operations

use super::{BlogPost, Store};
use crate::error::{Error, Result};
use chrono::Utc;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub slug: String,
    pub author: String,
    pub excerpt: Option<String>,
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub published: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostUpdate {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub body: Option<String>,
    pub tags: Option<Vec<String>>,
    pub published: Option<bool>,
}

impl Store {
    pub async fn create_post(&self, new: NewPost) -> Result<BlogPost> {
        let now = Utc::now();
        let post = BlogPost {
            id: uuid::Uuid::new_v4().to_string(),
            title: new.title,
            slug: new.slug,
            author: new.author,
            excerpt: new.excerpt,
            body: new.body,
            tags: new.tags,
            published: new.published,
            created_at: now,
            updated_at: now,
        };

        {
            let mut db = self.db().write().await;
            if db.post_slug_index.contains_key(&post.slug) {
                return Err(Error::Conflict { field: "slug" });
            }
            db.post_slug_index.insert(post.slug.clone(), post.id.clone());
            db.posts.insert(post.id.clone(), post.clone());
        }
        self.save().await?;
        Ok(post)
    }

    /// Posts, optionally restricted to published ones, newest first
    pub async fn list_posts(&self, published_only: bool) -> Vec<BlogPost> {
        let db = self.db().read().await;
        let mut posts: Vec<BlogPost> = db
            .posts
            .values()
            .filter(|p| !published_only || p.published)
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        posts
    }

    pub async fn get_post_by_slug(&self, slug: &str) -> Option<BlogPost> {
        let db = self.db().read().await;
        let id = db.post_slug_index.get(slug)?;
        db.posts.get(id).cloned()
    }

    pub async fn update_post(&self, id: &str, update: PostUpdate) -> Result<BlogPost> {
        let post = {
            let mut db = self.db().write().await;
            let post = db
                .posts
                .get_mut(id)
                .ok_or_else(|| Error::NotFound("Post".to_string()))?;

            if let Some(title) = update.title {
                post.title = title;
            }
            if let Some(excerpt) = update.excerpt {
                post.excerpt = Some(excerpt);
            }
            if let Some(body) = update.body {
                post.body = body;
            }
            if let Some(tags) = update.tags {
                post.tags = tags;
            }
            if let Some(published) = update.published {
                post.published = published;
            }
            post.updated_at = Utc::now();
            post.clone()
        };
        self.save().await?;
        Ok(post)
    }

    pub async fn delete_post(&self, id: &str) -> Result<()> {
        {
            let mut db = self.db().write().await;
            let post = db
                .posts
                .remove(id)
                .ok_or_else(|| Error::NotFound("Post".to_string()))?;
            db.post_slug_index.remove(&post.slug);
        }
        self.save().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn post(slug: &str, published: bool) -> NewPost {
        NewPost {
            title: "Why learn algorithms".to_string(),
            slug: slug.to_string(),
            author: "AlgoForge Team".to_string(),
            excerpt: None,
            body: "Because interviews.".to_string(),
            tags: vec!["learning".to_string()],
            published,
        }
    }

    #[tokio::test]
    async fn test_post_slug_lookup_and_conflict() {
        let dir = tempdir().unwrap();
        let store = Store::open(dir.path().join("db.json")).await.unwrap();

        store.create_post(post("why-algorithms", true)).await.unwrap();
        assert!(store.get_post_by_slug("why-algorithms").await.is_some());

        let result = store.create_post(post("why-algorithms", true)).await;
        assert!(matches!(result, Err(Error::Conflict { field: "slug" })));
    }

    #[tokio::test]
    async fn test_drafts_hidden_from_public_list() {
        let dir = tempdir().unwrap();
        let store = Store::open(dir.path().join("db.json")).await.unwrap();

        store.create_post(post("published", true)).await.unwrap();
        store.create_post(post("draft", false)).await.unwrap();

        assert_eq!(store.list_posts(true).await.len(), 1);
        assert_eq!(store.list_posts(false).await.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_frees_slug() {
        let dir = tempdir().unwrap();
        let store = Store::open(dir.path().join("db.json")).await.unwrap();

        let created = store.create_post(post("reusable", true)).await.unwrap();
        store.delete_post(&created.id).await.unwrap();

        // Slug can be used again after the delete
        assert!(store.create_post(post("reusable", true)).await.is_ok());
    }
}
