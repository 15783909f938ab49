//! User collection operations and the credential lookup contract

use super::Store;
use crate::auth::models::{Role, User};
use crate::auth::password::verify_password;
use crate::error::{Error, Result};
use chrono::Utc;

impl Store {
    /// Insert a new user. Username and email are unique; a duplicate fails with
    /// a conflict naming the offending field.
    pub async fn insert_user(&self, user: User) -> Result<User> {
        {
            let mut db = self.db().write().await;

            if db.username_index.contains_key(&user.username.to_lowercase()) {
                return Err(Error::Conflict { field: "username" });
            }
            if db.email_index.contains_key(&user.email.to_lowercase()) {
                return Err(Error::Conflict { field: "email" });
            }

            db.username_index
                .insert(user.username.to_lowercase(), user.id.clone());
            db.email_index
                .insert(user.email.to_lowercase(), user.id.clone());
            db.users.insert(user.id.clone(), user.clone());
        }

        self.save().await?;
        Ok(user)
    }

    /// Look up a user by username or email
    pub async fn find_user_by_identifier(&self, identifier: &str) -> Option<User> {
        let db = self.db().read().await;
        let key = identifier.to_lowercase();
        let id = db
            .username_index
            .get(&key)
            .or_else(|| db.email_index.get(&key))?;
        db.users.get(id).cloned()
    }

    pub async fn get_user(&self, id: &str) -> Option<User> {
        let db = self.db().read().await;
        db.users.get(id).cloned()
    }

    /// All users, newest first
    pub async fn list_users(&self) -> Vec<User> {
        let db = self.db().read().await;
        let mut users: Vec<User> = db.users.values().cloned().collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        users
    }

    /// Credential store lookup: username-or-email plus password.
    ///
    /// A missing user, a wrong password and a disabled account all fail with the
    /// same error so the response cannot be used for user enumeration. The
    /// password comparison itself is constant-time.
    pub async fn find_by_credentials(&self, identifier: &str, password: &str) -> Result<User> {
        let user = self
            .find_user_by_identifier(identifier)
            .await
            .ok_or(Error::InvalidCredentials)?;

        if !verify_password(password, &user.password_hash) {
            return Err(Error::InvalidCredentials);
        }

        if !user.is_active {
            return Err(Error::InvalidCredentials);
        }

        Ok(user)
    }

    /// Stamp a successful login
    pub async fn record_login(&self, id: &str) -> Result<()> {
        {
            let mut db = self.db().write().await;
            let user = db
                .users
                .get_mut(id)
                .ok_or_else(|| Error::NotFound("User".to_string()))?;
            user.last_login = Some(Utc::now());
        }
        self.save().await
    }

    /// Soft-enable or soft-disable an account
    pub async fn set_user_active(&self, id: &str, is_active: bool) -> Result<User> {
        let user = {
            let mut db = self.db().write().await;
            let user = db
                .users
                .get_mut(id)
                .ok_or_else(|| Error::NotFound("User".to_string()))?;
            user.is_active = is_active;
            user.clone()
        };
        self.save().await?;
        Ok(user)
    }

    pub async fn set_user_role(&self, id: &str, role: Role) -> Result<User> {
        let user = {
            let mut db = self.db().write().await;
            let user = db
                .users
                .get_mut(id)
                .ok_or_else(|| Error::NotFound("User".to_string()))?;
            user.role = role;
            user.clone()
        };
        self.save().await?;
        Ok(user)
    }

    pub async fn set_email_verified(&self, id: &str) -> Result<User> {
        let user = {
            let mut db = self.db().write().await;
            let user = db
                .users
                .get_mut(id)
                .ok_or_else(|| Error::NotFound("User".to_string()))?;
            user.email_verified = true;
            user.clone()
        };
        self.save().await?;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password::hash_password;
    use tempfile::tempdir;

    async fn test_store() -> (Store, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let store = Store::open(dir.path().join("db.json")).await.unwrap();
        (store, dir)
    }

    fn user(username: &str, email: &str, password: &str, role: Role) -> User {
        User::new(
            username.to_string(),
            email.to_string(),
            username.to_string(),
            hash_password(password).unwrap(),
            role,
        )
    }

    #[tokio::test]
    async fn test_duplicate_username_conflict() {
        let (store, _dir) = test_store().await;
        store
            .insert_user(user("alice", "alice@algoforge.io", "pw", Role::Student))
            .await
            .unwrap();

        let result = store
            .insert_user(user("alice", "other@algoforge.io", "pw", Role::Student))
            .await;
        assert!(matches!(result, Err(Error::Conflict { field: "username" })));
    }

    #[tokio::test]
    async fn test_duplicate_email_conflict() {
        let (store, _dir) = test_store().await;
        store
            .insert_user(user("alice", "alice@algoforge.io", "pw", Role::Student))
            .await
            .unwrap();

        let result = store
            .insert_user(user("bob", "ALICE@algoforge.io", "pw", Role::Student))
            .await;
        assert!(matches!(result, Err(Error::Conflict { field: "email" })));
    }

    #[tokio::test]
    async fn test_find_by_credentials_with_email() {
        let (store, _dir) = test_store().await;
        store
            .insert_user(user("alice", "alice@algoforge.io", "s3cret", Role::Admin))
            .await
            .unwrap();

        let found = store
            .find_by_credentials("alice@algoforge.io", "s3cret")
            .await
            .unwrap();
        assert_eq!(found.username, "alice");
    }

    #[tokio::test]
    async fn test_wrong_password_and_missing_user_look_alike() {
        let (store, _dir) = test_store().await;
        store
            .insert_user(user("alice", "alice@algoforge.io", "s3cret", Role::Admin))
            .await
            .unwrap();

        let wrong_pw = store.find_by_credentials("alice", "nope").await;
        let missing = store.find_by_credentials("nobody", "nope").await;

        assert!(matches!(wrong_pw, Err(Error::InvalidCredentials)));
        assert!(matches!(missing, Err(Error::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_inactive_user_cannot_authenticate() {
        let (store, _dir) = test_store().await;
        let created = store
            .insert_user(user("alice", "alice@algoforge.io", "s3cret", Role::Admin))
            .await
            .unwrap();

        store.set_user_active(&created.id, false).await.unwrap();

        let result = store.find_by_credentials("alice", "s3cret").await;
        assert!(matches!(result, Err(Error::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_record_login_sets_timestamp() {
        let (store, _dir) = test_store().await;
        let created = store
            .insert_user(user("alice", "alice@algoforge.io", "pw", Role::Student))
            .await
            .unwrap();
        assert!(created.last_login.is_none());

        store.record_login(&created.id).await.unwrap();
        let reloaded = store.get_user(&created.id).await.unwrap();
        assert!(reloaded.last_login.is_some());
    }
}
