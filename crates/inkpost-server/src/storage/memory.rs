// In-memory storage implementation for dev mode
// Decision: Use parking_lot for thread-safe access
// Decision: UUIDs generated via uuid v7 (time-ordered)
//
// Provides a PostgreSQL-compatible API backed by in-memory HashMaps, so the
// server runs without a database for development and router-level tests.

use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

use super::models::*;

/// In-memory database for dev mode
/// All data is stored in memory and lost on restart
#[derive(Default)]
pub struct InMemoryDatabase {
    users: RwLock<HashMap<Uuid, UserRow>>,
    posts: RwLock<HashMap<Uuid, PostRow>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    // ============================================
    // Users
    // ============================================

    pub async fn create_user(&self, input: CreateUserRow) -> Result<UserRow> {
        let mut users = self.users.write();
        // Same uniqueness guarantee the UNIQUE constraint gives Postgres
        if users.values().any(|u| u.email == input.email) {
            return Err(anyhow!("email already registered: {}", input.email));
        }
        let now = Self::now();
        let id = Uuid::now_v7();
        let row = UserRow {
            id,
            email: input.email,
            name: input.name,
            password_hash: input.password_hash,
            created_at: now,
            updated_at: now,
        };
        users.insert(id, row.clone());
        Ok(row)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<UserRow>> {
        Ok(self
            .users
            .read()
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    pub async fn get_user(&self, id: Uuid) -> Result<Option<UserRow>> {
        Ok(self.users.read().get(&id).cloned())
    }

    // ============================================
    // Posts
    // ============================================

    pub async fn create_post(&self, input: CreatePostRow) -> Result<PostRow> {
        let now = Self::now();
        let id = Uuid::now_v7();
        let row = PostRow {
            id,
            title: input.title,
            content: input.content,
            author_id: input.author_id,
            created_at: now,
            updated_at: now,
        };
        self.posts.write().insert(id, row.clone());
        Ok(row)
    }

    pub async fn get_post(&self, id: Uuid) -> Result<Option<PostRow>> {
        Ok(self.posts.read().get(&id).cloned())
    }

    pub async fn list_posts(&self) -> Result<Vec<PostRow>> {
        let posts = self.posts.read();
        let mut result: Vec<_> = posts.values().cloned().collect();
        // Tie-break on id (v7, time-ordered) to keep the order stable
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(result)
    }

    /// Update a post, guarded by author_id. Returns None when no post
    /// matches both the id and the author.
    pub async fn update_post(
        &self,
        id: Uuid,
        author_id: Uuid,
        input: UpdatePost,
    ) -> Result<Option<PostRow>> {
        let mut posts = self.posts.write();
        if let Some(post) = posts.get_mut(&id) {
            if post.author_id != author_id {
                return Ok(None);
            }
            if let Some(title) = input.title {
                post.title = title;
            }
            if let Some(content) = input.content {
                post.content = content;
            }
            post.updated_at = Self::now();
            return Ok(Some(post.clone()));
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_input(email: &str) -> CreateUserRow {
        CreateUserRow {
            email: email.to_string(),
            name: "Test".to_string(),
            password_hash: "$argon2id$fake".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_user() {
        let db = InMemoryDatabase::new();
        let user = db.create_user(user_input("a@x.com")).await.unwrap();

        let by_id = db.get_user(user.id).await.unwrap().unwrap();
        assert_eq!(by_id.email, "a@x.com");

        let by_email = db.get_user_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(by_email.id, user.id);

        assert!(db.get_user_by_email("b@x.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let db = InMemoryDatabase::new();
        db.create_user(user_input("a@x.com")).await.unwrap();
        assert!(db.create_user(user_input("a@x.com")).await.is_err());
    }

    #[tokio::test]
    async fn test_post_lifecycle() {
        let db = InMemoryDatabase::new();
        let author = db.create_user(user_input("a@x.com")).await.unwrap();

        let post = db
            .create_post(CreatePostRow {
                title: "First".to_string(),
                content: "Body".to_string(),
                author_id: author.id,
            })
            .await
            .unwrap();
        assert_eq!(post.author_id, author.id);

        // Partial update keeps untouched fields
        let updated = db
            .update_post(
                post.id,
                author.id,
                UpdatePost {
                    title: Some("Second".to_string()),
                    content: None,
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.title, "Second");
        assert_eq!(updated.content, "Body");

        // Wrong author does not match
        let other = Uuid::now_v7();
        let denied = db
            .update_post(post.id, other, UpdatePost::default())
            .await
            .unwrap();
        assert!(denied.is_none());
        let unchanged = db.get_post(post.id).await.unwrap().unwrap();
        assert_eq!(unchanged.title, "Second");
    }

    #[tokio::test]
    async fn test_list_posts_newest_first() {
        let db = InMemoryDatabase::new();
        let author = db.create_user(user_input("a@x.com")).await.unwrap();
        for title in ["one", "two", "three"] {
            db.create_post(CreatePostRow {
                title: title.to_string(),
                content: "c".to_string(),
                author_id: author.id,
            })
            .await
            .unwrap();
        }
        let posts = db.list_posts().await.unwrap();
        assert_eq!(posts.len(), 3);
        assert!(posts.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }
}
