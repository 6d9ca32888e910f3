// Row types shared by the PostgreSQL and in-memory backends

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// A user row as stored
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    /// Argon2id hash in PHC string format. Never the plaintext password.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a user
#[derive(Debug, Clone)]
pub struct CreateUserRow {
    pub email: String,
    pub name: String,
    pub password_hash: String,
}

/// A post row as stored
#[derive(Debug, Clone, FromRow)]
pub struct PostRow {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a post
#[derive(Debug, Clone)]
pub struct CreatePostRow {
    pub title: String,
    pub content: String,
    pub author_id: Uuid,
}

/// Partial update for a post. None leaves the field unchanged.
/// author_id is deliberately absent: ownership is immutable.
#[derive(Debug, Clone, Default)]
pub struct UpdatePost {
    pub title: Option<String>,
    pub content: Option<String>,
}
