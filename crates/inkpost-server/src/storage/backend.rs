// Storage backend abstraction
// Decision: Use enum dispatch for simplicity over trait objects
//
// A unified StorageBackend that works with either PostgreSQL (production)
// or in-memory (dev mode) storage.

use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

use super::memory::InMemoryDatabase;
use super::models::*;
use super::repositories::Database;

/// Storage backend that can be either PostgreSQL or in-memory
#[derive(Clone)]
pub enum StorageBackend {
    /// PostgreSQL database (production)
    Postgres(Database),
    /// In-memory database (dev mode)
    InMemory(std::sync::Arc<InMemoryDatabase>),
}

impl StorageBackend {
    /// Create a PostgreSQL storage backend from a database URL
    pub async fn postgres(database_url: &str) -> Result<Self> {
        let db = Database::from_url(database_url).await?;
        Ok(Self::Postgres(db))
    }

    /// Create an in-memory storage backend
    pub fn in_memory() -> Self {
        Self::InMemory(std::sync::Arc::new(InMemoryDatabase::new()))
    }

    /// Check if this is dev mode (in-memory)
    pub fn is_dev_mode(&self) -> bool {
        matches!(self, Self::InMemory(_))
    }

    /// Run pending migrations; no-op for the in-memory backend
    pub async fn run_migrations(&self) -> Result<()> {
        match self {
            Self::Postgres(db) => db.run_migrations().await,
            Self::InMemory(_) => Ok(()),
        }
    }

    /// Get the PostgreSQL pool if using the PostgreSQL backend
    pub fn pool(&self) -> Option<&PgPool> {
        match self {
            Self::Postgres(db) => Some(db.pool()),
            Self::InMemory(_) => None,
        }
    }

    // ============================================
    // Users
    // ============================================

    pub async fn create_user(&self, input: CreateUserRow) -> Result<UserRow> {
        match self {
            Self::Postgres(db) => db.create_user(input).await,
            Self::InMemory(db) => db.create_user(input).await,
        }
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<UserRow>> {
        match self {
            Self::Postgres(db) => db.get_user_by_email(email).await,
            Self::InMemory(db) => db.get_user_by_email(email).await,
        }
    }

    pub async fn get_user(&self, id: Uuid) -> Result<Option<UserRow>> {
        match self {
            Self::Postgres(db) => db.get_user(id).await,
            Self::InMemory(db) => db.get_user(id).await,
        }
    }

    // ============================================
    // Posts
    // ============================================

    pub async fn create_post(&self, input: CreatePostRow) -> Result<PostRow> {
        match self {
            Self::Postgres(db) => db.create_post(input).await,
            Self::InMemory(db) => db.create_post(input).await,
        }
    }

    pub async fn get_post(&self, id: Uuid) -> Result<Option<PostRow>> {
        match self {
            Self::Postgres(db) => db.get_post(id).await,
            Self::InMemory(db) => db.get_post(id).await,
        }
    }

    pub async fn list_posts(&self) -> Result<Vec<PostRow>> {
        match self {
            Self::Postgres(db) => db.list_posts().await,
            Self::InMemory(db) => db.list_posts().await,
        }
    }

    pub async fn update_post(
        &self,
        id: Uuid,
        author_id: Uuid,
        input: UpdatePost,
    ) -> Result<Option<PostRow>> {
        match self {
            Self::Postgres(db) => db.update_post(id, author_id, input).await,
            Self::InMemory(db) => db.update_post(id, author_id, input).await,
        }
    }
}
