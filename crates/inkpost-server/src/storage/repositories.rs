// PostgreSQL repository
//
// Runtime sqlx queries (no compile-time checking) so the crate builds
// without a live DATABASE_URL. Uuids are generated application-side with
// uuid v7 so both backends produce time-ordered identifiers.

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use super::models::*;

/// PostgreSQL database handle
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL from a connection URL
    pub async fn from_url(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await
            .context("Failed to connect to PostgreSQL")?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Apply pending migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("Failed to run database migrations")?;
        Ok(())
    }

    // ============================================
    // Users
    // ============================================

    pub async fn create_user(&self, input: CreateUserRow) -> Result<UserRow> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (id, email, name, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&input.email)
        .bind(&input.name)
        .bind(&input.password_hash)
        .fetch_one(&self.pool)
        .await
        .context("Failed to create user")?;
        Ok(row)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<UserRow>> {
        let row = sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to fetch user by email")?;
        Ok(row)
    }

    pub async fn get_user(&self, id: Uuid) -> Result<Option<UserRow>> {
        let row = sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to fetch user")?;
        Ok(row)
    }

    // ============================================
    // Posts
    // ============================================

    pub async fn create_post(&self, input: CreatePostRow) -> Result<PostRow> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            INSERT INTO posts (id, title, content, author_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&input.title)
        .bind(&input.content)
        .bind(input.author_id)
        .fetch_one(&self.pool)
        .await
        .context("Failed to create post")?;
        Ok(row)
    }

    pub async fn get_post(&self, id: Uuid) -> Result<Option<PostRow>> {
        let row = sqlx::query_as::<_, PostRow>("SELECT * FROM posts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to fetch post")?;
        Ok(row)
    }

    pub async fn list_posts(&self) -> Result<Vec<PostRow>> {
        // id DESC tie-break (v7, time-ordered) matches the in-memory backend
        let rows =
            sqlx::query_as::<_, PostRow>("SELECT * FROM posts ORDER BY created_at DESC, id DESC")
                .fetch_all(&self.pool)
                .await
                .context("Failed to list posts")?;
        Ok(rows)
    }

    /// Update a post, guarded by author_id in the WHERE clause so a
    /// concurrent ownership race cannot slip a write past the check.
    pub async fn update_post(
        &self,
        id: Uuid,
        author_id: Uuid,
        input: UpdatePost,
    ) -> Result<Option<PostRow>> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            UPDATE posts
            SET title = COALESCE($3, title),
                content = COALESCE($4, content),
                updated_at = now()
            WHERE id = $1 AND author_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(author_id)
        .bind(input.title)
        .bind(input.content)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to update post")?;
        Ok(row)
    }
}
