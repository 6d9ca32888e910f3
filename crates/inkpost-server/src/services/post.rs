// Post service: CRUD plus the ownership check on update

use anyhow::Result;
use uuid::Uuid;

use inkpost_common::Post;

use crate::storage::{CreatePostRow, PostRow, StorageBackend, UpdatePost};

/// Why an update was rejected
#[derive(Debug, thiserror::Error)]
pub enum UpdatePostError {
    #[error("post not found")]
    NotFound,
    #[error("only the author may update this post")]
    NotOwner,
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub struct PostService {
    db: StorageBackend,
}

impl PostService {
    pub fn new(db: StorageBackend) -> Self {
        Self { db }
    }

    /// Create a post owned by author_id
    pub async fn create(&self, author_id: Uuid, title: String, content: String) -> Result<Post> {
        let row = self
            .db
            .create_post(CreatePostRow {
                title,
                content,
                author_id,
            })
            .await?;
        Ok(Self::row_to_post(row))
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Post>> {
        let row = self.db.get_post(id).await?;
        Ok(row.map(Self::row_to_post))
    }

    /// All posts, newest first
    pub async fn list(&self) -> Result<Vec<Post>> {
        let rows = self.db.list_posts().await?;
        Ok(rows.into_iter().map(Self::row_to_post).collect())
    }

    /// Update a post the caller owns. Fetch, check ownership, then write;
    /// the storage-level update is additionally predicated on the author id
    /// so a concurrent change cannot bypass the check.
    pub async fn update(
        &self,
        caller_id: Uuid,
        id: Uuid,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<Post, UpdatePostError> {
        let existing = self
            .db
            .get_post(id)
            .await?
            .ok_or(UpdatePostError::NotFound)?;

        if existing.author_id != caller_id {
            return Err(UpdatePostError::NotOwner);
        }

        let updated = self
            .db
            .update_post(id, caller_id, UpdatePost { title, content })
            .await?
            // Row vanished between the read and the write
            .ok_or(UpdatePostError::NotFound)?;

        Ok(Self::row_to_post(updated))
    }

    fn row_to_post(row: PostRow) -> Post {
        Post {
            id: row.id,
            title: row.title,
            content: row.content,
            author_id: row.author_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
