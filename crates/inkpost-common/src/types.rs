// Request and response DTOs for the public API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::validation::{self, ValidationError};

/// Request to create a new account
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SignupRequest {
    /// Display name shown next to published posts.
    #[schema(example = "Alice")]
    pub name: String,
    /// Email address used as the login identifier. Must be unique.
    #[schema(example = "alice@example.com")]
    pub email: String,
    /// Password, at least 6 characters.
    pub password: String,
}

impl SignupRequest {
    /// Validate all fields. No storage call may happen on failure.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::validate_name(&self.name)?;
        validation::validate_email(&self.email)?;
        validation::validate_password(&self.password)?;
        Ok(())
    }
}

/// Request to sign in with an existing account
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SigninRequest {
    #[schema(example = "alice@example.com")]
    pub email: String,
    pub password: String,
}

impl SigninRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::validate_email(&self.email)?;
        validation::validate_password(&self.password)?;
        Ok(())
    }
}

/// Token returned after successful signup or signin
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthTokenResponse {
    /// Signed bearer token. Present it as `Authorization: Bearer <jwt>`.
    pub jwt: String,
}

/// Request to create a new post
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    #[schema(example = "My first post")]
    pub title: String,
    #[schema(example = "Hello, world.")]
    pub content: String,
}

impl CreatePostRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::validate_title(&self.title)?;
        validation::validate_content(&self.content)?;
        Ok(())
    }
}

/// Request to update a post. Only provided fields will be updated.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdatePostRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl UpdatePostRequest {
    /// At least one field must be present; present fields must be non-empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.is_none() && self.content.is_none() {
            return Err(ValidationError);
        }
        if let Some(title) = &self.title {
            validation::validate_title(title)?;
        }
        if let Some(content) = &self.content {
            validation::validate_content(content)?;
        }
        Ok(())
    }
}

/// A published post
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    /// Identifier of the user who created the post. Immutable.
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Response for post creation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePostResponse {
    pub id: Uuid,
}

/// Response wrapping a single post
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostResponse {
    pub post: Post,
}

/// Response wrapping the full post listing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostsResponse {
    pub posts: Vec<Post>,
}
