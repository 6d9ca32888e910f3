// Post CRUD HTTP routes

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use uuid::Uuid;

use inkpost_common::{
    CreatePostRequest, CreatePostResponse, PostResponse, PostsResponse, UpdatePostRequest,
};

use super::error::ApiError;
use crate::auth::{AuthState, AuthUser, FromRef};
use crate::services::{PostService, UpdatePostError};
use crate::storage::StorageBackend;

/// App state for post routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<PostService>,
    pub auth: AuthState,
}

impl AppState {
    pub fn new(db: StorageBackend, auth: AuthState) -> Self {
        Self {
            service: Arc::new(PostService::new(db)),
            auth,
        }
    }
}

impl FromRef<AppState> for AuthState {
    fn from_ref(input: &AppState) -> Self {
        input.auth.clone()
    }
}

/// Create post routes
///
/// `/v1/posts/bulk` must stay a static segment; the router prefers it over
/// `/v1/posts/:post_id` for matching.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/v1/posts", post(create_post))
        .route("/v1/posts/bulk", get(list_posts))
        .route("/v1/posts/:post_id", get(get_post).put(update_post))
        .with_state(state)
}

/// POST /v1/posts - Create a post owned by the authenticated caller
#[utoipa::path(
    post,
    path = "/v1/posts",
    request_body = CreatePostRequest,
    responses(
        (status = 200, description = "Post created", body = CreatePostResponse),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "posts"
)]
pub async fn create_post(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<CreatePostRequest>,
) -> Result<Json<CreatePostResponse>, ApiError> {
    req.validate()?;

    let post = state
        .service
        .create(user.id, req.title, req.content)
        .await
        .map_err(ApiError::Internal)?;

    tracing::info!(post_id = %post.id, author_id = %user.id, "Post created");
    Ok(Json(CreatePostResponse { id: post.id }))
}

/// GET /v1/posts/bulk - List all posts, newest first
#[utoipa::path(
    get,
    path = "/v1/posts/bulk",
    responses(
        (status = 200, description = "All posts", body = PostsResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "posts"
)]
pub async fn list_posts(State(state): State<AppState>) -> Result<Json<PostsResponse>, ApiError> {
    let posts = state.service.list().await.map_err(ApiError::Internal)?;
    Ok(Json(PostsResponse { posts }))
}

/// GET /v1/posts/{post_id} - Get a post by ID
#[utoipa::path(
    get,
    path = "/v1/posts/{post_id}",
    params(
        ("post_id" = Uuid, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Post found", body = PostResponse),
        (status = 404, description = "Post not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "posts"
)]
pub async fn get_post(
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
) -> Result<Json<PostResponse>, ApiError> {
    let post = state
        .service
        .get(post_id)
        .await
        .map_err(ApiError::Internal)?
        .ok_or_else(|| ApiError::not_found("post not found"))?;

    Ok(Json(PostResponse { post }))
}

/// PUT /v1/posts/{post_id} - Update a post the caller owns
///
/// Only provided fields change; the ownership check runs before any write.
#[utoipa::path(
    put,
    path = "/v1/posts/{post_id}",
    params(
        ("post_id" = Uuid, Path, description = "Post ID")
    ),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Post updated", body = PostResponse),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller is not the author"),
        (status = 404, description = "Post not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "posts"
)]
pub async fn update_post(
    State(state): State<AppState>,
    user: AuthUser,
    Path(post_id): Path<Uuid>,
    Json(req): Json<UpdatePostRequest>,
) -> Result<Json<PostResponse>, ApiError> {
    req.validate()?;

    let post = state
        .service
        .update(user.id, post_id, req.title, req.content)
        .await
        .map_err(|e| match e {
            UpdatePostError::NotFound => ApiError::not_found("post not found"),
            UpdatePostError::NotOwner => {
                ApiError::forbidden("only the author may update this post")
            }
            UpdatePostError::Storage(e) => ApiError::Internal(e),
        })?;

    Ok(Json(PostResponse { post }))
}
