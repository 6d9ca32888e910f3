// Inkpost server library
// Decision: Router assembly lives here so integration tests can drive the
//           exact app the binary serves

pub mod api;
pub mod auth;
pub mod openapi;
pub mod services;
pub mod storage;

use axum::Router;

/// Assemble the public API router (everything under /v1)
pub fn api_router(posts_state: api::posts::AppState, auth_state: auth::AuthState) -> Router {
    Router::new()
        .merge(api::posts::routes(posts_state))
        .merge(auth::routes(auth_state))
}
