// Authentication middleware and extractors
// Decision: Bearer header only; every protected handler takes AuthUser as an
//           argument, so the check cannot be bypassed by route composition
// Decision: 401 for every authentication failure; 403 is reserved for
//           authorization failures

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use super::{
    config::AuthConfig,
    jwt::{JwtService, TokenError},
};
use crate::storage::StorageBackend;

/// Authentication error
#[derive(Debug, Clone, Serialize)]
pub struct AuthError {
    pub error: String,
    #[serde(skip)]
    pub status: StatusCode,
}

impl AuthError {
    pub fn unauthorized(message: &str) -> Self {
        Self {
            error: message.to_string(),
            status: StatusCode::UNAUTHORIZED,
        }
    }

    pub fn forbidden(message: &str) -> Self {
        Self {
            error: message.to_string(),
            status: StatusCode::FORBIDDEN,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

/// Authenticated caller identity extracted from a verified token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    /// User ID
    pub id: Uuid,
}

/// Auth state shared across routes
#[derive(Clone)]
pub struct AuthState {
    pub jwt_service: Arc<JwtService>,
    pub db: StorageBackend,
}

impl AuthState {
    pub fn new(config: AuthConfig, db: StorageBackend) -> Self {
        let jwt_service = Arc::new(JwtService::new(config.jwt));
        Self { jwt_service, db }
    }
}

/// Extractor for the authenticated user
/// This is required - returns 401 if not authenticated
#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AuthState: FromRef<S>,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_state = AuthState::from_ref(state);
        extract_auth_user(parts, &auth_state)
    }
}

/// Helper trait for extracting AuthState from application state
pub trait FromRef<T> {
    fn from_ref(input: &T) -> Self;
}

impl FromRef<AuthState> for AuthState {
    fn from_ref(input: &AuthState) -> Self {
        input.clone()
    }
}

/// Extract and verify the bearer token from request headers
fn extract_auth_user(parts: &mut Parts, auth_state: &AuthState) -> Result<AuthUser, AuthError> {
    let auth_header = parts
        .headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| AuthError::unauthorized("Authentication required"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| AuthError::unauthorized("Invalid authorization header"))?;

    let token = auth_str
        .strip_prefix("Bearer ")
        .ok_or_else(|| AuthError::unauthorized("Invalid authorization header"))?
        .trim();

    if token.is_empty() {
        return Err(AuthError::unauthorized("Invalid authorization header"));
    }

    let claims = auth_state
        .jwt_service
        .validate_access_token(token)
        .map_err(|e| {
            tracing::debug!("JWT validation failed: {}", e);
            match e {
                TokenError::Expired => AuthError::unauthorized("Token expired"),
                TokenError::Invalid => AuthError::unauthorized("Invalid token"),
            }
        })?;

    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AuthError::unauthorized("Invalid user ID in token"))?;

    Ok(AuthUser { id: user_id })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::config::JwtConfig;
    use axum::http::Request;

    fn test_state() -> AuthState {
        let config = AuthConfig {
            jwt: JwtConfig {
                secret: "test-secret".to_string(),
                ..JwtConfig::default()
            },
        };
        AuthState::new(config, StorageBackend::in_memory())
    }

    fn parts_with_auth(value: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/v1/posts");
        if let Some(v) = value {
            builder = builder.header(header::AUTHORIZATION, v);
        }
        let (parts, _) = builder.body(()).unwrap().into_parts();
        parts
    }

    #[test]
    fn test_auth_error_statuses() {
        let error = AuthError::unauthorized("no token");
        assert_eq!(error.status, StatusCode::UNAUTHORIZED);

        let forbidden = AuthError::forbidden("not yours");
        assert_eq!(forbidden.status, StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_missing_header_rejected() {
        let state = test_state();
        let mut parts = parts_with_auth(None);
        let err = extract_auth_user(&mut parts, &state).unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.error, "Authentication required");
    }

    #[test]
    fn test_non_bearer_header_rejected() {
        let state = test_state();
        let mut parts = parts_with_auth(Some("Basic abc123"));
        let err = extract_auth_user(&mut parts, &state).unwrap_err();
        assert_eq!(err.error, "Invalid authorization header");
    }

    #[test]
    fn test_empty_token_rejected() {
        let state = test_state();
        let mut parts = parts_with_auth(Some("Bearer "));
        let err = extract_auth_user(&mut parts, &state).unwrap_err();
        assert_eq!(err.error, "Invalid authorization header");
    }

    #[test]
    fn test_garbage_token_rejected() {
        let state = test_state();
        let mut parts = parts_with_auth(Some("Bearer not.a.jwt"));
        let err = extract_auth_user(&mut parts, &state).unwrap_err();
        assert_eq!(err.error, "Invalid token");
    }

    #[test]
    fn test_valid_token_accepted() {
        let state = test_state();
        let user_id = Uuid::now_v7();
        let token = state.jwt_service.generate_access_token(user_id).unwrap();

        let mut parts = parts_with_auth(Some(&format!("Bearer {}", token)));
        let user = extract_auth_user(&mut parts, &state).unwrap();
        assert_eq!(user.id, user_id);
    }
}
