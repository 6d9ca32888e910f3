// Authentication HTTP routes
// Decision: /v1 prefix for all endpoints
// Decision: signup and signin rejections are 403 with deliberately generic
//           messages; validation failures are 400 before any storage call;
//           storage failures are 500 like everywhere else

use axum::{extract::State, routing::post, Json, Router};

use inkpost_common::{AuthTokenResponse, SigninRequest, SignupRequest};

use super::middleware::AuthState;
use crate::api::error::ApiError;
use crate::services::{SigninError, SignupError, UserService};

/// Create auth routes
pub fn routes(state: AuthState) -> Router {
    Router::new()
        .route("/v1/signup", post(signup))
        .route("/v1/signin", post(signin))
        .with_state(state)
}

/// POST /v1/signup - Create an account and return a token
pub async fn signup(
    State(state): State<AuthState>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<AuthTokenResponse>, ApiError> {
    req.validate()?;

    let service = UserService::new(state.db.clone());
    let user = service
        .signup(&req.name, &req.email, &req.password)
        .await
        .map_err(|e| {
            if let SignupError::EmailTaken = e {
                tracing::debug!(email = %req.email, "Signup rejected: email taken");
            }
            signup_error_to_api(e)
        })?;

    tracing::info!(user_id = %user.id, "User signed up");
    issue_token(&state, user.id)
}

/// POST /v1/signin - Verify credentials and return a token
pub async fn signin(
    State(state): State<AuthState>,
    Json(req): Json<SigninRequest>,
) -> Result<Json<AuthTokenResponse>, ApiError> {
    req.validate()?;

    let service = UserService::new(state.db.clone());
    let user = service.signin(&req.email, &req.password).await.map_err(|e| {
        if let SigninError::InvalidCredentials = e {
            tracing::debug!(email = %req.email, "Signin rejected");
        }
        signin_error_to_api(e)
    })?;

    issue_token(&state, user.id)
}

/// Duplicate email stays a generic 403; a storage fault is a server fault
fn signup_error_to_api(e: SignupError) -> ApiError {
    match e {
        SignupError::EmailTaken => ApiError::forbidden("error while signing up"),
        SignupError::Storage(e) => ApiError::Internal(e),
    }
}

/// Bad credentials are a generic 403; a storage fault is a server fault,
/// never reported as a credential problem
fn signin_error_to_api(e: SigninError) -> ApiError {
    match e {
        SigninError::InvalidCredentials => ApiError::forbidden("invalid credentials"),
        SigninError::Storage(e) => ApiError::Internal(e),
    }
}

fn issue_token(state: &AuthState, user_id: uuid::Uuid) -> Result<Json<AuthTokenResponse>, ApiError> {
    let jwt = state
        .jwt_service
        .generate_access_token(user_id)
        .map_err(ApiError::Internal)?;
    Ok(Json(AuthTokenResponse { jwt }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_rejections_are_forbidden() {
        let err = signup_error_to_api(SignupError::EmailTaken);
        assert_eq!(err.into_response().status(), StatusCode::FORBIDDEN);

        let err = signin_error_to_api(SigninError::InvalidCredentials);
        assert_eq!(err.into_response().status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_storage_failure_is_internal() {
        // A database outage must not masquerade as a client error
        let err = signup_error_to_api(SignupError::Storage(anyhow::anyhow!("pool closed")));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        let err = signin_error_to_api(SigninError::Storage(anyhow::anyhow!("pool closed")));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_storage_failure_message_is_generic() {
        let err = signin_error_to_api(SigninError::Storage(anyhow::anyhow!(
            "connection refused to db at 10.0.0.3"
        )));
        assert_eq!(err.to_string(), "internal server error");
    }
}
