// Inkpost server entry point

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use inkpost_server::auth::{AuthConfig, AuthState};
use inkpost_server::openapi::ApiDoc;
use inkpost_server::storage::StorageBackend;
use inkpost_server::{api, api_router};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inkpost_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db = match std::env::var("DATABASE_URL") {
        Ok(url) => {
            let backend = StorageBackend::postgres(&url)
                .await
                .context("Failed to connect to PostgreSQL")?;
            backend
                .run_migrations()
                .await
                .context("Failed to run database migrations")?;
            tracing::info!("Connected to PostgreSQL");
            backend
        }
        Err(_) => {
            tracing::warn!(
                "DATABASE_URL not set, using in-memory storage (data is lost on restart)"
            );
            StorageBackend::in_memory()
        }
    };

    let auth_config = AuthConfig::from_env();
    tracing::info!(
        token_lifetime_secs = auth_config.jwt.access_token_lifetime.as_secs(),
        "Authentication configured"
    );

    let auth_state = AuthState::new(auth_config, db.clone());
    let posts_state = api::posts::AppState::new(db.clone(), auth_state.clone());

    let cors = match std::env::var("CORS_ALLOWED_ORIGINS") {
        Ok(origins) => {
            let origins: Vec<HeaderValue> = origins
                .split(',')
                .map(|o| o.trim().parse())
                .collect::<Result<_, _>>()
                .context("Invalid CORS_ALLOWED_ORIGINS")?;
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods(Any)
                .allow_headers(Any)
        }
        Err(_) => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    let app = Router::new()
        .route("/health", get(health).with_state(db.clone()))
        .merge(api_router(posts_state, auth_state))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;
    tracing::info!("Listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}

async fn health(State(db): State<StorageBackend>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "storage": if db.is_dev_mode() { "memory" } else { "postgres" },
    }))
}
