// Authentication: token issuance, verification, and the request extractor

pub mod config;
pub mod jwt;
pub mod middleware;
pub mod routes;

pub use config::AuthConfig;
pub use middleware::{AuthError, AuthState, AuthUser, FromRef};
pub use routes::routes;
