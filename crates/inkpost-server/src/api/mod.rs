// HTTP API routes
//
// This module contains all HTTP route handlers for the public API.

pub mod common;
pub mod error;
pub mod posts;

// Re-export common types
pub use common::ErrorResponse;
pub use error::ApiError;
