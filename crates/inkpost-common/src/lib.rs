// Shared contracts for the Inkpost API
// Decision: Keep DTOs and validation in one crate so server and clients
//           agree on the wire shapes

pub mod types;
pub mod validation;

pub use types::{
    AuthTokenResponse, CreatePostRequest, CreatePostResponse, Post, PostResponse, PostsResponse,
    SigninRequest, SignupRequest, UpdatePostRequest,
};
pub use validation::ValidationError;
