// OpenAPI specification generation
//
// Defines the OpenAPI spec for the Inkpost API, served through Swagger UI.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api;
use inkpost_common::{
    AuthTokenResponse, CreatePostRequest, CreatePostResponse, Post, PostResponse, PostsResponse,
    SigninRequest, SignupRequest, UpdatePostRequest,
};

/// Registers the bearer token scheme referenced by protected endpoints
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation for the Inkpost API
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    paths(
        api::posts::create_post,
        api::posts::list_posts,
        api::posts::get_post,
        api::posts::update_post,
    ),
    components(
        schemas(
            Post,
            CreatePostRequest, UpdatePostRequest,
            CreatePostResponse, PostResponse, PostsResponse,
            SignupRequest, SigninRequest, AuthTokenResponse,
            api::common::ErrorResponse,
        )
    ),
    tags(
        (name = "posts", description = "Blog post endpoints")
    ),
    info(
        title = "Inkpost API",
        version = "0.1.0",
        description = "Minimal blogging backend: accounts, tokens, and posts",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    )
)]
pub struct ApiDoc;
