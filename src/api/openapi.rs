//! OpenAPI document for the auth surface.

use utoipa::OpenApi;

use super::handlers;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::health,
        handlers::login::login,
        handlers::logout::logout,
        handlers::demo::demo,
    ),
    components(schemas(
        handlers::MessageResponse,
        handlers::login::LoginRequest,
        handlers::login::TokenResponse,
        handlers::demo::DemoTokenResponse,
    )),
    tags(
        (name = "auth", description = "Login, logout, and demo token issuance"),
        (name = "health", description = "Liveness"),
    )
)]
pub struct ApiDoc;
