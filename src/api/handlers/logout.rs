//! Logout endpoint: terminates the session named by the bearer token.

use axum::{
    extract::Extension,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::debug;

use super::{message, MessageResponse};
use crate::api::state::AuthState;
use crate::auth::gate::extract_bearer_token;

#[utoipa::path(
    post,
    path = "/auth/logout",
    responses(
        (status = 200, description = "Logout successful", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
    ),
    tag = "auth"
)]
pub async fn logout(headers: HeaderMap, auth: Extension<Arc<AuthState>>) -> impl IntoResponse {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(extract_bearer_token);

    let Some(token) = token else {
        return message(
            StatusCode::UNAUTHORIZED,
            "Missing or invalid Authorization header.",
        );
    };

    // Resolve who owns the token before terminating; demo tokens carry no
    // session and fall through to the invalid branch.
    match auth.sessions().principal_for_token(token) {
        Some(principal) => {
            auth.sessions().terminate(&principal);
            debug!("session terminated");
            message(StatusCode::OK, "Logout successful.")
        }
        None => message(StatusCode::UNAUTHORIZED, "Invalid token."),
    }
}
