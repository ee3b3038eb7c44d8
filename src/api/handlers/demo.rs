//! Demo login endpoint: issues a stateless, short-lived demo token.

use axum::{
    extract::Extension, http::HeaderMap, http::StatusCode, response::IntoResponse, Json,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::error;
use utoipa::ToSchema;

use super::{client_ip, message, MessageResponse};
use crate::api::state::AuthState;
use crate::auth::AdmissionController;

#[derive(ToSchema, Serialize, Debug)]
pub struct DemoTokenResponse {
    pub token: String,
    pub is_demo: bool,
}

#[utoipa::path(
    post,
    path = "/auth/demo",
    responses(
        (status = 200, description = "Demo token issued", body = DemoTokenResponse),
        (status = 429, description = "Rate limit exceeded", body = MessageResponse),
        (status = 500, description = "Signing secret missing", body = MessageResponse),
    ),
    tag = "auth"
)]
pub async fn demo(
    headers: HeaderMap,
    admission: Extension<Arc<AdmissionController>>,
    auth: Extension<Arc<AuthState>>,
) -> impl IntoResponse {
    if !admission.allow(&client_ip(&headers), "POST", "/auth/demo") {
        return message(
            StatusCode::TOO_MANY_REQUESTS,
            "Rate limit exceeded. Try again later.",
        )
        .into_response();
    }

    match auth.demo().issue() {
        Ok(token) => (
            StatusCode::OK,
            Json(DemoTokenResponse {
                token,
                is_demo: true,
            }),
        )
            .into_response(),
        // A missing signing secret is a configuration fault, not a client
        // error; never fall back to issuing an unsigned token.
        Err(err) => {
            error!("demo token issuance failed: {err}");
            message(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server misconfigured: demo token signing secret missing.",
            )
            .into_response()
        }
    }
}
