//! Credential login endpoint.

use axum::{extract::Extension, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;
use utoipa::ToSchema;

use super::{client_ip, message, MessageResponse};
use crate::api::state::AuthState;
use crate::auth::{AdmissionController, LoginOutcome};

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(ToSchema, Serialize, Debug)]
pub struct TokenResponse {
    pub token: String,
}

#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 400, description = "Bad input or wrong credentials", body = MessageResponse),
        (status = 429, description = "Rate limit exceeded", body = MessageResponse),
    ),
    tag = "auth"
)]
pub async fn login(
    headers: HeaderMap,
    admission: Extension<Arc<AdmissionController>>,
    auth: Extension<Arc<AuthState>>,
    payload: Option<Json<LoginRequest>>,
) -> impl IntoResponse {
    // Admission is the first gate, before any validation or verification.
    if !admission.allow(&client_ip(&headers), "POST", "/auth/login") {
        return message(
            StatusCode::TOO_MANY_REQUESTS,
            "Rate limit exceeded. Try again later.",
        )
        .into_response();
    }

    let Some(Json(request)) = payload else {
        return message(StatusCode::BAD_REQUEST, "Missing login data.").into_response();
    };

    match auth
        .authenticator()
        .authenticate(&request.username, &request.password)
    {
        Ok(LoginOutcome::Authenticated { token }) => {
            debug!("login successful");
            (StatusCode::OK, Json(TokenResponse { token })).into_response()
        }
        Ok(LoginOutcome::Rejected) => {
            debug!("login rejected");
            message(StatusCode::BAD_REQUEST, "Invalid username or password.").into_response()
        }
        // Bad input is distinct from failed authentication; surface the
        // field message so the caller can fix the request.
        Err(err) => message(StatusCode::BAD_REQUEST, &err.to_string()).into_response(),
    }
}
