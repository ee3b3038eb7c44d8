//! Bearer gate middleware for protected routes.
//!
//! The surrounding service mounts this on its mutating routes; it applies
//! the two gates in order (admission first, then bearer authorization) and
//! hands the verdict to the handler through an [`AuthContext`] extension.

use axum::{
    extract::{Extension, Request},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::handlers::{client_ip, message};
use super::state::AuthState;
use crate::auth::{AdmissionController, AuthOutcome};

/// Verdict of the gate, available to downstream handlers. `demo` requests
/// are authenticated but low-trust; handlers scope them to read-only data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthContext {
    pub demo: bool,
}

pub async fn require_bearer(
    Extension(admission): Extension<Arc<AdmissionController>>,
    Extension(auth): Extension<Arc<AuthState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let client = client_ip(request.headers());
    let method = request.method().as_str().to_string();
    let path = request.uri().path().to_string();

    if !admission.allow(&client, &method, &path) {
        return message(
            StatusCode::TOO_MANY_REQUESTS,
            "Rate limit exceeded. Try again later.",
        )
        .into_response();
    }

    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    match auth.gate().authorize(header) {
        AuthOutcome::Allowed { demo } => {
            request.extensions_mut().insert(AuthContext { demo });
            next.run(request).await
        }
        AuthOutcome::Denied(reason) => {
            message(StatusCode::UNAUTHORIZED, reason.message()).into_response()
        }
    }
}
