//! Auth handlers and shared response helpers.

pub mod demo;
pub mod health;
pub mod login;
pub mod logout;

use axum::{http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

#[cfg(test)]
mod tests;

/// JSON error/notice body shared by every handler.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

pub(crate) fn message(status: StatusCode, text: &str) -> (StatusCode, Json<MessageResponse>) {
    (
        status,
        Json(MessageResponse {
            message: text.to_string(),
        }),
    )
}

/// Resolve the client identity used for admission control from common proxy
/// headers, falling back to an opaque bucket when none is present.
pub(crate) fn client_ip(headers: &axum::http::HeaderMap) -> String {
    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty());
    if let Some(ip) = forwarded {
        return ip.to_string();
    }
    headers
        .get("x-real-ip")
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map_or_else(|| "unknown".to_string(), str::to_string)
}

#[cfg(test)]
mod helper_tests {
    use super::*;
    use axum::http::{HeaderMap, HeaderValue};

    #[test]
    fn client_ip_prefers_forwarded_for() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("1.2.3.4, 5.6.7.8"),
        );
        headers.insert("x-real-ip", HeaderValue::from_static("9.9.9.9"));
        assert_eq!(client_ip(&headers), "1.2.3.4");
    }

    #[test]
    fn client_ip_falls_back_to_real_ip_then_unknown() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", HeaderValue::from_static("9.9.9.9"));
        assert_eq!(client_ip(&headers), "9.9.9.9");
        assert_eq!(client_ip(&HeaderMap::new()), "unknown");
    }
}
