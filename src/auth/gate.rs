//! Dual-path bearer authorization.
//!
//! A bearer string is either a stateless demo token or an opaque session
//! token, and nothing about its shape tells the caller which. The gate
//! therefore tries the cheap, stateless demo inspection first and only
//! touches the shared session registry when that fails; demo traffic never
//! takes the registry lock. Absence of a header, or a header that is not
//! `Bearer <value>`, is always a rejection, never a default-allow.

use std::sync::Arc;

use super::demo::DemoTokenIssuer;
use super::session::SessionRegistry;

/// Outcome of one authorization decision. Pure per-call decision; the gate
/// holds no per-request state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    Allowed { demo: bool },
    Denied(DeniedReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeniedReason {
    /// No `Authorization` header, wrong scheme, or empty token value.
    MissingOrMalformedHeader,
    /// Well-formed bearer value that neither path recognizes.
    InvalidToken,
}

impl DeniedReason {
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingOrMalformedHeader => "Missing or invalid Authorization header.",
            Self::InvalidToken => "Invalid token.",
        }
    }
}

/// Extract the token value from an `Authorization: Bearer <value>` header.
/// Returns `None` for a missing scheme or an empty value.
#[must_use]
pub fn extract_bearer_token(header: &str) -> Option<&str> {
    let token = header.trim().strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Orchestrates the two verification paths over a shared issuer and
/// registry. Constructed once at startup and shared via `Arc`.
#[derive(Debug)]
pub struct AuthenticationGate {
    demo: Arc<DemoTokenIssuer>,
    sessions: Arc<SessionRegistry>,
}

impl AuthenticationGate {
    #[must_use]
    pub fn new(demo: Arc<DemoTokenIssuer>, sessions: Arc<SessionRegistry>) -> Self {
        Self { demo, sessions }
    }

    /// Decide whether the request carrying `header` may proceed.
    ///
    /// Order matters: demo inspection short-circuits before any session
    /// lookup, and a demo-path parse failure falls through to the session
    /// path rather than aborting the request.
    #[must_use]
    pub fn authorize(&self, header: Option<&str>) -> AuthOutcome {
        let Some(token) = header.and_then(extract_bearer_token) else {
            return AuthOutcome::Denied(DeniedReason::MissingOrMalformedHeader);
        };

        if self.demo.is_demo_token(token) {
            return AuthOutcome::Allowed { demo: true };
        }

        if self.sessions.is_valid(token) {
            AuthOutcome::Allowed { demo: false }
        } else {
            AuthOutcome::Denied(DeniedReason::InvalidToken)
        }
    }
}
