//! In-memory session registry: principal -> opaque token.
//!
//! Sessions live for the life of the process; there is no expiry. Creating a
//! session for a principal that already has one overwrites the stored token,
//! which implicitly invalidates the old one (at most one active session per
//! principal). Tokens are opaque UUIDs and carry no claims, so nothing about
//! a bearer string's shape reveals whether this registry will accept it.

use parking_lot::Mutex;
use std::collections::HashMap;
use uuid::Uuid;

/// Process-wide map of authenticated principals to their current session
/// token. One mutex guards every operation so the reverse lookup can never
/// observe a half-applied create or terminate.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    // principal -> token
    sessions: Mutex<HashMap<String, String>>,
}

impl SessionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a fresh token for `principal`, replacing any existing session.
    /// Never fails; the token space is large enough that cross-principal
    /// collisions are not expected in practice.
    #[must_use]
    pub fn create(&self, principal: &str) -> String {
        let token = Uuid::new_v4().to_string();
        self.sessions
            .lock()
            .insert(principal.to_string(), token.clone());
        token
    }

    /// True iff `token` is some principal's current token.
    #[must_use]
    pub fn is_valid(&self, token: &str) -> bool {
        self.sessions.lock().values().any(|value| value == token)
    }

    /// Remove `principal`'s session. Idempotent; terminating a principal
    /// with no session is a no-op.
    pub fn terminate(&self, principal: &str) {
        self.sessions.lock().remove(principal);
    }

    /// Reverse lookup: resolve a token back to its principal.
    #[must_use]
    pub fn principal_for_token(&self, token: &str) -> Option<String> {
        self.sessions
            .lock()
            .iter()
            .find(|(_, value)| value.as_str() == token)
            .map(|(principal, _)| principal.clone())
    }
}
