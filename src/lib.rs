//! # Gatehouse (Request Admission & Authentication Gate)
//!
//! `gatehouse` is the admission and authentication core for a multi-entity
//! CRUD service. Every state-changing request passes through it before any
//! business logic runs.
//!
//! ## Admission
//!
//! A sliding-window rate limiter budgets requests per (client, route) over a
//! trailing 60-second window. Write-heavy routes carry tighter ceilings than
//! read-heavy ones; denial surfaces as `429` so clients can back off instead
//! of treating it as a permanent rejection.
//!
//! ## Dual-Path Bearer Authentication
//!
//! Bearer credentials are verified through two mutually exclusive paths:
//!
//! - **Demo tokens** are stateless, HS256-signed JWTs carrying a `demo`
//!   claim. They expire after 30 minutes and never touch server-held state,
//!   which keeps low-trust demo traffic away from real accounts.
//! - **Session tokens** are opaque UUIDs held in an in-memory registry,
//!   minted after bcrypt credential verification. One active session per
//!   principal; re-login invalidates the prior token.
//!
//! The demo path is tried first and on any parse failure the gate falls
//! back to the session registry, so an arbitrary bearer string is expected
//! input, never an error.
//!
//! All gate state is in-memory and process-wide: sessions and rate-limit
//! counters reset on restart, and nothing coordinates across nodes.

pub mod api;
pub mod auth;
pub mod cli;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            // Acceptable in non-git build environments
            return;
        }
        // Should be a hex string (full SHA-1 is 40 chars, but could be short)
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "GIT_COMMIT_HASH should be a hex string, got: {GIT_COMMIT_HASH}"
        );
        assert!(
            GIT_COMMIT_HASH.len() >= 7,
            "GIT_COMMIT_HASH should be at least 7 characters long, got: {GIT_COMMIT_HASH}"
        );
    }

    #[test]
    fn test_app_user_agent_format() {
        assert!(APP_USER_AGENT.starts_with(env!("CARGO_PKG_NAME")));
        assert!(APP_USER_AGENT.contains(env!("CARGO_PKG_VERSION")));
    }
}
