//! Credential authentication: validate, look up, verify, mint a session.
//!
//! The principal store is an external collaborator; the authenticator only
//! consumes a username -> stored-hash lookup. There are no partial states:
//! a session is minted iff the principal exists and the password verifies,
//! and a rejected attempt leaves the registry untouched.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use super::password;
use super::session::SessionRegistry;
use super::validation::{required_string, ValidationError, MAX_CREDENTIAL_LENGTH};

/// Read-only source of stored password hashes, keyed by username.
pub trait PrincipalStore: Send + Sync {
    fn lookup_hash(&self, username: &str) -> Option<String>;
}

#[derive(Debug, Deserialize)]
struct PrincipalRecord {
    username: String,
    password_hash: String,
}

/// In-memory principal store, loadable from a JSON file of
/// `[{"username": ..., "password_hash": ...}]` records.
#[derive(Debug, Default)]
pub struct MemoryPrincipalStore {
    hashes: HashMap<String, String>,
}

impl MemoryPrincipalStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_principal(mut self, username: &str, password_hash: &str) -> Self {
        self.hashes
            .insert(username.to_string(), password_hash.to_string());
        self
    }

    /// Load principals from a JSON users file.
    ///
    /// # Errors
    /// Returns an error when the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read users file: {}", path.display()))?;
        let records: Vec<PrincipalRecord> = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse users file: {}", path.display()))?;

        let mut store = Self::new();
        for record in records {
            store.hashes.insert(record.username, record.password_hash);
        }
        Ok(store)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }
}

impl PrincipalStore for MemoryPrincipalStore {
    fn lookup_hash(&self, username: &str) -> Option<String> {
        self.hashes.get(username).cloned()
    }
}

/// Outcome of a login attempt that passed field validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated { token: String },
    Rejected,
}

/// Verifies credentials against the principal store and mints sessions.
#[derive(Clone)]
pub struct CredentialAuthenticator {
    store: Arc<dyn PrincipalStore>,
    sessions: Arc<SessionRegistry>,
}

impl CredentialAuthenticator {
    #[must_use]
    pub fn new(store: Arc<dyn PrincipalStore>, sessions: Arc<SessionRegistry>) -> Self {
        Self { store, sessions }
    }

    /// Authenticate a username/password pair.
    ///
    /// An unknown principal and a wrong password are indistinguishable to
    /// the caller: both are `Rejected`.
    ///
    /// # Errors
    /// Returns `ValidationError` when a field fails the shared input rules;
    /// this is bad input, distinct from failed authentication.
    pub fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginOutcome, ValidationError> {
        required_string(username, "Username", MAX_CREDENTIAL_LENGTH)?;
        required_string(password, "Password", MAX_CREDENTIAL_LENGTH)?;

        let Some(stored_hash) = self.store.lookup_hash(username) else {
            debug!("login rejected: unknown principal");
            return Ok(LoginOutcome::Rejected);
        };

        if !password::verify(password, &stored_hash) {
            debug!("login rejected: password verification failed");
            return Ok(LoginOutcome::Rejected);
        }

        let token = self.sessions.create(username);
        Ok(LoginOutcome::Authenticated { token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authenticator_with(
        store: MemoryPrincipalStore,
    ) -> (CredentialAuthenticator, Arc<SessionRegistry>) {
        let sessions = Arc::new(SessionRegistry::new());
        (
            CredentialAuthenticator::new(Arc::new(store), Arc::clone(&sessions)),
            sessions,
        )
    }

    #[test]
    fn valid_credentials_mint_a_session() {
        let hash = password::hash("correct horse").expect("hashing succeeds");
        let (authenticator, sessions) =
            authenticator_with(MemoryPrincipalStore::new().with_principal("alice", &hash));

        let outcome = authenticator
            .authenticate("alice", "correct horse")
            .expect("input is valid");
        let LoginOutcome::Authenticated { token } = outcome else {
            panic!("expected authentication to succeed");
        };
        assert!(sessions.is_valid(&token));
        assert_eq!(sessions.principal_for_token(&token), Some("alice".into()));
    }

    #[test]
    fn wrong_password_is_rejected_without_side_effects() {
        let hash = password::hash("correct horse").expect("hashing succeeds");
        let (authenticator, sessions) =
            authenticator_with(MemoryPrincipalStore::new().with_principal("alice", &hash));

        // A pre-existing session must survive a rejected attempt untouched.
        let existing = sessions.create("bob");

        let outcome = authenticator
            .authenticate("alice", "wrong")
            .expect("input is valid");
        assert_eq!(outcome, LoginOutcome::Rejected);
        assert!(sessions.is_valid(&existing));
        assert_eq!(sessions.principal_for_token(&existing), Some("bob".into()));
    }

    #[test]
    fn unknown_principal_is_rejected() {
        let (authenticator, sessions) = authenticator_with(MemoryPrincipalStore::new());
        let outcome = authenticator
            .authenticate("nobody", "whatever")
            .expect("input is valid");
        assert_eq!(outcome, LoginOutcome::Rejected);
        assert_eq!(sessions.principal_for_token("nobody"), None);
    }

    #[test]
    fn blank_fields_are_bad_input_not_rejection() {
        let (authenticator, _) = authenticator_with(MemoryPrincipalStore::new());
        assert_eq!(
            authenticator.authenticate("", "password"),
            Err(ValidationError::Required { field: "Username" })
        );
        assert_eq!(
            authenticator.authenticate("alice", "  "),
            Err(ValidationError::Required { field: "Password" })
        );
    }

    #[test]
    fn oversized_fields_are_bad_input() {
        let (authenticator, _) = authenticator_with(MemoryPrincipalStore::new());
        let long = "a".repeat(MAX_CREDENTIAL_LENGTH + 1);
        assert!(matches!(
            authenticator.authenticate(&long, "password"),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn users_file_round_trip() {
        let hash = password::hash("pw").expect("hashing succeeds");
        let json = format!(r#"[{{"username": "alice", "password_hash": "{hash}"}}]"#);
        let dir = std::env::temp_dir().join("gatehouse-users-test");
        std::fs::create_dir_all(&dir).expect("temp dir is writable");
        let path = dir.join(format!("users-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, json).expect("temp file is writable");

        let store = MemoryPrincipalStore::from_path(&path).expect("file parses");
        assert_eq!(store.len(), 1);
        assert_eq!(store.lookup_hash("alice"), Some(hash));
        assert_eq!(store.lookup_hash("bob"), None);

        std::fs::remove_file(&path).ok();
    }
}
