//! Shared authentication state wired into the router.

use std::sync::Arc;

use crate::auth::{
    AuthenticationGate, CredentialAuthenticator, DemoTokenIssuer, PrincipalStore, SessionRegistry,
};

/// Everything the auth handlers need, constructed once at startup and shared
/// via an `Extension` layer. The raw registries are never exposed to
/// handlers; they go through the component interfaces below.
pub struct AuthState {
    sessions: Arc<SessionRegistry>,
    demo: Arc<DemoTokenIssuer>,
    gate: AuthenticationGate,
    authenticator: CredentialAuthenticator,
}

impl AuthState {
    #[must_use]
    pub fn new(store: Arc<dyn PrincipalStore>, demo: DemoTokenIssuer) -> Self {
        let sessions = Arc::new(SessionRegistry::new());
        let demo = Arc::new(demo);
        let gate = AuthenticationGate::new(Arc::clone(&demo), Arc::clone(&sessions));
        let authenticator = CredentialAuthenticator::new(store, Arc::clone(&sessions));
        Self {
            sessions,
            demo,
            gate,
            authenticator,
        }
    }

    #[must_use]
    pub fn sessions(&self) -> &SessionRegistry {
        &self.sessions
    }

    #[must_use]
    pub fn demo(&self) -> &DemoTokenIssuer {
        &self.demo
    }

    #[must_use]
    pub fn gate(&self) -> &AuthenticationGate {
        &self.gate
    }

    #[must_use]
    pub fn authenticator(&self) -> &CredentialAuthenticator {
        &self.authenticator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AuthOutcome, MemoryPrincipalStore};
    use secrecy::SecretString;

    #[test]
    fn state_wires_gate_and_authenticator_to_one_registry() {
        let state = AuthState::new(
            Arc::new(MemoryPrincipalStore::new()),
            DemoTokenIssuer::new(Some(SecretString::from("a-signing-secret".to_string()))),
        );

        let token = state.sessions().create("alice");
        let header = format!("Bearer {token}");
        assert_eq!(
            state.gate().authorize(Some(&header)),
            AuthOutcome::Allowed { demo: false }
        );
    }
}
