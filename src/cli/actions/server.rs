use crate::api::{self, AuthState};
use crate::auth::{AdmissionController, DemoTokenIssuer, MemoryPrincipalStore, PrincipalStore};
use crate::cli::actions::Action;
use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

/// Handle the server action
pub async fn handle(action: Action) -> Result<()> {
    match action {
        Action::Server {
            port,
            secret,
            users,
            frontend_url,
        } => {
            let store: Arc<dyn PrincipalStore> = match users {
                Some(path) => {
                    let store = MemoryPrincipalStore::from_path(&path)?;
                    info!(principals = store.len(), "loaded users file");
                    Arc::new(store)
                }
                None => {
                    warn!("no users file configured, credential login will reject everyone");
                    Arc::new(MemoryPrincipalStore::new())
                }
            };

            if secret.is_none() {
                warn!("no signing secret configured, demo token issuance is disabled");
            }

            let auth_state = Arc::new(AuthState::new(store, DemoTokenIssuer::new(secret)));
            let admission = Arc::new(AdmissionController::default());

            api::new(port, &frontend_url, admission, auth_state).await?;
        }
    }

    Ok(())
}
