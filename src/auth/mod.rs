//! The admission and authentication core.
//!
//! Every mutating request passes two gates before business logic:
//!
//! 1. [`admission::AdmissionController`] — a sliding-window request budget
//!    per (client, route), consulted first so abuse is cheap to reject.
//! 2. [`gate::AuthenticationGate`] — dual-path bearer verification: a
//!    stateless demo token (checked first, no shared state) or an opaque
//!    session token held by [`session::SessionRegistry`].
//!
//! Sessions are minted by [`credentials::CredentialAuthenticator`] after
//! bcrypt verification against an external [`credentials::PrincipalStore`].
//! All registries are in-memory and process-wide: state resets on restart,
//! and nothing here coordinates across nodes.

pub mod admission;
pub mod credentials;
pub mod demo;
pub mod gate;
pub mod password;
pub mod session;
pub mod validation;

pub use admission::{AdmissionController, RouteLimits};
pub use credentials::{
    CredentialAuthenticator, LoginOutcome, MemoryPrincipalStore, PrincipalStore,
};
pub use demo::DemoTokenIssuer;
pub use gate::{AuthOutcome, AuthenticationGate, DeniedReason};
pub use session::SessionRegistry;
pub use validation::ValidationError;
