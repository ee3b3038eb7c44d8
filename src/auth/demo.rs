//! Stateless demo tokens: self-verifying signed claims for the demo identity.
//!
//! Demo tokens are deliberately stateless so demo traffic never touches the
//! session registry or any persistent store. They are HS256-signed JWTs
//! carrying a fixed subject and a `demo: true` claim, expiring 30 minutes
//! after issuance; the only way to "revoke" one is to let it expire.
//!
//! Trust model: [`DemoTokenIssuer::is_demo_token`] inspects claims without
//! checking the signature. The demo flag is advisory and scoped to the
//! low-privilege read-only path, which means a forged token with a `demo`
//! claim passes inspection. Callers that need cryptographic trust must use
//! [`DemoTokenIssuer::verify`], which validates the signature and expiry
//! against the issuing secret.

use anyhow::{anyhow, Context, Result};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Subject claim carried by every demo token.
pub const DEMO_SUBJECT: &str = "demo-user";

/// Lifetime of an issued demo token.
pub const DEMO_TOKEN_TTL_SECONDS: u64 = 30 * 60;

/// Claims encoded into a demo token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoClaims {
    pub sub: String,
    pub demo: bool,
    pub iat: u64,
    pub exp: u64,
}

/// Issues and inspects stateless demo tokens.
///
/// The signing secret comes from process configuration and may be absent:
/// the server still starts, but issuance fails until it is configured. That
/// failure is a configuration fault, not a per-request denial.
#[derive(Debug)]
pub struct DemoTokenIssuer {
    secret: Option<SecretString>,
    ttl_seconds: u64,
}

impl DemoTokenIssuer {
    #[must_use]
    pub fn new(secret: Option<SecretString>) -> Self {
        Self {
            secret,
            ttl_seconds: DEMO_TOKEN_TTL_SECONDS,
        }
    }

    #[must_use]
    pub fn with_ttl_seconds(mut self, seconds: u64) -> Self {
        self.ttl_seconds = seconds;
        self
    }

    /// Produce a signed demo token.
    ///
    /// # Errors
    /// Returns an error when the signing secret is absent or empty (server
    /// misconfiguration) or when encoding fails.
    pub fn issue(&self) -> Result<String> {
        let secret = self.signing_secret()?;

        let now = unix_now()?;
        let claims = DemoClaims {
            sub: DEMO_SUBJECT.to_string(),
            demo: true,
            iat: now,
            exp: now + self.ttl_seconds,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.expose_secret().as_bytes()),
        )
        .context("failed to sign demo token")
    }

    /// Claim-only inspection: true iff `token` parses as a JWT whose claims
    /// carry `demo: true`. The signature is NOT checked here; see the module
    /// docs for the trust model. Any parse failure means "not a demo token",
    /// never an error — arbitrary bearer strings are expected input on the
    /// session-token path.
    #[must_use]
    pub fn is_demo_token(&self, token: &str) -> bool {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        decode::<DemoClaims>(token, &DecodingKey::from_secret(&[]), &validation)
            .map(|data| data.claims.demo)
            .unwrap_or(false)
    }

    /// Signature-verified decode, for callers that need more than the
    /// advisory claim check. Validates HS256 signature and expiry.
    ///
    /// # Errors
    /// Returns an error when the secret is not configured, the signature is
    /// invalid, or the token is expired/malformed.
    pub fn verify(&self, token: &str) -> Result<DemoClaims> {
        let secret = self.signing_secret()?;
        let mut validation = Validation::new(Algorithm::HS256);
        // Issuer and verifier share one process clock; no skew to absorb.
        validation.leeway = 0;

        let data = decode::<DemoClaims>(
            token,
            &DecodingKey::from_secret(secret.expose_secret().as_bytes()),
            &validation,
        )
        .context("demo token failed verification")?;

        Ok(data.claims)
    }

    fn signing_secret(&self) -> Result<&SecretString> {
        self.secret
            .as_ref()
            .filter(|secret| !secret.expose_secret().trim().is_empty())
            .ok_or_else(|| anyhow!("demo token signing secret is not configured"))
    }
}

fn unix_now() -> Result<u64> {
    Ok(SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock is before the unix epoch")?
        .as_secs())
}
