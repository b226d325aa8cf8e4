use signet::{CredentialIssuer, OriginPolicy};

use crate::config::IssuerConfig;

/// Shared application state, built once at startup and read-only after.
/// Handlers are pure functions of the request plus this state.
pub struct AppState {
    /// Which browser origins may receive credentials
    pub policy: OriginPolicy,
    /// Mints the `(nonce, signature)` pairs
    pub issuer: CredentialIssuer,
}

impl AppState {
    pub fn new(config: &IssuerConfig) -> Self {
        Self {
            policy: OriginPolicy::new(&config.allowed_domains, config.allow_localhost),
            issuer: CredentialIssuer::new(config.api_key.clone(), config.secret_key.clone()),
        }
    }
}
