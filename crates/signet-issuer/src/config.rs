use std::env;

const DEFAULT_PORT: u16 = 4030;

/// Issuer configuration, read from the environment once at startup.
#[derive(Clone)]
pub struct IssuerConfig {
    /// Domain allow-list (from comma-separated `ALLOWED_DOMAINS`)
    pub allowed_domains: Vec<String>,
    /// Permit unencrypted `http://localhost` origins (local development)
    pub allow_localhost: bool,
    /// Public API key identifier, returned verbatim in credentials
    pub api_key: String,
    /// HMAC signing key; never exposed in responses or logs
    pub secret_key: Vec<u8>,
    /// Server port
    pub port: u16,
}

impl std::fmt::Debug for IssuerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IssuerConfig")
            .field("allowed_domains", &self.allowed_domains)
            .field("allow_localhost", &self.allow_localhost)
            .field("api_key", &self.api_key)
            .field("secret_key", &"[REDACTED]")
            .field("port", &self.port)
            .finish()
    }
}

impl IssuerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Required: domain allow-list
        let allowed_domains: Vec<String> = env::var("ALLOWED_DOMAINS")
            .map_err(|_| ConfigError::MissingRequired("ALLOWED_DOMAINS"))?
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        // Only the exact string "true" enables localhost origins
        let allow_localhost = env::var("ALLOW_LOCALHOST")
            .map(|v| v == "true")
            .unwrap_or(false);

        // With localhost disabled a list of only-localhost (or nothing)
        // could never admit any origin, so refuse to start.
        if !allow_localhost
            && allowed_domains
                .iter()
                .all(|d| d.eq_ignore_ascii_case("localhost"))
        {
            return Err(ConfigError::EmptyAllowList);
        }

        // Required: public API key identifier
        let api_key = env::var("API_KEY").map_err(|_| ConfigError::MissingRequired("API_KEY"))?;

        // Required: HMAC signing key
        let secret_key = env::var("SECRET_KEY")
            .map_err(|_| ConfigError::MissingRequired("SECRET_KEY"))?
            .into_bytes();
        if secret_key.is_empty() {
            return Err(ConfigError::EmptySecret);
        }
        if secret_key.len() < 32 {
            tracing::warn!(
                "SECRET_KEY is only {} bytes (minimum 32 recommended) — \
                 use `openssl rand -hex 32` to generate a secure secret",
                secret_key.len()
            );
        }

        // Optional: port
        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Ok(Self {
            allowed_domains,
            allow_localhost,
            api_key,
            secret_key,
            port,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingRequired(&'static str),

    #[error("ALLOWED_DOMAINS has no usable entry and ALLOW_LOCALHOST is off")]
    EmptyAllowList,

    #[error("SECRET_KEY must not be empty")]
    EmptySecret,
}
