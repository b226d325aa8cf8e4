//! Signet issuer: HTTP service minting origin-gated request credentials.
//!
//! One logical endpoint, `GET /v1/signature`, answers browsers calling
//! from allow-listed origins with `{apiKey, signature, nonce}`; every
//! other path 302-redirects to the canonical one. CORS preflight and
//! enforcement live in the handlers so a denied origin gets the mandated
//! `403 CORS check failed` body rather than a silently stripped header.
//!
//! # Modules
//!
//! - [`config`] — environment-derived [`IssuerConfig`](config::IssuerConfig)
//! - [`state`] — read-only shared [`AppState`](state::AppState)
//! - [`routes`] — path gate, preflight, and issuance handlers
//! - [`error`] — HTTP error mapping

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::IssuerConfig;
pub use error::IssuerError;
pub use state::AppState;
