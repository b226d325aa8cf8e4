//! Origin-gated signed request credentials.
//!
//! A browser client on an allow-listed origin asks the issuer for a
//! credential and receives `{apiKey, signature, nonce}`: a millisecond
//! nonce plus an HMAC-SHA256 tag over `nonce ‖ apiKey`, computed with a
//! secret that never leaves the server. The triple authorizes a follow-up
//! call to a third-party service without embedding the secret in client
//! code.
//!
//! # Two decisions
//!
//! - [`OriginPolicy`] — which browser origins may receive credentials
//! - [`CredentialIssuer`] — minting and verifying [`Credential`]s
//!
//! # Quick example
//!
//! ```
//! use signet::{CredentialIssuer, OriginPolicy};
//!
//! let policy = OriginPolicy::from_spec("example.com, example.org", false);
//! assert!(policy.is_allowed("https://app.example.com"));
//! assert!(!policy.is_allowed("https://example.com.evil.com"));
//!
//! let issuer = CredentialIssuer::new("public-key-id", b"server-secret".to_vec());
//! let credential = issuer.issue().unwrap();
//! assert!(issuer.verify(&credential));
//! ```

pub mod credential;
pub mod error;
pub mod mac;
pub mod origin;

pub use credential::{Credential, CredentialIssuer};
pub use error::SignetError;
pub use origin::OriginPolicy;
