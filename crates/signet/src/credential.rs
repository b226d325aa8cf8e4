//! Credential minting: millisecond nonce plus keyed-hash signature.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::error::SignetError;
use crate::mac;

/// A signed request credential, returned to the browser as JSON.
///
/// `apiKey` is a public identifier; the signing secret never leaves the
/// server. The nonce is the issuing clock's milliseconds since the Unix
/// epoch as a decimal string; nothing enforces uniqueness or expiry, so
/// consumers derive freshness from it if they need to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    pub api_key: String,
    pub signature: String,
    pub nonce: String,
}

/// Mints [`Credential`]s for a single `(api key, secret)` pair.
pub struct CredentialIssuer {
    api_key: String,
    secret: Vec<u8>,
}

impl std::fmt::Debug for CredentialIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialIssuer")
            .field("api_key", &self.api_key)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

impl CredentialIssuer {
    pub fn new(api_key: impl Into<String>, secret: impl Into<Vec<u8>>) -> Self {
        Self {
            api_key: api_key.into(),
            secret: secret.into(),
        }
    }

    /// The public identifier included in every credential.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Mint a credential with the current time as nonce.
    ///
    /// Nonces are non-decreasing on one process clock; nothing enforces
    /// global uniqueness across instances or under clock skew.
    pub fn issue(&self) -> Result<Credential, SignetError> {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| SignetError::Clock)?
            .as_millis();
        Ok(self.issue_with_nonce(millis.to_string()))
    }

    /// Mint a credential for a caller-supplied nonce.
    pub fn issue_with_nonce(&self, nonce: impl Into<String>) -> Credential {
        let nonce = nonce.into();
        let signature = mac::sign_credential(&self.secret, &nonce, &self.api_key);
        Credential {
            api_key: self.api_key.clone(),
            signature,
            nonce,
        }
    }

    /// Check a previously issued credential: the API key must match this
    /// issuer's and the signature must verify over `(nonce, apiKey)`.
    /// The signature comparison is constant-time.
    pub fn verify(&self, credential: &Credential) -> bool {
        credential.api_key == self.api_key
            && mac::verify_credential(
                &self.secret,
                &credential.nonce,
                &credential.api_key,
                &credential.signature,
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issuer() -> CredentialIssuer {
        CredentialIssuer::new("demo-key", b"test-secret".to_vec())
    }

    #[test]
    fn wire_shape_uses_camel_case_keys() {
        let credential = issuer().issue_with_nonce("1700000000000");
        let json = serde_json::to_value(&credential).unwrap();

        assert_eq!(json["apiKey"], "demo-key");
        assert_eq!(json["nonce"], "1700000000000");
        assert_eq!(
            json["signature"].as_str().unwrap(),
            credential.signature.as_str()
        );
        assert_eq!(json.as_object().unwrap().len(), 3);
    }

    #[test]
    fn golden_credential_for_fixed_nonce() {
        let issuer = CredentialIssuer::new("abc", b"s3cret".to_vec());
        let credential = issuer.issue_with_nonce("1700000000000");
        assert_eq!(
            credential.signature,
            "10e16d4ffcb69af5e27951da8b4d248aa219f52e99a5e07ffaca002789be03a7"
        );
    }

    #[test]
    fn issued_nonces_are_non_decreasing() {
        let issuer = issuer();
        let first = issuer.issue().unwrap();
        let second = issuer.issue().unwrap();

        let a: u128 = first.nonce.parse().expect("nonce is a decimal string");
        let b: u128 = second.nonce.parse().expect("nonce is a decimal string");
        assert!(b >= a);
    }

    #[test]
    fn different_nonces_produce_different_signatures() {
        let issuer = issuer();
        let a = issuer.issue_with_nonce("1700000000000");
        let b = issuer.issue_with_nonce("1700000000001");
        assert_ne!(a.signature, b.signature);
    }

    #[test]
    fn verify_accepts_own_credentials() {
        let issuer = issuer();
        let credential = issuer.issue().unwrap();
        assert!(issuer.verify(&credential));
    }

    #[test]
    fn verify_rejects_tampering() {
        let issuer = issuer();
        let credential = issuer.issue_with_nonce("1700000000000");

        let mut wrong_nonce = credential.clone();
        wrong_nonce.nonce = "1700000000001".to_string();
        assert!(!issuer.verify(&wrong_nonce));

        let mut wrong_key = credential.clone();
        wrong_key.api_key = "other-key".to_string();
        assert!(!issuer.verify(&wrong_key));

        let mut wrong_sig = credential;
        wrong_sig.signature = "00".repeat(32);
        assert!(!issuer.verify(&wrong_sig));
    }

    #[test]
    fn verify_rejects_foreign_issuer() {
        let ours = issuer();
        let theirs = CredentialIssuer::new("demo-key", b"other-secret".to_vec());
        let credential = theirs.issue_with_nonce("1700000000000");
        assert!(!ours.verify(&credential));
    }

    #[test]
    fn debug_redacts_secret() {
        let rendered = format!("{:?}", issuer());
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("test-secret"));
    }
}
