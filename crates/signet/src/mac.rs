//! Keyed-hash tag over `(nonce, apiKey)`.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Compute the credential tag: HMAC-SHA256 over the UTF-8 concatenation of
/// the nonce string and the public API key, encoded as lowercase hex.
pub fn sign_credential(secret: &[u8], nonce: &str, api_key: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC accepts any key length");
    mac.update(nonce.as_bytes());
    mac.update(api_key.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Verify a credential tag against `(nonce, apiKey)`.
///
/// Uses constant-time comparison to prevent timing attacks. Malformed hex
/// signatures are compared against zeros instead of returning early.
pub fn verify_credential(secret: &[u8], nonce: &str, api_key: &str, signature: &str) -> bool {
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC accepts any key length");
    mac.update(nonce.as_bytes());
    mac.update(api_key.as_bytes());

    let expected = hex::decode(signature).unwrap_or_else(|_| vec![0u8; 32]);

    // hmac crate's verify_slice uses constant-time comparison
    mac.verify_slice(&expected).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_signature_is_reproducible() {
        // Known-answer check: HMAC-SHA256("s3cret", "1700000000000" + "abc").
        let sig = sign_credential(b"s3cret", "1700000000000", "abc");
        assert_eq!(
            sig,
            "10e16d4ffcb69af5e27951da8b4d248aa219f52e99a5e07ffaca002789be03a7"
        );
    }

    #[test]
    fn signature_is_64_lowercase_hex_chars() {
        let sig = sign_credential(b"another-secret", "1712345678901", "key-id");
        assert_eq!(sig.len(), 64);
        assert!(sig
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn sign_verify_roundtrip() {
        let sig = sign_credential(b"test-secret", "1700000000000", "abc");
        assert!(verify_credential(b"test-secret", "1700000000000", "abc", &sig));
    }

    #[test]
    fn wrong_secret_fails_verification() {
        let sig = sign_credential(b"secret-1", "1700000000000", "abc");
        assert!(!verify_credential(b"secret-2", "1700000000000", "abc", &sig));
    }

    #[test]
    fn tampered_nonce_fails_verification() {
        let sig = sign_credential(b"test-secret", "1700000000000", "abc");
        assert!(!verify_credential(b"test-secret", "1700000000001", "abc", &sig));
    }

    #[test]
    fn tampered_api_key_fails_verification() {
        let sig = sign_credential(b"test-secret", "1700000000000", "abc");
        assert!(!verify_credential(b"test-secret", "1700000000000", "abd", &sig));
    }

    #[test]
    fn signed_payload_is_bare_concatenation() {
        // The wire format is nonce immediately followed by the key, no
        // separator. Pin that so a delimiter never slips in and breaks
        // verification on the consuming side.
        let a = sign_credential(b"s", "17000", "00abc");
        let b = sign_credential(b"s", "1700000", "abc");
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_hex_signature_rejected() {
        assert!(!verify_credential(b"secret", "1700000000000", "abc", "not-hex-zz"));
    }

    #[test]
    fn empty_signature_rejected() {
        assert!(!verify_credential(b"secret", "1700000000000", "abc", ""));
    }
}
