//! Authentication — API credentials and request signing.
//!
//! BTC Markets authenticates private requests with a shared-secret HMAC
//! scheme: the secret is distributed base64-encoded, decoded once here, and
//! the raw bytes key an HMAC-SHA512 over a canonical per-request message
//! (see [`signer`]). The signature, the API key, and the signed timestamp
//! travel as request headers.

pub mod signer;

use crate::error::AuthError;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

/// Immutable API credentials held for the lifetime of a client.
///
/// The secret is decoded from base64 exactly once, at construction. No
/// accessor exposes it outside the crate.
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
    secret: Vec<u8>,
}

impl Credentials {
    /// Create credentials from an API key and a base64-encoded secret.
    pub fn new(api_key: impl Into<String>, secret_b64: &str) -> Result<Self, AuthError> {
        let secret = BASE64.decode(secret_b64)?;
        Ok(Self {
            api_key: api_key.into(),
            secret,
        })
    }

    /// Load credentials from `BTCMARKETS_API_KEY` and `BTCMARKETS_SECRET`.
    pub fn from_env() -> Result<Self, AuthError> {
        let api_key = std::env::var("BTCMARKETS_API_KEY")
            .map_err(|_| AuthError::MissingCredentials("BTCMARKETS_API_KEY".to_string()))?;
        let secret_b64 = std::env::var("BTCMARKETS_SECRET")
            .map_err(|_| AuthError::MissingCredentials("BTCMARKETS_SECRET".to_string()))?;
        Self::new(api_key, &secret_b64)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn secret(&self) -> &[u8] {
        &self.secret
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_decoded_on_construction() {
        let creds = Credentials::new("key", &BASE64.encode(b"raw secret")).unwrap();
        assert_eq!(creds.api_key(), "key");
        assert_eq!(creds.secret(), b"raw secret");
    }

    #[test]
    fn test_invalid_base64_rejected() {
        let result = Credentials::new("key", "not base64!!!");
        assert!(matches!(result, Err(AuthError::InvalidSecret(_))));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let creds = Credentials::new("key", &BASE64.encode(b"raw secret")).unwrap();
        let rendered = format!("{:?}", creds);
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("raw secret"));
    }
}
