//! High-level client — `BtcMarketsClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::auth::Credentials;
use crate::domain::account::client::Account;
use crate::domain::market::client::Markets;
use crate::domain::order::client::Orders;
use crate::error::{AuthError, SdkError};
use crate::http::BtcMarketsHttp;

// Re-export sub-client types for convenience.
pub use crate::domain::account::client::Account as AccountClient;
pub use crate::domain::market::client::Markets as MarketsClient;
pub use crate::domain::order::client::Orders as OrdersClient;

/// The primary entry point for the BTC Markets SDK.
///
/// Provides nested sub-client accessors per domain: `client.market()`,
/// `client.account()`, `client.orders()`. Holds no mutable state — only
/// the immutable credentials and the transport handle — so independent
/// calls from multiple tasks are safe.
pub struct BtcMarketsClient {
    pub(crate) http: BtcMarketsHttp,
}

impl BtcMarketsClient {
    pub fn builder() -> BtcMarketsClientBuilder {
        BtcMarketsClientBuilder::default()
    }

    /// Shorthand for a client against the default API host.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            http: BtcMarketsHttp::new(crate::network::DEFAULT_API_URL, credentials),
        }
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn market(&self) -> Markets<'_> {
        Markets { client: self }
    }

    pub fn account(&self) -> Account<'_> {
        Account { client: self }
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }
}

impl Clone for BtcMarketsClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct BtcMarketsClientBuilder {
    base_url: String,
    credentials: Option<Credentials>,
}

impl Default for BtcMarketsClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            credentials: None,
        }
    }
}

impl BtcMarketsClientBuilder {
    /// Override the API host (e.g. for a test server).
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn build(self) -> Result<BtcMarketsClient, SdkError> {
        let credentials = self.credentials.ok_or_else(|| {
            SdkError::Auth(AuthError::MissingCredentials(
                "builder requires credentials".to_string(),
            ))
        })?;
        Ok(BtcMarketsClient {
            http: BtcMarketsHttp::new(&self.base_url, credentials),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_credentials() -> Credentials {
        Credentials::new("test-key", "dG9wIHNlY3JldCBrZXk=").unwrap()
    }

    #[test]
    fn test_builder_requires_credentials() {
        let result = BtcMarketsClient::builder().build();
        assert!(matches!(
            result,
            Err(SdkError::Auth(AuthError::MissingCredentials(_)))
        ));
    }

    #[test]
    fn test_builder_with_base_url() {
        let client = BtcMarketsClient::builder()
            .base_url("http://localhost:9999")
            .credentials(test_credentials())
            .build()
            .unwrap();
        assert_eq!(client.http.base_url(), "http://localhost:9999");
    }

    #[test]
    fn test_new_uses_default_host() {
        let client = BtcMarketsClient::new(test_credentials());
        assert_eq!(client.http.base_url(), crate::network::DEFAULT_API_URL);
    }
}
