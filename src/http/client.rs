//! Low-level HTTP client — `BtcMarketsHttp`.
//!
//! One signed round trip per call: sample a timestamp, sign the canonical
//! message, issue the request with the auth headers, map the status, parse
//! the body. Internal to the SDK — the domain sub-clients wrap this.

use crate::auth::{signer, Credentials};
use crate::error::HttpError;
use crate::network::USER_AGENT;

use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Low-level client for the BTC Markets REST API.
///
/// Holds only immutable state (credentials, base URL, transport handle), so
/// it is safe to share across tasks issuing independent calls.
pub struct BtcMarketsHttp {
    base_url: String,
    client: Client,
    credentials: Credentials,
}

impl BtcMarketsHttp {
    pub fn new(base_url: &str, credentials: Credentials) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            credentials,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Signed GET. The signature covers `path` and the timestamp only.
    pub async fn get(&self, path: &str) -> Result<serde_json::Value, HttpError> {
        self.dispatch(reqwest::Method::GET, path, None).await
    }

    /// Signed POST. `body` must be the final serialized form: the same
    /// bytes are signed and transmitted, with no re-serialization between.
    pub async fn post(&self, path: &str, body: String) -> Result<serde_json::Value, HttpError> {
        self.dispatch(reqwest::Method::POST, path, Some(body)).await
    }

    async fn dispatch(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<String>,
    ) -> Result<serde_json::Value, HttpError> {
        let timestamp = signer::timestamp_ms();
        let signature = signer::sign(
            self.credentials.secret(),
            path,
            &timestamp,
            body.as_deref(),
        );

        debug!(%method, path, "dispatching signed request");

        let mut req = self
            .client
            .request(method, format!("{}{}", self.base_url, path))
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json")
            .header("Accept-Charset", "utf-8")
            .header("Content-Type", "application/json")
            .header("apikey", self.credentials.api_key())
            .header("timestamp", &timestamp)
            .header("signature", &signature);

        if let Some(b) = body {
            req = req.body(b);
        }

        let resp = req.send().await?;
        let status = resp.status();

        if status.is_success() {
            let text = resp.text().await?;
            return parse_body(&text);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            401 => Err(HttpError::Unauthorized),
            404 => Err(HttpError::NotFound(body_text)),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}

/// Parse a response body as JSON.
///
/// An undecodable body becomes a typed [`HttpError::Decode`] — never a
/// panic and never a silently-empty value that call sites would then index
/// into.
fn parse_body(text: &str) -> Result<serde_json::Value, HttpError> {
    serde_json::from_str(text).map_err(|e| HttpError::Decode(e.to_string()))
}

impl Clone for BtcMarketsHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
            credentials: self.credentials.clone(),
        }
    }
}
