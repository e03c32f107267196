//! HTTP client layer — `BtcMarketsHttp` with signed request dispatch.

pub mod client;

pub use client::BtcMarketsHttp;

use crate::error::SdkError;
use serde::de::DeserializeOwned;

/// Decode a parsed JSON value into an operation's expected shape.
///
/// Every operation funnels through this instead of indexing into the value,
/// so a differently-shaped (or error-envelope) response surfaces as a
/// typed [`SdkError::UnexpectedShape`] rather than a downstream panic.
pub(crate) fn decode<T: DeserializeOwned>(
    value: serde_json::Value,
    context: &str,
) -> Result<T, SdkError> {
    serde_json::from_value(value).map_err(|e| SdkError::UnexpectedShape(format!("{}: {}", context, e)))
}
