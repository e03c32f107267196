//! Network constants for the BTC Markets SDK.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.btcmarkets.net";

/// User-Agent sent with every request.
pub const USER_AGENT: &str = "btcmarkets-rs client";
