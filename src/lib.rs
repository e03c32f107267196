//! # BTC Markets SDK
//!
//! A Rust client for the BTC Markets REST API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared enums, fixed-point scaling, domain models
//! 2. **Auth** — Credentials + HMAC-SHA512 request signing
//! 3. **HTTP** — `BtcMarketsHttp`, one signed round trip per call
//! 4. **High-Level Client** — `BtcMarketsClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use btcmarkets_sdk::prelude::*;
//!
//! let credentials = Credentials::from_env()?;
//! let client = BtcMarketsClient::new(credentials);
//!
//! let tick = client.market().tick("BTC", "AUD").await?;
//! let balances = client.account().balance().await?;
//! ```
//!
//! Monetary values cross the wire as ×10^8 scaled integers on the account
//! and trading endpoints; the SDK converts them to
//! [`rust_decimal::Decimal`] in both directions, so callers only ever see
//! exact decimal values.

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared enums and fixed-point scaling used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Credentials and HMAC-SHA512 request signing.
pub mod auth;

// ── Layer 3: HTTP ────────────────────────────────────────────────────────────

/// HTTP client with signed dispatch.
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `BtcMarketsClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared enums + scaling
    pub use crate::shared::{from_raw, to_raw, OrderType, ScalingError, Side, CONVERSION};

    // Domain types — market
    pub use crate::domain::market::{
        MarketTrade, OrderbookResponse, TickResponse, KNOWN_INSTRUMENTS,
    };

    // Domain types — account
    pub use crate::domain::account::{AccountBalance, TradingFee};

    // Domain types — order
    pub use crate::domain::order::{HistoricalTrade, NewOrder, CLIENT_REQUEST_ID};

    // Errors
    pub use crate::error::{AuthError, HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Auth
    pub use crate::auth::Credentials;

    // Client + sub-clients
    pub use crate::client::{
        AccountClient, BtcMarketsClient, BtcMarketsClientBuilder, MarketsClient, OrdersClient,
    };
}
