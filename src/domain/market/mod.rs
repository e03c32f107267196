//! Market data domain — ticks, orderbooks, recent trades.
//!
//! Market endpoints are public-format but still signed like every other
//! request. Values here arrive as plain decimals on the wire; the ×10^8
//! fixed-point representation applies only to the account and trading
//! endpoints.

pub mod client;
pub mod wire;

pub use wire::{MarketTrade, OrderbookResponse, TickResponse};

/// Instruments covered by [`client::Markets::all_ticks`].
///
/// Informational only — instrument arguments elsewhere are interpolated
/// into paths after uppercasing, never validated against this list.
pub const KNOWN_INSTRUMENTS: [&str; 6] = ["BCH", "BTC", "LTC", "ETH", "XRP", "ETC"];
