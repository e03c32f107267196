//! Order domain — placement, cancellation, history, open orders.
//!
//! POST bodies here are embedded verbatim in the signed message, so the
//! request structs in [`wire`] fix their field order (serde serializes
//! fields in declaration order) and each body is serialized exactly once.

pub mod client;
mod convert;
pub mod wire;

use crate::shared::{Side, OrderType};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// `clientRequestId` sent with every order creation.
///
/// The upstream API requires the field but does not yet interpret it; a
/// constant identifying this client matches upstream guidance.
pub const CLIENT_REQUEST_ID: &str = "btcmarkets-rs";

/// A new order to be placed. Price and volume are decimals; conversion to
/// the ×10^8 wire integers happens at submission.
///
/// Request-only: the SDK does not track order state after submission. Use
/// [`client::Orders::detail`] or [`client::Orders::history`] to follow up.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub instrument: String,
    pub currency: String,
    pub price: Decimal,
    pub volume: Decimal,
    pub side: Side,
    pub order_type: OrderType,
}

/// An executed trade from the account's trade history, in decimal units.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoricalTrade {
    pub id: i64,
    pub creation_time: DateTime<Utc>,
    pub description: Option<String>,
    pub price: Decimal,
    pub volume: Decimal,
    pub side: Side,
    pub fee: Decimal,
    pub order_id: i64,
}
