//! Account domain — balances and trading fees.
//!
//! These endpoints return monetary fields as ×10^8 scaled integers; the
//! sub-client converts them to decimals before they reach the caller.

pub mod client;
mod convert;
pub mod wire;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A per-currency account balance, in decimal units.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountBalance {
    pub currency: String,
    pub balance: Decimal,
    pub pending_funds: Decimal,
}

/// Trading fee for one trading pair, in decimal units.
///
/// Reshaped from the raw envelope: the instrument and currency the fee was
/// queried for are carried alongside the converted rate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TradingFee {
    pub instrument: String,
    pub currency: String,
    pub trading_fee_rate: Decimal,
}
