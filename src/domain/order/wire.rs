//! Wire types for order requests and responses.
//!
//! Request structs participate in the signature: the serialized body is the
//! signed message's third line. Field declaration order below is the
//! canonical wire order — do not reorder.

use crate::shared::{serde_util, OrderType, Side};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body for `/order/history`, `/order/open` and `/order/trade/history`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HistoryRequest {
    pub currency: String,
    pub instrument: String,
    pub limit: u32,
    pub since: i64,
}

/// Body for `/order/detail` and `/order/cancel`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OrderIdsRequest {
    #[serde(rename = "orderIds")]
    pub order_ids: Vec<i64>,
}

/// Body for `/order/create`. `price` and `volume` are ×10^8 wire integers.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CreateOrderRequest {
    pub currency: String,
    pub instrument: String,
    pub price: i64,
    pub volume: i64,
    #[serde(rename = "orderSide")]
    pub order_side: Side,
    pub ordertype: OrderType,
    #[serde(rename = "clientRequestId")]
    pub client_request_id: String,
}

/// Envelope for `/order/trade/history`.
#[derive(Debug, Clone, Deserialize)]
pub struct TradeHistoryResponse {
    pub success: bool,
    #[serde(rename = "errorCode")]
    pub error_code: Option<i64>,
    #[serde(rename = "errorMessage")]
    pub error_message: Option<String>,
    /// Null and absent both mean "no trades".
    #[serde(default)]
    pub trades: Option<Vec<HistoricalTradeEntry>>,
}

/// One executed trade inside [`TradeHistoryResponse`]. `price`, `volume`
/// and `fee` are ×10^8 scaled integers.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoricalTradeEntry {
    pub id: i64,
    #[serde(rename = "creationTime", with = "serde_util::timestamp_ms")]
    pub creation_time: DateTime<Utc>,
    pub description: Option<String>,
    pub price: i64,
    pub volume: i64,
    pub side: Side,
    pub fee: i64,
    #[serde(rename = "orderId")]
    pub order_id: i64,
}
