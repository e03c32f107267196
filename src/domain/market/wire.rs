//! Wire types for market data responses.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Response for `/market/{instrument}/{currency}/tick`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TickResponse {
    #[serde(rename = "bestBid")]
    pub best_bid: Decimal,
    #[serde(rename = "bestAsk")]
    pub best_ask: Decimal,
    #[serde(rename = "lastPrice")]
    pub last_price: Decimal,
    pub currency: String,
    pub instrument: String,
    /// Epoch seconds.
    pub timestamp: i64,
    #[serde(rename = "volume24h")]
    pub volume_24h: Decimal,
}

/// Response for `/market/{instrument}/{currency}/orderbook`.
///
/// Each level is a `[price, volume]` pair, best-priced first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderbookResponse {
    pub currency: String,
    pub instrument: String,
    /// Epoch seconds.
    pub timestamp: i64,
    pub bids: Vec<(Decimal, Decimal)>,
    pub asks: Vec<(Decimal, Decimal)>,
}

/// A single entry from `/market/{instrument}/{currency}/trades`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketTrade {
    pub tid: i64,
    pub amount: Decimal,
    pub price: Decimal,
    /// Epoch seconds.
    pub date: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::prelude::*;

    #[test]
    fn test_tick_deserialize() {
        let json = r#"{"bestBid":844.0,"bestAsk":844.98,"lastPrice":845.0,
            "currency":"AUD","instrument":"BTC","timestamp":1476242958,
            "volume24h":172.60804}"#;
        let tick: TickResponse = serde_json::from_str(json).unwrap();
        assert_eq!(tick.best_bid, Decimal::from_str("844.0").unwrap());
        assert_eq!(tick.last_price, Decimal::from_str("845.0").unwrap());
        assert_eq!(tick.instrument, "BTC");
        assert_eq!(tick.timestamp, 1476242958);
    }

    #[test]
    fn test_orderbook_deserialize() {
        let json = r#"{"currency":"AUD","instrument":"BTC","timestamp":1476242958,
            "bids":[[844.0,0.00489636],[840.21,0.4]],
            "asks":[[844.98,0.45077821]]}"#;
        let book: OrderbookResponse = serde_json::from_str(json).unwrap();
        assert_eq!(book.bids.len(), 2);
        assert_eq!(book.asks.len(), 1);
        assert_eq!(book.bids[0].0, Decimal::from_str("844.0").unwrap());
        assert_eq!(book.asks[0].1, Decimal::from_str("0.45077821").unwrap());
    }

    #[test]
    fn test_market_trade_deserialize() {
        let json = r#"[{"tid":4432702312,"amount":0.01,"price":845.0,"date":1476247287}]"#;
        let trades: Vec<MarketTrade> = serde_json::from_str(json).unwrap();
        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].tid, 4432702312);
        assert_eq!(trades[0].amount, Decimal::from_str("0.01").unwrap());
    }
}
