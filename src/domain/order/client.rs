//! Orders sub-client — create, cancel, query.
//!
//! Every POST body is serialized exactly once; the resulting string is both
//! signed and transmitted. Methods whose responses carry scaled monetary
//! fields convert them; the rest return the parsed JSON as-is.

use crate::client::BtcMarketsClient;
use crate::domain::order::wire::{
    CreateOrderRequest, HistoryRequest, OrderIdsRequest, TradeHistoryResponse,
};
use crate::domain::order::{HistoricalTrade, NewOrder, CLIENT_REQUEST_ID};
use crate::error::SdkError;
use crate::http;
use crate::shared::scaling;

/// Sub-client for order operations.
pub struct Orders<'a> {
    pub(crate) client: &'a BtcMarketsClient,
}

impl<'a> Orders<'a> {
    /// Executed trades for a trading pair, converted to decimal units.
    pub async fn trade_history(
        &self,
        instrument: &str,
        currency: &str,
        limit: u32,
        since: i64,
    ) -> Result<Vec<HistoricalTrade>, SdkError> {
        let body = history_body(instrument, currency, limit, since)?;
        let value = self.client.http.post("/order/trade/history", body).await?;
        let resp: TradeHistoryResponse = http::decode(value, "trade history")?;
        Ok(resp
            .trades
            .unwrap_or_default()
            .into_iter()
            .map(HistoricalTrade::from)
            .collect())
    }

    /// Order history for a trading pair.
    pub async fn history(
        &self,
        instrument: &str,
        currency: &str,
        limit: u32,
        since: i64,
    ) -> Result<serde_json::Value, SdkError> {
        let body = history_body(instrument, currency, limit, since)?;
        Ok(self.client.http.post("/order/history", body).await?)
    }

    /// Currently open orders for a trading pair.
    pub async fn open(
        &self,
        instrument: &str,
        currency: &str,
        limit: u32,
        since: i64,
    ) -> Result<serde_json::Value, SdkError> {
        let body = history_body(instrument, currency, limit, since)?;
        Ok(self.client.http.post("/order/open", body).await?)
    }

    /// Detail for a set of orders by id.
    pub async fn detail(&self, order_ids: &[i64]) -> Result<serde_json::Value, SdkError> {
        let body = order_ids_body(order_ids)?;
        Ok(self.client.http.post("/order/detail", body).await?)
    }

    /// Place an order. Price and volume are converted to ×10^8 wire
    /// integers before the body is built and signed.
    pub async fn create(&self, order: &NewOrder) -> Result<serde_json::Value, SdkError> {
        let body = create_body(order)?;
        Ok(self.client.http.post("/order/create", body).await?)
    }

    /// Cancel a set of orders by id.
    pub async fn cancel(&self, order_ids: &[i64]) -> Result<serde_json::Value, SdkError> {
        let body = order_ids_body(order_ids)?;
        Ok(self.client.http.post("/order/cancel", body).await?)
    }
}

fn history_body(
    instrument: &str,
    currency: &str,
    limit: u32,
    since: i64,
) -> Result<String, SdkError> {
    Ok(serde_json::to_string(&HistoryRequest {
        currency: currency.to_string(),
        instrument: instrument.to_string(),
        limit,
        since,
    })?)
}

fn order_ids_body(order_ids: &[i64]) -> Result<String, SdkError> {
    Ok(serde_json::to_string(&OrderIdsRequest {
        order_ids: order_ids.to_vec(),
    })?)
}

fn create_body(order: &NewOrder) -> Result<String, SdkError> {
    Ok(serde_json::to_string(&CreateOrderRequest {
        currency: order.currency.clone(),
        instrument: order.instrument.clone(),
        price: scaling::to_raw(order.price)?,
        volume: scaling::to_raw(order.volume)?,
        order_side: order.side,
        ordertype: order.order_type,
        client_request_id: CLIENT_REQUEST_ID.to_string(),
    })?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::signer;
    use crate::shared::{OrderType, Side};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_history_body_bytes() {
        let body = history_body("BTC", "AUD", 10, 1).unwrap();
        assert_eq!(
            body,
            r#"{"currency":"AUD","instrument":"BTC","limit":10,"since":1}"#
        );
    }

    #[test]
    fn test_create_body_scaled_integers() {
        // price=130.0, volume=1.0 must hit the wire as 13000000000 and
        // 100000000.
        let order = NewOrder {
            instrument: "BTC".to_string(),
            currency: "AUD".to_string(),
            price: Decimal::from_str("130.0").unwrap(),
            volume: Decimal::from_str("1.0").unwrap(),
            side: Side::Bid,
            order_type: OrderType::Limit,
        };
        let body = create_body(&order).unwrap();
        assert!(body.contains(r#""price":13000000000"#));
        assert!(body.contains(r#""volume":100000000"#));
        assert_eq!(
            body,
            r#"{"currency":"AUD","instrument":"BTC","price":13000000000,"volume":100000000,"orderSide":"Bid","ordertype":"Limit","clientRequestId":"btcmarkets-rs"}"#
        );
    }

    #[test]
    fn test_create_body_sub_scale_price_rejected() {
        let order = NewOrder {
            instrument: "BTC".to_string(),
            currency: "AUD".to_string(),
            price: Decimal::from_str("0.000000001").unwrap(),
            volume: Decimal::ONE,
            side: Side::Bid,
            order_type: OrderType::Limit,
        };
        assert!(matches!(
            create_body(&order),
            Err(SdkError::Scaling(_))
        ));
    }

    #[test]
    fn test_reordered_body_changes_signature() {
        // The signature covers the exact body bytes; the same logical
        // fields in a different key order must not verify.
        #[derive(serde::Serialize)]
        struct ReorderedHistoryRequest {
            instrument: String,
            currency: String,
            limit: u32,
            since: i64,
        }

        let canonical = history_body("BTC", "AUD", 10, 1).unwrap();
        let reordered = serde_json::to_string(&ReorderedHistoryRequest {
            instrument: "BTC".to_string(),
            currency: "AUD".to_string(),
            limit: 10,
            since: 1,
        })
        .unwrap();
        assert_ne!(canonical, reordered);

        let secret = b"top secret key";
        let expected = signer::sign(secret, "/order/history", "1000", Some(&canonical));
        let actual = signer::sign(secret, "/order/history", "1000", Some(&reordered));
        assert_ne!(expected, actual);
    }
}
