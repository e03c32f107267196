//! Market data sub-client — tick, orderbook, recent trades.

use crate::client::BtcMarketsClient;
use crate::domain::market::wire::{MarketTrade, OrderbookResponse, TickResponse};
use crate::domain::market::KNOWN_INSTRUMENTS;
use crate::error::SdkError;
use crate::http;

/// Sub-client for market data operations.
pub struct Markets<'a> {
    pub(crate) client: &'a BtcMarketsClient,
}

impl<'a> Markets<'a> {
    /// Latest tick for a trading pair.
    pub async fn tick(&self, instrument: &str, currency: &str) -> Result<TickResponse, SdkError> {
        let path = format!(
            "/market/{}/{}/tick",
            instrument.to_uppercase(),
            currency.to_uppercase()
        );
        let value = self.client.http.get(&path).await?;
        http::decode(value, "market tick")
    }

    /// Ticks for every instrument in [`KNOWN_INSTRUMENTS`] against one
    /// currency. One request per instrument; the first failure aborts.
    pub async fn all_ticks(&self, currency: &str) -> Result<Vec<TickResponse>, SdkError> {
        let mut ticks = Vec::with_capacity(KNOWN_INSTRUMENTS.len());
        for instrument in KNOWN_INSTRUMENTS {
            ticks.push(self.tick(instrument, currency).await?);
        }
        Ok(ticks)
    }

    /// Current orderbook for a trading pair.
    pub async fn orderbook(
        &self,
        instrument: &str,
        currency: &str,
    ) -> Result<OrderbookResponse, SdkError> {
        let path = format!(
            "/market/{}/{}/orderbook",
            instrument.to_uppercase(),
            currency.to_uppercase()
        );
        let value = self.client.http.get(&path).await?;
        http::decode(value, "market orderbook")
    }

    /// Most recent trades for a trading pair.
    pub async fn trades(
        &self,
        instrument: &str,
        currency: &str,
    ) -> Result<Vec<MarketTrade>, SdkError> {
        let path = format!(
            "/market/{}/{}/trades",
            instrument.to_uppercase(),
            currency.to_uppercase()
        );
        let value = self.client.http.get(&path).await?;
        http::decode(value, "market trades")
    }
}
