//! Account sub-client — balances and trading fees.

use crate::client::BtcMarketsClient;
use crate::domain::account::wire::{BalanceEntry, TradingFeeResponse};
use crate::domain::account::{AccountBalance, TradingFee};
use crate::error::SdkError;
use crate::http;
use crate::shared::scaling;

/// Sub-client for account operations.
pub struct Account<'a> {
    pub(crate) client: &'a BtcMarketsClient,
}

impl<'a> Account<'a> {
    /// Balances for every currency held, converted to decimal units.
    pub async fn balance(&self) -> Result<Vec<AccountBalance>, SdkError> {
        let value = self.client.http.get("/account/balance").await?;
        let entries: Vec<BalanceEntry> = http::decode(value, "account balance")?;
        Ok(entries.into_iter().map(AccountBalance::from).collect())
    }

    /// Trading fee rate for a trading pair, converted to decimal units.
    pub async fn trading_fee(
        &self,
        instrument: &str,
        currency: &str,
    ) -> Result<TradingFee, SdkError> {
        let instrument = instrument.to_uppercase();
        let currency = currency.to_uppercase();
        let path = format!("/account/{}/{}/tradingfee", instrument, currency);

        let value = self.client.http.get(&path).await?;
        let resp: TradingFeeResponse = http::decode(value, "trading fee")?;

        Ok(TradingFee {
            instrument,
            currency,
            trading_fee_rate: scaling::from_raw(resp.trading_fee_rate),
        })
    }
}
