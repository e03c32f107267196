//! Wire types for account responses.

use serde::{Deserialize, Serialize};

/// One entry of the `/account/balance` response. `balance` and
/// `pendingFunds` are ×10^8 scaled integers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BalanceEntry {
    pub currency: String,
    pub balance: i64,
    #[serde(rename = "pendingFunds")]
    pub pending_funds: i64,
}

/// Envelope for `/account/{instrument}/{currency}/tradingfee`.
/// `tradingFeeRate` and `volume30Day` are ×10^8 scaled integers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TradingFeeResponse {
    pub success: bool,
    #[serde(rename = "errorCode")]
    pub error_code: Option<i64>,
    #[serde(rename = "errorMessage")]
    pub error_message: Option<String>,
    #[serde(rename = "tradingFeeRate")]
    pub trading_fee_rate: i64,
    #[serde(rename = "volume30Day")]
    pub volume_30_day: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_entry_deserialize() {
        let json = r#"[{"balance":100000000,"pendingFunds":0,"currency":"AUD"}]"#;
        let entries: Vec<BalanceEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries[0].currency, "AUD");
        assert_eq!(entries[0].balance, 100_000_000);
        assert_eq!(entries[0].pending_funds, 0);
    }

    #[test]
    fn test_trading_fee_deserialize() {
        let json = r#"{"success":true,"errorCode":null,"errorMessage":null,
            "tradingFeeRate":84999999,"volume30Day":100000000}"#;
        let resp: TradingFeeResponse = serde_json::from_str(json).unwrap();
        assert!(resp.success);
        assert_eq!(resp.trading_fee_rate, 84_999_999);
    }
}
