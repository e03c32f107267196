//! Conversions from wire types to domain types for account data.

use super::wire::BalanceEntry;
use super::AccountBalance;
use crate::shared::scaling;

impl From<BalanceEntry> for AccountBalance {
    fn from(e: BalanceEntry) -> Self {
        Self {
            currency: e.currency,
            balance: scaling::from_raw(e.balance),
            pending_funds: scaling::from_raw(e.pending_funds),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_balance_entry_conversion() {
        let entry = BalanceEntry {
            currency: "AUD".to_string(),
            balance: 100_000_000,
            pending_funds: 0,
        };
        let balance: AccountBalance = entry.into();
        assert_eq!(balance.currency, "AUD");
        assert_eq!(balance.balance, Decimal::ONE);
        assert_eq!(balance.pending_funds, Decimal::ZERO);
    }

    #[test]
    fn test_balance_entry_sub_unit_conversion() {
        let entry = BalanceEntry {
            currency: "BTC".to_string(),
            balance: 12_345_678,
            pending_funds: 1,
        };
        let balance: AccountBalance = entry.into();
        assert_eq!(balance.balance, Decimal::new(12_345_678, 8));
        assert_eq!(balance.pending_funds, Decimal::new(1, 8));
    }
}
