//! Conversions from wire types to domain types for order data.

use super::wire::HistoricalTradeEntry;
use super::HistoricalTrade;
use crate::shared::scaling;

impl From<HistoricalTradeEntry> for HistoricalTrade {
    fn from(t: HistoricalTradeEntry) -> Self {
        Self {
            id: t.id,
            creation_time: t.creation_time,
            description: t.description,
            price: scaling::from_raw(t.price),
            volume: scaling::from_raw(t.volume),
            side: t.side,
            fee: scaling::from_raw(t.fee),
            order_id: t.order_id,
        }
    }
}
