//! Shared enums and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize to the exact
//! strings the exchange expects on the wire, so they can be embedded in
//! signed request bodies without conversion.

pub mod scaling;
pub mod serde_util;

pub use scaling::{from_raw, to_raw, ScalingError, CONVERSION};

use serde::{Deserialize, Serialize};

// ─── Side ────────────────────────────────────────────────────────────────────

/// Order side: Bid (buy) or Ask (sell). Wire strings are `"Bid"`/`"Ask"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Bid,
    Ask,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Side::Bid => write!(f, "Buy"),
            Side::Ask => write!(f, "Sell"),
        }
    }
}

// ─── OrderType ───────────────────────────────────────────────────────────────

/// Order type. Wire strings are `"Limit"`/`"Market"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    Limit,
    Market,
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OrderType::Limit => write!(f, "Limit"),
            OrderType::Market => write!(f, "Market"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_serde() {
        assert_eq!(serde_json::to_string(&Side::Bid).unwrap(), "\"Bid\"");
        assert_eq!(serde_json::to_string(&Side::Ask).unwrap(), "\"Ask\"");
        let side: Side = serde_json::from_str("\"Bid\"").unwrap();
        assert_eq!(side, Side::Bid);
    }

    #[test]
    fn test_order_type_serde() {
        assert_eq!(serde_json::to_string(&OrderType::Limit).unwrap(), "\"Limit\"");
        assert_eq!(serde_json::to_string(&OrderType::Market).unwrap(), "\"Market\"");
    }
}
