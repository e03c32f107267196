//! Pure conversion module between the exchange's scaled-integer wire
//! representation and caller-facing decimal values.
//!
//! All math uses `rust_decimal::Decimal` for exact base-10 arithmetic.
//! No async, no network calls.

use std::fmt;

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Wire scale: monetary values travel as integers with 8 implied decimal
/// places, e.g. a price of $130 is `13_000_000_000` and a volume of 1 BTC
/// is `100_000_000`.
pub const CONVERSION: i64 = 100_000_000;

const SCALE_DIGITS: u32 = 8;

/// Errors that can occur when scaling a decimal to the wire representation.
#[derive(Debug, Clone)]
pub enum ScalingError {
    NonPositive(String),
    FractionalRaw { value: String },
    Overflow { context: String },
}

impl fmt::Display for ScalingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalingError::NonPositive(v) => write!(f, "Value must be positive, got {}", v),
            ScalingError::FractionalRaw { value } => {
                write!(f, "Value has more than 8 decimal places: {}", value)
            }
            ScalingError::Overflow { context } => write!(f, "Overflow: {}", context),
        }
    }
}

impl std::error::Error for ScalingError {}

/// Convert a raw wire integer into its decimal value.
///
/// Exact: `from_raw(v) * CONVERSION == v` for every `i64`.
pub fn from_raw(raw: i64) -> Decimal {
    Decimal::new(raw, SCALE_DIGITS)
}

/// Convert a decimal price or volume into the raw wire integer.
///
/// Rejects non-positive inputs, values with sub-scale precision (they would
/// lose digits on the wire), and values that overflow `i64`.
pub fn to_raw(value: Decimal) -> Result<i64, ScalingError> {
    if value <= Decimal::ZERO {
        return Err(ScalingError::NonPositive(value.to_string()));
    }

    let scaled = value
        .checked_mul(Decimal::from(CONVERSION))
        .ok_or_else(|| ScalingError::Overflow {
            context: format!("{} * {}", value, CONVERSION),
        })?;

    if scaled.fract() != Decimal::ZERO {
        return Err(ScalingError::FractionalRaw {
            value: value.to_string(),
        });
    }

    scaled.to_i64().ok_or_else(|| ScalingError::Overflow {
        context: format!("{} does not fit in i64", scaled),
    })
}
