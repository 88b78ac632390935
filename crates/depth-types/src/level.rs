//! Price level types with decimal precision

use crate::enums::Side;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Derive the identifying key of a level from its price.
///
/// The key is the canonical decimal string: trailing fractional zeros are
/// stripped, so `100`, `100.0` and `100.00` all map to `"100"`. This keeps
/// the key consistent with numeric price comparison.
pub fn level_key(price: Decimal) -> String {
    price.normalize().to_string()
}

/// A single aggregated price level on one side of the book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawPriceLevel")]
pub struct PriceLevel {
    /// Identifying key, derived from the price
    #[serde(rename = "id")]
    pub key: String,
    /// Side this level rests on
    pub side: Side,
    /// Total quantity available at this price
    #[serde(rename = "amount")]
    pub quantity: Decimal,
    /// Price of this level
    pub price: Decimal,
}

impl PriceLevel {
    /// Create a new price level, deriving its key from the price
    pub fn new(side: Side, quantity: Decimal, price: Decimal) -> Self {
        Self {
            key: level_key(price),
            side,
            quantity,
            price,
        }
    }

    /// Check if this level has a non-positive quantity (should be removed)
    pub fn is_empty(&self) -> bool {
        self.quantity <= Decimal::ZERO
    }

}

/// Wire form of a level. The `id` field is accepted for compatibility but
/// the canonical key is always recomputed from the price.
#[derive(Deserialize)]
struct RawPriceLevel {
    #[serde(default, rename = "id")]
    _id: Option<String>,
    side: Side,
    #[serde(deserialize_with = "deserialize_decimal")]
    amount: Decimal,
    #[serde(deserialize_with = "deserialize_decimal")]
    price: Decimal,
}

impl From<RawPriceLevel> for PriceLevel {
    fn from(raw: RawPriceLevel) -> Self {
        PriceLevel::new(raw.side, raw.amount, raw.price)
    }
}

/// Deserialize a decimal from either a JSON string or a JSON number.
///
/// Feeds and hand-written snapshots use both forms; numbers are parsed from
/// their textual representation so precision is not lost through f64.
pub fn deserialize_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    use rust_decimal::prelude::FromPrimitive;
    use serde::de::Error;
    use std::str::FromStr;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(serde_json::Number),
    }

    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => Decimal::from_str(s.trim()).map_err(D::Error::custom),
        StringOrNumber::Number(n) => {
            let s = n.to_string();
            // Scientific notation (e.g. 5e-6) has no exact textual parse
            if s.contains('e') || s.contains('E') {
                let f = n.as_f64().ok_or_else(|| D::Error::custom("invalid number"))?;
                Decimal::from_f64(f).ok_or_else(|| D::Error::custom("cannot convert to decimal"))
            } else {
                Decimal::from_str(&s).map_err(D::Error::custom)
            }
        }
    }
}
