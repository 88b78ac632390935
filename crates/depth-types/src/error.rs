//! Error types for book mutations

use crate::enums::Side;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while applying updates or loading snapshots
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A positive-quantity update named a non-positive price
    #[error("invalid price {price}: must be positive for a non-empty level")]
    InvalidPrice { price: Decimal },

    /// A snapshot level was listed under the wrong side
    #[error("level {key} listed on the {expected} side but tagged {found}")]
    SideMismatch {
        key: String,
        expected: Side,
        found: Side,
    },
}

impl BookError {
    /// Returns true if the error came from a malformed feed update.
    ///
    /// Such updates are meant to be logged and discarded; the book is untouched.
    pub fn is_malformed_update(&self) -> bool {
        matches!(self, Self::InvalidPrice { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_invalid_price_display() {
        let err = BookError::InvalidPrice { price: dec!(-1.5) };
        assert!(err.to_string().contains("-1.5"));
        assert!(err.is_malformed_update());
    }

    #[test]
    fn test_side_mismatch_display() {
        let err = BookError::SideMismatch {
            key: "100".to_string(),
            expected: Side::Buy,
            found: Side::Sell,
        };
        let msg = err.to_string();
        assert!(msg.contains("100"));
        assert!(msg.contains("buy"));
        assert!(msg.contains("sell"));
        assert!(!err.is_malformed_update());
    }
}
