//! Best-first depth view of both sides of the book

use crate::level::PriceLevel;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A (price, quantity) row of a depth view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthLevel {
    /// Price of this row
    pub price: Decimal,
    /// Aggregate quantity at this price
    pub quantity: Decimal,
}

impl DepthLevel {
    /// Create a new depth row
    pub fn new(price: Decimal, quantity: Decimal) -> Self {
        Self { price, quantity }
    }
}

impl From<&PriceLevel> for DepthLevel {
    fn from(level: &PriceLevel) -> Self {
        Self::new(level.price, level.quantity)
    }
}

impl From<(Decimal, Decimal)> for DepthLevel {
    fn from((price, quantity): (Decimal, Decimal)) -> Self {
        Self::new(price, quantity)
    }
}

/// Point-in-time depth of both sides, best price first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Depth {
    /// Bid rows, highest price first
    pub bids: Vec<DepthLevel>,
    /// Ask rows, lowest price first
    pub asks: Vec<DepthLevel>,
}

impl Depth {
    /// Get the best bid
    pub fn best_bid(&self) -> Option<DepthLevel> {
        self.bids.first().copied()
    }

    /// Get the best ask
    pub fn best_ask(&self) -> Option<DepthLevel> {
        self.asks.first().copied()
    }

    /// Get the spread (ask - bid)
    pub fn spread(&self) -> Option<Decimal> {
        match (self.best_ask(), self.best_bid()) {
            (Some(ask), Some(bid)) => Some(ask.price - bid.price),
            _ => None,
        }
    }

    /// Get the mid price ((ask + bid) / 2)
    pub fn mid_price(&self) -> Option<Decimal> {
        match (self.best_ask(), self.best_bid()) {
            (Some(ask), Some(bid)) => Some((ask.price + bid.price) / Decimal::TWO),
            _ => None,
        }
    }

    /// Total bid quantity in this view
    pub fn bid_volume(&self) -> Decimal {
        self.bids.iter().map(|l| l.quantity).sum()
    }

    /// Total ask quantity in this view
    pub fn ask_volume(&self) -> Decimal {
        self.asks.iter().map(|l| l.quantity).sum()
    }

    /// True when neither side has any level
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample() -> Depth {
        Depth {
            bids: vec![
                DepthLevel::new(dec!(400), dec!(1)),
                DepthLevel::new(dec!(300), dec!(0.5)),
            ],
            asks: vec![DepthLevel::new(dec!(550), dec!(5))],
        }
    }

    #[test]
    fn test_spread_and_mid() {
        let depth = sample();
        assert_eq!(depth.spread(), Some(dec!(150)));
        assert_eq!(depth.mid_price(), Some(dec!(475)));
        assert_eq!(depth.bid_volume(), dec!(1.5));
        assert_eq!(depth.ask_volume(), dec!(5));
    }

    #[test]
    fn test_one_sided_depth() {
        let depth = Depth {
            bids: vec![DepthLevel::new(dec!(100), dec!(1))],
            asks: vec![],
        };
        assert_eq!(depth.best_ask(), None);
        assert_eq!(depth.spread(), None);
        assert_eq!(depth.mid_price(), None);
        assert!(!depth.is_empty());
        assert!(Depth::default().is_empty());
    }

    #[test]
    fn test_depth_json_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["bids"][0]["price"], "400");
        assert_eq!(value["bids"][1]["quantity"], "0.5");
        assert_eq!(value["asks"][0]["price"], "550");
    }
}
