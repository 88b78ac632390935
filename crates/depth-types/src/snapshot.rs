//! Serialized form of a whole book

use crate::level::PriceLevel;
use serde::{Deserialize, Serialize};

/// Full-fidelity copy of a book: every level with its key, side and amount.
///
/// Both lists are ordered best price first. This is the format used to seed
/// a book from a stored snapshot and to persist one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSnapshot {
    /// Instrument symbol, omitted when empty
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub symbol: String,
    /// Bid levels, highest price first
    #[serde(default)]
    pub bids: Vec<PriceLevel>,
    /// Ask levels, lowest price first
    #[serde(default)]
    pub asks: Vec<PriceLevel>,
}

impl BookSnapshot {
    /// Total number of levels on both sides
    pub fn level_count(&self) -> usize {
        self.bids.len() + self.asks.len()
    }

    /// True when neither side has any level
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }
}
