//! Per-side key → handle index
//!
//! Bids and asks get separate maps, so a bid and an ask at the same price
//! never collide on the same key.

use crate::list::LevelHandle;
use depth_types::Side;
use std::collections::HashMap;

/// O(1) lookup from a level key to its handle in the owning side's list
#[derive(Debug, Clone, Default)]
pub struct LevelIndex {
    bids: HashMap<String, LevelHandle>,
    asks: HashMap<String, LevelHandle>,
}

impl LevelIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an index with room for `capacity` keys per side
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bids: HashMap::with_capacity(capacity),
            asks: HashMap::with_capacity(capacity),
        }
    }

    /// Handle of the level with `key` on `side`, if present
    pub fn get(&self, side: Side, key: &str) -> Option<LevelHandle> {
        self.side(side).get(key).copied()
    }

    /// Record (or overwrite) the handle for `key` on `side`
    pub fn set(&mut self, side: Side, key: String, handle: LevelHandle) {
        self.side_mut(side).insert(key, handle);
    }

    /// Remove the mapping for `key` on `side`, returning the handle it held
    pub fn delete(&mut self, side: Side, key: &str) -> Option<LevelHandle> {
        self.side_mut(side).remove(key)
    }

    /// Number of keys indexed on `side`
    pub fn len(&self, side: Side) -> usize {
        self.side(side).len()
    }

    /// Check if neither side has any key
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    /// Drop all mappings on both sides
    pub fn clear(&mut self) {
        self.bids.clear();
        self.asks.clear();
    }

    fn side(&self, side: Side) -> &HashMap<String, LevelHandle> {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut HashMap<String, LevelHandle> {
        match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        }
    }
}
