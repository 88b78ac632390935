//! Thread-safe depth book
//!
//! [`OrderBook`] owns one [`SortedLevelList`] per side plus the
//! [`LevelIndex`] that maps level keys to list handles. All of it sits behind
//! a single mutex: every operation, reads included, holds the lock for its
//! whole body, so a depth view always reflects one point in time.
//!
//! # Update semantics
//!
//! | quantity | level present | effect |
//! |----------|---------------|--------|
//! | `<= 0`   | no            | nothing (`Ignored`) |
//! | `<= 0`   | yes           | level removed (`Removed`) |
//! | `> 0`    | no            | level inserted (`Inserted`) |
//! | `> 0`    | yes           | quantity overwritten (`Updated`) |
//!
//! A positive quantity with a non-positive price is rejected with
//! [`BookError::InvalidPrice`] and the book is left untouched.

use crate::{
    config::BookConfig,
    index::LevelIndex,
    list::SortedLevelList,
};
use depth_types::{level_key, BookError, BookSnapshot, Depth, DepthLevel, PriceLevel, Side};
use parking_lot::Mutex;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::{debug, trace, warn};

/// Outcome of a successful [`OrderBook::apply`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyResult {
    /// A new level was created
    Inserted,
    /// An existing level's quantity was overwritten
    Updated,
    /// An existing level was deleted
    Removed,
    /// Removal of a level that was not present
    Ignored,
}

impl ApplyResult {
    /// Returns true if the book changed
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Lists and index guarded together by the book's lock
#[derive(Debug)]
struct BookState {
    bids: SortedLevelList,
    asks: SortedLevelList,
    index: LevelIndex,
}

impl BookState {
    fn new(capacity: usize) -> Self {
        Self {
            bids: SortedLevelList::with_capacity(Side::Buy, capacity),
            asks: SortedLevelList::with_capacity(Side::Sell, capacity),
            index: LevelIndex::with_capacity(capacity),
        }
    }

    fn list(&self, side: Side) -> &SortedLevelList {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    fn apply(
        &mut self,
        side: Side,
        quantity: Decimal,
        price: Decimal,
    ) -> Result<ApplyResult, BookError> {
        let key = level_key(price);
        let Self { bids, asks, index } = self;
        let list = match side {
            Side::Buy => bids,
            Side::Sell => asks,
        };

        if quantity <= Decimal::ZERO {
            let Some(handle) = index.delete(side, &key) else {
                return Ok(ApplyResult::Ignored);
            };
            let removed = list.remove(handle);
            debug_assert!(removed.is_some(), "index held a dangling handle for {key}");
            return Ok(ApplyResult::Removed);
        }

        if price <= Decimal::ZERO {
            return Err(BookError::InvalidPrice { price });
        }

        if let Some(handle) = index.get(side, &key) {
            let updated = list.update(handle, quantity);
            debug_assert!(updated, "index held a dangling handle for {key}");
            return Ok(ApplyResult::Updated);
        }

        let handle = list.insert(PriceLevel {
            key: key.clone(),
            side,
            quantity,
            price,
        });
        index.set(side, key, handle);
        Ok(ApplyResult::Inserted)
    }

    /// Load every level of a snapshot, checking each is listed on its own side
    fn load(&mut self, snapshot: &BookSnapshot) -> Result<(), BookError> {
        for (expected, levels) in [(Side::Buy, &snapshot.bids), (Side::Sell, &snapshot.asks)] {
            for level in levels {
                if level.side != expected {
                    return Err(BookError::SideMismatch {
                        key: level.key.clone(),
                        expected,
                        found: level.side,
                    });
                }
                if level.is_empty() {
                    trace!(key = %level.key, side = %expected, "skipping empty snapshot level");
                    continue;
                }
                self.apply(expected, level.quantity, level.price)?;
            }
        }
        Ok(())
    }

    fn clear(&mut self) {
        self.bids.clear();
        self.asks.clear();
        self.index.clear();
    }
}

/// Local mirror of an exchange's depth for one instrument
///
/// # Example
///
/// ```
/// use depth_book::{ApplyResult, OrderBook};
/// use depth_types::Side;
/// use rust_decimal_macros::dec;
///
/// let book = OrderBook::new("BTCUSDT");
///
/// assert_eq!(book.apply(Side::Buy, dec!(5), dec!(100)).unwrap(), ApplyResult::Inserted);
/// book.apply(Side::Buy, dec!(1), dec!(400)).unwrap();
/// book.apply(Side::Sell, dec!(5), dec!(550)).unwrap();
///
/// let depth = book.depth(None);
/// assert_eq!(depth.bids[0].price, dec!(400));
/// assert_eq!(depth.asks[0].price, dec!(550));
/// ```
pub struct OrderBook {
    config: BookConfig,
    state: Mutex<BookState>,
}

impl OrderBook {
    /// Create an empty book for a symbol
    pub fn new(symbol: impl Into<String>) -> Self {
        Self::with_config(BookConfig::for_symbol(symbol))
    }

    /// Create an empty book from a configuration
    pub fn with_config(config: BookConfig) -> Self {
        let state = BookState::new(config.capacity);
        Self {
            config,
            state: Mutex::new(state),
        }
    }

    /// Build a book from a stored snapshot, using the snapshot's symbol
    pub fn from_snapshot(snapshot: &BookSnapshot) -> Result<Self, BookError> {
        let book = Self::new(snapshot.symbol.clone());
        book.load_snapshot(snapshot)?;
        Ok(book)
    }

    /// Get the symbol
    pub fn symbol(&self) -> &str {
        &self.config.symbol
    }

    /// Get the configuration
    pub fn config(&self) -> &BookConfig {
        &self.config
    }

    /// Apply one feed update `(side, quantity, price)`
    ///
    /// This is the only way the book's levels change. A non-positive
    /// quantity removes the level at `price` (a no-op if it is absent); a
    /// positive quantity inserts the level or overwrites its quantity.
    ///
    /// # Errors
    ///
    /// [`BookError::InvalidPrice`] if `quantity > 0` and `price <= 0`. The
    /// book is not modified in that case.
    pub fn apply(
        &self,
        side: Side,
        quantity: Decimal,
        price: Decimal,
    ) -> Result<ApplyResult, BookError> {
        let result = self.state.lock().apply(side, quantity, price);

        match &result {
            Ok(outcome) => trace!(
                symbol = %self.config.symbol,
                %side,
                %quantity,
                %price,
                ?outcome,
                "applied level update"
            ),
            Err(err) => warn!(symbol = %self.config.symbol, %side, %quantity, "rejected level update: {err}"),
        }

        result
    }

    /// Alias for [`apply`](Self::apply) under the post-only feed naming
    pub fn append(
        &self,
        side: Side,
        quantity: Decimal,
        price: Decimal,
    ) -> Result<ApplyResult, BookError> {
        self.apply(side, quantity, price)
    }

    /// Copy both sides best-first
    ///
    /// `limit` caps the number of levels per side. `None` falls back to the
    /// configured `max_depth`, and to full depth if that is unset too.
    pub fn depth(&self, limit: Option<usize>) -> Depth {
        let limit = limit.or(self.config.max_depth).unwrap_or(usize::MAX);
        let state = self.state.lock();

        Depth {
            bids: state.bids.iter().take(limit).map(DepthLevel::from).collect(),
            asks: state.asks.iter().take(limit).map(DepthLevel::from).collect(),
        }
    }

    /// Full-fidelity copy of every level, for persistence
    pub fn snapshot(&self) -> BookSnapshot {
        let state = self.state.lock();

        BookSnapshot {
            symbol: self.config.symbol.clone(),
            bids: state.bids.iter().cloned().collect(),
            asks: state.asks.iter().cloned().collect(),
        }
    }

    /// Replace the book's contents with a snapshot
    ///
    /// The snapshot is loaded into fresh lists first and swapped in only if
    /// every level is valid, so on error the book keeps its previous state.
    pub fn load_snapshot(&self, snapshot: &BookSnapshot) -> Result<(), BookError> {
        let mut fresh = BookState::new(self.config.capacity);
        fresh.load(snapshot)?;

        let (bids, asks) = (fresh.bids.len(), fresh.asks.len());
        *self.state.lock() = fresh;

        debug!(symbol = %self.config.symbol, bids, asks, "loaded book snapshot");
        Ok(())
    }

    /// Get the best bid (highest price)
    pub fn best_bid(&self) -> Option<DepthLevel> {
        self.state.lock().bids.best().map(DepthLevel::from)
    }

    /// Get the best ask (lowest price)
    pub fn best_ask(&self) -> Option<DepthLevel> {
        self.state.lock().asks.best().map(DepthLevel::from)
    }

    /// Get the spread (ask - bid)
    pub fn spread(&self) -> Option<Decimal> {
        let state = self.state.lock();
        match (state.asks.best(), state.bids.best()) {
            (Some(ask), Some(bid)) => Some(ask.price - bid.price),
            _ => None,
        }
    }

    /// Get the mid price ((ask + bid) / 2)
    pub fn mid_price(&self) -> Option<Decimal> {
        let state = self.state.lock();
        match (state.asks.best(), state.bids.best()) {
            (Some(ask), Some(bid)) => Some((ask.price + bid.price) / Decimal::TWO),
            _ => None,
        }
    }

    /// Get top N bids
    pub fn top_bids(&self, n: usize) -> Vec<DepthLevel> {
        self.top(Side::Buy, n)
    }

    /// Get top N asks
    pub fn top_asks(&self, n: usize) -> Vec<DepthLevel> {
        self.top(Side::Sell, n)
    }

    /// Number of bid levels
    pub fn bid_count(&self) -> usize {
        self.state.lock().bids.len()
    }

    /// Number of ask levels
    pub fn ask_count(&self) -> usize {
        self.state.lock().asks.len()
    }

    /// Check if both sides are empty
    pub fn is_empty(&self) -> bool {
        let state = self.state.lock();
        state.bids.is_empty() && state.asks.is_empty()
    }

    /// Drop every level on both sides
    pub fn clear(&self) {
        self.state.lock().clear();
        debug!(symbol = %self.config.symbol, "cleared book");
    }

    fn top(&self, side: Side, n: usize) -> Vec<DepthLevel> {
        let state = self.state.lock();
        state.list(side).iter().take(n).map(DepthLevel::from).collect()
    }
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::with_config(BookConfig::default())
    }
}

impl fmt::Debug for OrderBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("OrderBook")
            .field("symbol", &self.config.symbol)
            .field("bids", &state.bids.len())
            .field("asks", &state.asks.len())
            .finish()
    }
}

impl Serialize for OrderBook {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.snapshot().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for OrderBook {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let snapshot = BookSnapshot::deserialize(deserializer)?;
        OrderBook::from_snapshot(&snapshot).map_err(serde::de::Error::custom)
    }
}
