//! Order-book depth cache
//!
//! This crate keeps a local, thread-safe mirror of an exchange's depth view.
//! Feed updates arrive as `(side, quantity, price)` triples; the book keeps
//! each side sorted best-first and answers depth queries at any time.
//!
//! # Layout
//!
//! - [`SortedLevelList`] - one side's levels in a slab arena, linked best to worst
//! - [`LevelIndex`] - per-side key → handle map for O(1) amend/delete
//! - [`OrderBook`] - both lists and the index behind one mutex
//!
//! # Example
//!
//! ```
//! use depth_book::OrderBook;
//! use depth_types::Side;
//! use rust_decimal_macros::dec;
//!
//! let book = OrderBook::new("BTCUSDT");
//! book.apply(Side::Buy, dec!(5), dec!(100)).unwrap();
//! book.apply(Side::Buy, dec!(3), dec!(100)).unwrap(); // overwrite, not add
//! book.apply(Side::Sell, dec!(5), dec!(550)).unwrap();
//! book.apply(Side::Sell, dec!(0), dec!(550)).unwrap(); // remove
//!
//! let depth = book.depth(None);
//! assert_eq!(depth.bids.len(), 1);
//! assert_eq!(depth.bids[0].quantity, dec!(3));
//! assert!(depth.asks.is_empty());
//! ```

pub mod book;
pub mod config;
pub mod index;
pub mod list;

// Re-export main types
pub use book::{ApplyResult, OrderBook};
pub use config::{BookConfig, DEFAULT_CAPACITY};
pub use index::LevelIndex;
pub use list::{LevelHandle, Levels, SortedLevelList};
