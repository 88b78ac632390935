//! Book configuration
//!
//! # Example
//!
//! ```
//! use depth_book::BookConfig;
//!
//! let config = BookConfig::builder()
//!     .symbol("BTCUSDT")
//!     .max_depth(25)
//!     .build();
//!
//! assert_eq!(config.symbol, "BTCUSDT");
//! assert_eq!(config.max_depth, Some(25));
//! ```

use typed_builder::TypedBuilder;

/// Default number of levels per side to reserve up front
pub const DEFAULT_CAPACITY: usize = 64;

/// Settings fixed for the lifetime of an [`OrderBook`](crate::OrderBook)
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct BookConfig {
    /// Instrument symbol, used in snapshots and log fields
    #[builder(default, setter(into))]
    pub symbol: String,

    /// Levels per side returned by `depth(None)`; `None` returns full depth
    #[builder(default, setter(strip_option))]
    pub max_depth: Option<usize>,

    /// Levels per side to reserve before the arena and index reallocate
    #[builder(default = DEFAULT_CAPACITY)]
    pub capacity: usize,
}

impl BookConfig {
    /// Configuration with defaults for a given symbol
    pub fn for_symbol(symbol: impl Into<String>) -> Self {
        Self::builder().symbol(symbol).build()
    }
}

impl Default for BookConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
