//! Shared types for the order-book depth cache
//!
//! This crate provides the value types exchanged between the depth engine
//! and its collaborators (feed decoders, snapshot loaders, renderers).
//! It has minimal dependencies and can be used independently.
//!
//! # Key Types
//!
//! - [`Side`] - Bid (buy) or ask (sell) side of the book
//! - [`PriceLevel`] - Side-tagged price level with decimal precision
//! - [`Depth`], [`DepthLevel`] - Best-first depth view of both sides
//! - [`BookSnapshot`] - Full-fidelity serialized book
//! - [`BookError`] - Error types

pub mod depth;
pub mod enums;
pub mod error;
pub mod level;
pub mod snapshot;

// Re-export commonly used types
pub use depth::*;
pub use enums::*;
pub use error::*;
pub use level::*;
pub use snapshot::*;

// Re-export rust_decimal for users
pub use rust_decimal::Decimal;
