//! Shared fixtures for depth-book integration tests

#![allow(dead_code)]

use depth_book::OrderBook;
use depth_types::{Decimal, Depth};

/// One resting bid at 100
pub const SINGLE_BID: &str = r#"
{
    "bids": [
        {
            "id": "100",
            "side": "buy",
            "amount": "5",
            "price": "100"
        }
    ],
    "asks": []
}
"#;

/// Nothing on either side
pub const EMPTY_BOOK: &str = r#"
{
    "bids": [],
    "asks": []
}
"#;

/// Three bids, no asks; ids omitted as some feeds do
pub const THREE_BIDS: &str = r#"
{
    "bids": [
        {
            "side": "buy",
            "amount": "5",
            "price": "500"
        },
        {
            "side": "buy",
            "amount": "1",
            "price": "400"
        },
        {
            "side": "buy",
            "amount": "0.5",
            "price": "300"
        }
    ],
    "asks": []
}
"#;

/// Deserialize a book from a JSON fixture
pub fn load_book(json: &str) -> OrderBook {
    serde_json::from_str(json).expect("fixture should deserialize")
}

/// Serialize a book back to compact JSON
pub fn to_json(book: &OrderBook) -> String {
    serde_json::to_string(book).expect("book should serialize")
}

/// Flatten a depth view to (price, quantity) pairs per side
pub fn pairs(depth: &Depth) -> (Vec<(Decimal, Decimal)>, Vec<(Decimal, Decimal)>) {
    let side = |levels: &[depth_types::DepthLevel]| {
        levels.iter().map(|l| (l.price, l.quantity)).collect::<Vec<_>>()
    };
    (side(&depth.bids[..]), side(&depth.asks[..]))
}

/// Assert bids strictly descending and asks strictly ascending
pub fn assert_sorted(depth: &Depth) {
    for pair in depth.bids.windows(2) {
        assert!(
            pair[0].price > pair[1].price,
            "bids out of order: {} then {}",
            pair[0].price,
            pair[1].price
        );
    }
    for pair in depth.asks.windows(2) {
        assert!(
            pair[0].price < pair[1].price,
            "asks out of order: {} then {}",
            pair[0].price,
            pair[1].price
        );
    }
}
