//! Demo 1: Random Feed
//!
//! Showcases: feeding random updates into a book, JSON depth output
//!
//! Run: cargo run --bin random_feed -- [updates] [seed]
//!
//! Prices and amounts are drawn from 0..1000, so some updates are removals
//! (zero amount) and a few are rejected (zero price). Set `RUST_LOG=trace`
//! to see every update the book applies.

use depth_book::OrderBook;
use depth_types::Side;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let updates: usize = match args.next() {
        Some(arg) => arg.parse()?,
        None => 10,
    };
    let mut rng = match args.next() {
        Some(seed) => StdRng::seed_from_u64(seed.parse()?),
        None => StdRng::from_entropy(),
    };

    let book = OrderBook::new("BTCUSDT");
    let mut rejected = 0usize;

    for _ in 0..updates {
        let side = if rng.gen_bool(0.5) { Side::Buy } else { Side::Sell };
        let amount = Decimal::from(rng.gen_range(0..1000_i64));
        let price = Decimal::from(rng.gen_range(0..1000_i64));

        if book.apply(side, amount, price).is_err() {
            rejected += 1;
        }
    }

    info!(
        symbol = book.symbol(),
        updates,
        rejected,
        bids = book.bid_count(),
        asks = book.ask_count(),
        "feed finished"
    );

    println!("{}", serde_json::to_string_pretty(&book.depth(None))?);
    Ok(())
}
