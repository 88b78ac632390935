//! Demo 2: ASCII Depth Chart
//!
//! Showcases: depth visualization over a synthetic random-walk feed
//!
//! Run: cargo run --bin depth_chart -- [frames]

use colored::*;
use depth_book::{BookConfig, OrderBook};
use depth_types::{Depth, DepthLevel, Side};
use rand::Rng;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::thread;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const LEVELS_TO_SHOW: usize = 10;
const HALF_WIDTH: usize = 25;
const TICK: Decimal = dec!(0.5);

fn bar_len(quantity: Decimal, max_vol: Decimal) -> usize {
    if max_vol.is_zero() {
        return 0;
    }
    (quantity / max_vol * Decimal::from(HALF_WIDTH))
        .round()
        .to_usize()
        .unwrap_or(0)
        .min(HALF_WIDTH)
}

fn draw_depth_chart(depth: &Depth) {
    let max_of = |levels: &[DepthLevel]| levels.iter().map(|l| l.quantity).max().unwrap_or(dec!(1));
    let max_vol = max_of(&depth.bids[..]).max(max_of(&depth.asks[..]));

    // Asks printed worst to best so the spread sits in the middle
    for level in depth.asks.iter().rev() {
        let len = bar_len(level.quantity, max_vol);
        println!(
            "  {:>10.4} │{}{}│ {:<10.2}",
            level.quantity,
            " ".repeat(HALF_WIDTH - len),
            "█".repeat(len).red(),
            level.price
        );
    }

    println!(
        "  {:>10} ├{}┤ {}",
        "",
        "─".repeat(HALF_WIDTH * 2),
        format!("SPREAD: {:.2}", depth.spread().unwrap_or_default()).yellow()
    );

    for level in &depth.bids {
        let len = bar_len(level.quantity, max_vol);
        println!(
            "  {:>10.4} │{}{}│ {:<10.2}",
            level.quantity,
            "█".repeat(len).green(),
            " ".repeat(HALF_WIDTH - len),
            level.price
        );
    }

    println!();
    println!(
        "  {} {:.2}  {} {:.4}  {} {:.4}",
        "Mid:".white(),
        depth.mid_price().unwrap_or_default(),
        "Bid Vol:".green(),
        depth.bid_volume(),
        "Ask Vol:".red(),
        depth.ask_volume()
    );
}

/// Apply a burst of updates around `mid`, returning the drifted mid
fn feed_burst(book: &OrderBook, rng: &mut impl Rng, mid: Decimal) -> Decimal {
    let mid = mid + TICK * Decimal::from(rng.gen_range(-2..=2_i64));

    for _ in 0..40 {
        let side = if rng.gen_bool(0.5) { Side::Buy } else { Side::Sell };
        let offset = TICK * Decimal::from(rng.gen_range(1..=30_i64));
        let price = match side {
            Side::Buy => mid - offset,
            Side::Sell => mid + offset,
        };
        // One in four updates clears its level
        let quantity = if rng.gen_ratio(1, 4) {
            Decimal::ZERO
        } else {
            Decimal::new(rng.gen_range(1..=50_000_i64), 4)
        };
        // Prices stay far from zero, so nothing is rejected here
        let _ = book.apply(side, quantity, price);
    }

    // The feed never crosses: drop levels that moved through the new mid
    for level in book.top_bids(usize::MAX).iter().filter(|l| l.price >= mid) {
        let _ = book.apply(Side::Buy, Decimal::ZERO, level.price);
    }
    for level in book.top_asks(usize::MAX).iter().filter(|l| l.price <= mid) {
        let _ = book.apply(Side::Sell, Decimal::ZERO, level.price);
    }

    mid
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let frames: usize = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 20,
    };

    let book = OrderBook::with_config(
        BookConfig::builder()
            .symbol("BTCUSDT")
            .max_depth(LEVELS_TO_SHOW)
            .build(),
    );
    let mut rng = rand::thread_rng();
    let mut mid = dec!(100000);

    for frame in 1..=frames {
        mid = feed_burst(&book, &mut rng, mid);
        let depth = book.depth(None);

        // Clear screen
        print!("\x1B[2J\x1B[H");

        println!("{}", "═".repeat(70).cyan());
        println!(
            "{}{}",
            format!("  {} DEPTH CHART", book.symbol()).cyan().bold(),
            format!("  (frame {frame}/{frames})").dimmed()
        );
        println!("{}", "═".repeat(70).cyan());
        println!();
        println!("  {} = Asks (Sell)    {} = Bids (Buy)", "███".red(), "███".green());
        println!();

        draw_depth_chart(&depth);

        thread::sleep(Duration::from_millis(300));
    }

    Ok(())
}
