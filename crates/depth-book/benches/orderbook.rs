//! Benchmarks for depth book operations
//!
//! Run with: cargo bench --bench orderbook

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use depth_book::{OrderBook, SortedLevelList};
use depth_types::{PriceLevel, Side};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Book with `count` levels per side around 100000
fn populated_book(count: i64) -> OrderBook {
    let book = OrderBook::new("BTCUSDT");
    for i in 0..count {
        book.apply(Side::Buy, dec!(1) + Decimal::from(i) / dec!(10), Decimal::from(100000 - i))
            .unwrap();
        book.apply(Side::Sell, dec!(1) + Decimal::from(i) / dec!(10), Decimal::from(100001 + i))
            .unwrap();
    }
    book
}

fn bench_list_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_insert");

    for size in [10, 100, 500, 1000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("best_first", size), &size, |b, &size| {
            b.iter(|| {
                let mut list = SortedLevelList::with_capacity(Side::Buy, size as usize);
                for i in 0..size {
                    let level = PriceLevel::new(Side::Buy, Decimal::from(i + 1), Decimal::from(100000 + i));
                    list.insert(black_box(level));
                }
                black_box(list)
            })
        });

        group.bench_with_input(BenchmarkId::new("worst_first", size), &size, |b, &size| {
            b.iter(|| {
                let mut list = SortedLevelList::with_capacity(Side::Buy, size as usize);
                for i in 0..size {
                    let level = PriceLevel::new(Side::Buy, Decimal::from(i + 1), Decimal::from(100000 - i));
                    list.insert(black_box(level));
                }
                black_box(list)
            })
        });
    }

    group.finish();
}

fn bench_apply(c: &mut Criterion) {
    let book = populated_book(500);
    let mut group = c.benchmark_group("apply");

    group.bench_function("amend_top", |b| {
        b.iter(|| {
            let result = book.apply(Side::Buy, black_box(dec!(2.5)), black_box(dec!(100000)));
            black_box(result)
        })
    });

    group.bench_function("amend_deep", |b| {
        b.iter(|| {
            let result = book.apply(Side::Sell, black_box(dec!(2.5)), black_box(dec!(100400)));
            black_box(result)
        })
    });

    group.bench_function("insert_remove_top", |b| {
        b.iter(|| {
            book.apply(Side::Buy, black_box(dec!(1)), black_box(dec!(100000.5))).unwrap();
            let result = book.apply(Side::Buy, black_box(dec!(0)), black_box(dec!(100000.5)));
            black_box(result)
        })
    });

    group.bench_function("remove_absent", |b| {
        b.iter(|| {
            let result = book.apply(Side::Sell, black_box(dec!(0)), black_box(dec!(1)));
            black_box(result)
        })
    });

    group.finish();
}

fn bench_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("depth");

    for size in [10, 100, 500] {
        let book = populated_book(size);
        group.throughput(Throughput::Elements((size * 2) as u64));

        group.bench_with_input(BenchmarkId::new("full", size), &book, |b, book| {
            b.iter(|| black_box(book.depth(None)))
        });
    }

    let book = populated_book(500);
    group.bench_function("top_10_of_500", |b| b.iter(|| black_box(book.depth(Some(10)))));
    group.bench_function("snapshot_500", |b| b.iter(|| black_box(book.snapshot())));

    group.finish();
}

criterion_group!(benches, bench_list_insert, bench_apply, bench_depth);

criterion_main!(benches);
