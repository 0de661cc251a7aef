//! Benchmarks for the limit order book.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark
//! cargo bench -- level_queries
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use std::time::Duration;

use limit_order_book::{Order, OrderBook, Side};

// ============================================================================
// HELPER FUNCTIONS - Deterministic order generation
// ============================================================================

/// Generate a vector of deterministic orders for throughput testing.
/// Alternates between bids and offers on a tick grid around 100.0.
fn generate_order_batch(count: usize, seed: u64) -> Vec<Order> {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    (0..count)
        .map(|i| {
            let id = (i + 1) as u64;
            let ticks = f64::from(rng.gen_range(1i32..=200));
            let size = rng.gen_range(1..=1_000);
            if i % 2 == 0 {
                Order::bid(id, 100.0 - ticks * 0.01, size)
            } else {
                Order::offer(id, 100.0 + ticks * 0.01, size)
            }
        })
        .collect()
}

/// Book pre-loaded with `count` orders
fn populated_book(count: usize) -> OrderBook {
    let mut book = OrderBook::with_capacity(count);
    for order in generate_order_batch(count, 42) {
        book.add_order(order).unwrap();
    }
    book
}

// ============================================================================
// BENCHMARKS
// ============================================================================

fn bench_add_orders(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_orders");
    group.measurement_time(Duration::from_secs(5));

    for count in [1_000usize, 10_000, 100_000] {
        let orders = generate_order_batch(count, 7);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &orders, |b, orders| {
            b.iter_batched(
                || (OrderBook::with_capacity(count), orders.clone()),
                |(mut book, orders)| {
                    for order in orders {
                        book.add_order(black_box(order)).unwrap();
                    }
                    book
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

fn bench_amend_and_cancel(c: &mut Criterion) {
    let mut group = c.benchmark_group("amend_and_cancel");

    group.bench_function("update_order", |b| {
        b.iter_batched(
            || populated_book(10_000),
            |mut book| {
                for id in (1..=10_000u64).step_by(7) {
                    book.update_order(black_box(id), 5);
                }
                book
            },
            BatchSize::LargeInput,
        )
    });

    group.bench_function("remove_order", |b| {
        b.iter_batched(
            || populated_book(10_000),
            |mut book| {
                for id in (1..=10_000u64).step_by(7) {
                    book.remove_order(black_box(id));
                }
                book
            },
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

fn bench_level_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_queries");
    let book = populated_book(100_000);

    for level in [1usize, 10, 100] {
        group.bench_with_input(BenchmarkId::new("total_size", level), &level, |b, &level| {
            b.iter(|| book.total_size_at_level(black_box(Side::Bid), black_box(level)))
        });
    }

    group.bench_function("orders_for_side", |b| {
        b.iter(|| book.orders_for_side(black_box(Side::Offer)))
    });

    group.finish();
}

criterion_group!(benches, bench_add_orders, bench_amend_and_cancel, bench_level_queries);
criterion_main!(benches);
