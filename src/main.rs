//! Limit Order Book - Binary Entry Point
//!
//! Builds a small book from fixed bids and offers and logs the level queries.
//! Set `RUST_LOG=limit_order_book=debug` to see each order event.

use limit_order_book::{Order, OrderBook, Side};
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("limit_order_book=info".parse()?),
        )
        .with_target(false)
        .with_line_number(true)
        .init();

    let mut book = OrderBook::with_capacity(64);

    let orders = [
        Order::bid(1, 2.0, 1),
        Order::bid(2, 4.0, 2),
        Order::bid(3, 3.0, 3),
        Order::bid(7, 4.0, 10),
        Order::offer(4, 7.0, 1),
        Order::offer(5, 5.0, 2),
        Order::offer(8, 5.0, 12),
        Order::offer(6, 6.0, 3),
    ];
    for order in orders {
        book.add_order(order)?;
    }
    info!(orders = book.order_count(), "book loaded");

    for side in [Side::Bid, Side::Offer] {
        for level in 1..=3 {
            info!(
                %side,
                level,
                price = book.price_at_level(side, level)?,
                total_size = book.total_size_at_level(side, level)?,
                "level"
            );
        }
    }

    // Amend a size in place, then cancel and re-add to lose priority
    book.update_order(2, 20);
    book.remove_order(1);
    book.add_order(Order::bid(1, 2.0, 1))?;

    for order in book.orders_for_side(Side::Bid)? {
        info!(%order, "bid queue");
    }

    if let Some(spread) = book.spread() {
        info!(spread, "spread");
    }
    info!(root = %book.state_root_hex()?, "state root");

    Ok(())
}
