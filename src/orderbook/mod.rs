//! Order book module.
//!
//! ## Architecture
//!
//! - **Slab-based storage**: O(1) order insertion, removal, and lookup
//! - **Arrival map**: FIFO stamps kept apart from the orders themselves
//! - **Price levels**: per-side aggregates in a BTreeMap, best price first
//!
//! ## Components
//!
//! - [`OrderStore`]: Active orders plus arrival stamps
//! - [`PriceLevel`]: Aggregate size and count at a single price
//! - [`OrderBook`]: Public API with bid/offer sides
//! - [`Clock`]: Arrival time source
//! - [`BookConfig`]: Capacity and arrival retention policy
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Add / remove / update | O(log L) |
//! | Price or size at level k | O(k) |
//! | Best bid/offer | O(log L) |
//! | Orders for side | O(n log n) |
//!
//! L = distinct prices on the side, n = active orders

pub mod book;
pub mod clock;
pub mod config;
pub mod level;
pub mod store;

pub use book::OrderBook;
pub use clock::{Clock, ManualClock, MonotonicClock, SystemClock};
pub use config::{ArrivalRetention, BookConfig};
pub use level::PriceLevel;
pub use store::{Arrival, OrderStore};
