//! # Limit Order Book
//!
//! In-memory state of a two-sided limit order book.
//!
//! ## Architecture
//!
//! - **Types**: Core data structures (Order, Side, PriceKey)
//! - **OrderBook**: Order store with arrival-time priority and per-side levels
//! - **Error**: Input validation errors
//!
//! ## Design Principles
//!
//! 1. **Exact prices**: Levels are distinct `f64` prices under exact equality
//! 2. **Time priority**: FIFO rank comes from arrival stamps, which survive
//!    size amendments
//! 3. **No sentinel errors**: Unknown ids and missing levels return
//!    `false` / `None` / zero, only malformed input is an `Err`
//! 4. **Synchronous Execution**: Single owner, no locking, no I/O

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Order, Side, PriceKey
pub mod types;

/// Order book: store, levels, clocks, configuration
pub mod orderbook;

/// Error type and result alias
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use error::{BookError, Result};
pub use orderbook::{ArrivalRetention, BookConfig, OrderBook, OrderStore, PriceLevel};
pub use types::{Order, OrderId, Side};
