//! Core data types for the limit order book
//!
//! ## Types
//!
//! - [`Order`]: A resting limit order (`id`, `price`, `side`, `size`)
//! - [`Side`]: Bid or Offer
//! - [`OrderId`]: Order identifier
//! - [`PriceKey`]: Exactly-compared, total-ordered price used for levels

mod order;
pub mod price;

// Re-export all types at module level
pub use order::{Order, OrderId, Side};
pub use price::PriceKey;
