//! Book configuration.
//!
//! ## Arrival Retention
//!
//! Cancelling an order removes it from the book, but its arrival stamp is a
//! separate record. [`ArrivalRetention`] decides what happens to that stamp:
//!
//! - [`ArrivalRetention::Retain`]: the stamp stays behind as a stale entry
//!   (compatible behavior; the map only shrinks on `reset`)
//! - [`ArrivalRetention::PurgeOnCancel`]: the stamp is dropped with the order
//!
//! Quantity amendments keep the stamp under both policies.

/// What happens to an order's arrival stamp when it is cancelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArrivalRetention {
    /// Leave the stamp in the arrival map
    #[default]
    Retain,
    /// Drop the stamp together with the order
    PurgeOnCancel,
}

/// Default number of pre-allocated order slots
pub const DEFAULT_CAPACITY: usize = 1024;

/// Order book configuration
///
/// ```
/// use limit_order_book::orderbook::{ArrivalRetention, BookConfig};
///
/// let config = BookConfig::default()
///     .with_capacity(10_000)
///     .with_retention(ArrivalRetention::PurgeOnCancel);
///
/// assert_eq!(config.capacity, 10_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookConfig {
    /// Pre-allocated order slots
    pub capacity: usize,

    /// Arrival stamp policy on cancel
    pub retention: ArrivalRetention,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            retention: ArrivalRetention::default(),
        }
    }
}

impl BookConfig {
    /// Set the pre-allocated capacity
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the arrival retention policy
    #[must_use]
    pub fn with_retention(mut self, retention: ArrivalRetention) -> Self {
        self.retention = retention;
        self
    }
}
