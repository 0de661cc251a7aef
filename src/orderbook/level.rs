//! Aggregated state of a single price level.
//!
//! ## Design
//!
//! A `PriceLevel` summarizes every active order on one side at one exact
//! price: how much size rests there and how many orders make it up. The
//! orders themselves live in the store; the book keeps one level per
//! distinct price and updates it as orders come, go, or change size.
//!
//! A level whose order count drops to zero is removed from its side.
//!
//! Sizes are summed in a `u128` so the running total stays exact through any
//! add/remove/resize sequence; `total_size` is that sum clamped to `u64`.

/// Aggregate of the orders resting at one price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceLevel {
    /// Price for this level
    pub price: f64,

    /// Total size of the orders at this level, clamped to `u64::MAX`
    pub total_size: u64,

    /// Number of orders at this level
    pub order_count: usize,

    /// Exact sum of the order sizes
    size_sum: u128,
}

impl PriceLevel {
    /// Create a new empty price level
    pub fn new(price: f64) -> Self {
        Self {
            price,
            total_size: 0,
            order_count: 0,
            size_sum: 0,
        }
    }

    /// Check if the price level is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order_count == 0
    }

    /// Account for an order joining the level
    pub fn add(&mut self, size: u64) {
        self.order_count += 1;
        self.size_sum += u128::from(size);
        self.sync_total();
    }

    /// Account for an order leaving the level
    pub fn remove(&mut self, size: u64) {
        self.order_count = self.order_count.saturating_sub(1);
        self.size_sum = self.size_sum.saturating_sub(u128::from(size));
        self.sync_total();
    }

    /// Account for an order changing size in place
    pub fn resize(&mut self, old_size: u64, new_size: u64) {
        self.size_sum = self.size_sum.saturating_sub(u128::from(old_size)) + u128::from(new_size);
        self.sync_total();
    }

    fn sync_total(&mut self) {
        self.total_size = u64::try_from(self.size_sum).unwrap_or(u64::MAX);
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
