//! Limit order book.
//!
//! ## Architecture
//!
//! - **OrderStore**: active orders plus arrival stamps (FIFO rank)
//! - **BTreeMap**: per-side price levels, kept in best-first order
//!
//! ## Price Ordering
//!
//! - **Bids**: sorted high-to-low (best bid = highest price)
//! - **Offers**: sorted low-to-high (best offer = lowest price)
//!
//! Levels are distinct prices under exact floating-point equality and are
//! updated on every add, remove and amendment, so level queries never rescan
//! the orders.
//!
//! ## Time Priority
//!
//! [`OrderBook::orders_for_side`] ranks purely by arrival. A size amendment
//! through [`OrderBook::update_order`] keeps the original arrival; cancelling
//! and re-adding gets a new one.
//!
//! ## Example
//!
//! ```
//! use limit_order_book::{Order, OrderBook, Side};
//!
//! let mut book = OrderBook::new();
//!
//! book.add_order(Order::bid(1, 2.0, 1)).unwrap();
//! book.add_order(Order::bid(2, 4.0, 2)).unwrap();
//! book.add_order(Order::bid(7, 4.0, 10)).unwrap();
//!
//! assert_eq!(book.price_at_level(Side::Bid, 1), Ok(4.0));
//! assert_eq!(book.total_size_at_level(Side::Bid, 1), Ok(12));
//! assert_eq!(book.price_at_level('B', 2), Ok(2.0));
//! ```

use std::cmp::Reverse;
use std::collections::BTreeMap;

use rust_decimal::Decimal;
use sha2::{Digest, Sha256};
use tracing::{debug, trace};

use crate::error::{BookError, Result};
use crate::orderbook::{
    ArrivalRetention, BookConfig, Clock, MonotonicClock, OrderStore, PriceLevel,
};
use crate::types::price::notional;
use crate::types::{Order, OrderId, PriceKey, Side};

/// Two-sided limit order book
#[derive(Debug)]
pub struct OrderBook<C = MonotonicClock> {
    /// Active orders and their arrival stamps
    store: OrderStore<C>,

    /// Bid price levels (sorted high to low)
    /// Key: Reverse(price) for descending order
    bids: BTreeMap<Reverse<PriceKey>, PriceLevel>,

    /// Offer price levels (sorted low to high)
    offers: BTreeMap<PriceKey, PriceLevel>,

    config: BookConfig,
}

impl Default for OrderBook<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderBook<MonotonicClock> {
    /// Create a new empty book with the default configuration
    pub fn new() -> Self {
        Self::with_config(BookConfig::default())
    }

    /// Create a book with pre-allocated capacity
    ///
    /// ```
    /// use limit_order_book::OrderBook;
    ///
    /// let book = OrderBook::with_capacity(100_000);
    /// assert!(book.capacity() >= 100_000);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(BookConfig::default().with_capacity(capacity))
    }

    /// Create a book from a configuration, stamping arrivals on a logical clock
    pub fn with_config(config: BookConfig) -> Self {
        Self::with_clock(config, MonotonicClock::new())
    }
}

impl<C: Clock> OrderBook<C> {
    /// Create a book stamping arrivals with the given clock
    pub fn with_clock(config: BookConfig, clock: C) -> Self {
        Self {
            store: OrderStore::with_clock(config.capacity, clock),
            bids: BTreeMap::new(),
            offers: BTreeMap::new(),
            config,
        }
    }

    // ========================================================================
    // Order Lifecycle
    // ========================================================================

    /// Add an order to the book
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The order is now active
    /// * `Ok(false)` - An order with the same id is already active; nothing changed
    ///
    /// # Errors
    ///
    /// `BookError::MissingOrder` if `order` is `None`.
    pub fn add_order<O>(&mut self, order: O) -> Result<bool>
    where
        O: Into<Option<Order>>,
    {
        let order = order.into().ok_or(BookError::MissingOrder)?;

        if self.store.contains(order.id) {
            trace!(order_id = order.id, "add rejected, id already active");
            return Ok(false);
        }

        let added = self.store.insert(order, true);
        if added {
            self.attach(&order);
            debug!(
                order_id = order.id,
                side = %order.side,
                price = order.price,
                size = order.size,
                "order added"
            );
        }
        Ok(added)
    }

    /// Cancel an order
    ///
    /// Under [`ArrivalRetention::Retain`] the order's arrival stamp stays
    /// behind; under [`ArrivalRetention::PurgeOnCancel`] it goes too.
    ///
    /// # Returns
    ///
    /// Whether an order was removed
    pub fn remove_order(&mut self, id: OrderId) -> bool {
        let Some(order) = self.store.remove(id) else {
            trace!(order_id = id, "remove ignored, id not active");
            return false;
        };

        self.detach(&order);
        if self.config.retention == ArrivalRetention::PurgeOnCancel {
            self.store.forget_arrival(id);
        }
        debug!(order_id = id, side = %order.side, price = order.price, "order removed");
        true
    }

    /// Amend the size of an active order
    ///
    /// The order is replaced by a copy with the same id, price and side and
    /// the new size. Its arrival stamp is kept, so it does not lose its place
    /// to later orders.
    ///
    /// # Returns
    ///
    /// `false` if no order with this id is active
    pub fn update_order(&mut self, id: OrderId, size: u64) -> bool {
        let Some(existing) = self.store.remove(id) else {
            trace!(order_id = id, "update ignored, id not active");
            return false;
        };

        let amended = existing.with_size(size);
        let replaced = self.store.insert(amended, false);
        if replaced {
            if let Some(level) = self.level_mut(&existing) {
                level.resize(existing.size, size);
            }
            debug!(order_id = id, old_size = existing.size, new_size = size, "order amended");
        }
        replaced
    }

    /// Remove every order and forget every arrival
    pub fn reset(&mut self) {
        self.store.clear();
        self.bids.clear();
        self.offers.clear();
        debug!("book reset");
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Get a copy of the active order with this id
    #[inline]
    pub fn find_by_id(&self, id: OrderId) -> Option<Order> {
        self.store.get(id).copied()
    }

    /// Check if an order with the same id is active
    ///
    /// Only the id is compared.
    #[inline]
    pub fn contains(&self, order: &Order) -> bool {
        self.store.contains(order.id)
    }

    /// Check if an order with this id is active
    #[inline]
    pub fn contains_id(&self, id: OrderId) -> bool {
        self.store.contains(id)
    }

    /// Active orders on one side, oldest arrival first
    ///
    /// Price plays no part in the ordering.
    pub fn orders_for_side<S>(&self, side: S) -> Result<Vec<Order>>
    where
        S: TryInto<Side>,
        BookError: From<S::Error>,
    {
        let side = side.try_into()?;
        let mut ranked = self.store.ordered_by_arrival()?;
        ranked.retain(|order| order.is_on(side));
        Ok(ranked)
    }

    // ========================================================================
    // Level Queries
    // ========================================================================

    /// Price of the `level`-th best distinct price on a side (1 = best)
    ///
    /// # Returns
    ///
    /// `0.0` if the side has fewer than `level` distinct prices
    ///
    /// # Errors
    ///
    /// `InvalidSide` for an unknown side code, `InvalidLevel` for level 0.
    pub fn price_at_level<S>(&self, side: S, level: usize) -> Result<f64>
    where
        S: TryInto<Side>,
        BookError: From<S::Error>,
    {
        let (side, level) = validate(side, level)?;
        Ok(self.resolve_price(side, level))
    }

    /// Total size resting at the `level`-th best price on a side
    ///
    /// Sums the orders whose price equals the resolved level price exactly.
    /// A missing level resolves to `0.0`, so only orders priced at exactly
    /// zero would count; a NaN level never equals anything and sums to zero.
    ///
    /// # Errors
    ///
    /// `InvalidSide` for an unknown side code, `InvalidLevel` for level 0.
    pub fn total_size_at_level<S>(&self, side: S, level: usize) -> Result<u64>
    where
        S: TryInto<Side>,
        BookError: From<S::Error>,
    {
        let (side, level) = validate(side, level)?;
        Ok(self.resolve_total_size(side, level))
    }

    /// Notional (`price * total size`) at the `level`-th best price
    ///
    /// Computed in decimal. Zero when the level is empty or its price has no
    /// decimal representation.
    pub fn notional_at_level<S>(&self, side: S, level: usize) -> Result<Decimal>
    where
        S: TryInto<Side>,
        BookError: From<S::Error>,
    {
        let (side, level) = validate(side, level)?;
        let price = self.resolve_price(side, level);
        let size = self.resolve_total_size(side, level);
        Ok(notional(price, size).unwrap_or(Decimal::ZERO))
    }

    /// Snapshot of up to `max_levels` levels on a side, best first
    pub fn depth<S>(&self, side: S, max_levels: usize) -> Result<Vec<PriceLevel>>
    where
        S: TryInto<Side>,
        BookError: From<S::Error>,
    {
        let side = side.try_into()?;
        let levels = match side {
            Side::Bid => self.bids.values().take(max_levels).copied().collect(),
            Side::Offer => self.offers.values().take(max_levels).copied().collect(),
        };
        Ok(levels)
    }

    // ========================================================================
    // Best Bid/Offer
    // ========================================================================

    /// Get the best bid price (highest buy price)
    #[inline]
    pub fn best_bid(&self) -> Option<f64> {
        self.bids.values().next().map(|level| level.price)
    }

    /// Get the best offer price (lowest sell price)
    #[inline]
    pub fn best_offer(&self) -> Option<f64> {
        self.offers.values().next().map(|level| level.price)
    }

    /// Get the spread (best_offer - best_bid)
    ///
    /// # Returns
    ///
    /// The spread, or None if either side is empty or the book is crossed
    pub fn spread(&self) -> Option<f64> {
        match (self.best_bid(), self.best_offer()) {
            (Some(bid), Some(offer)) if offer >= bid => Some(offer - bid),
            _ => None,
        }
    }

    // ========================================================================
    // Capacity and Size
    // ========================================================================

    /// Get the current capacity (pre-allocated slots)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Get the total number of active orders
    #[inline]
    pub fn order_count(&self) -> usize {
        self.store.len()
    }

    /// Check if the book is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Get the number of active bids
    pub fn bid_count(&self) -> usize {
        self.bids.values().map(|level| level.order_count).sum()
    }

    /// Get the number of active offers
    pub fn offer_count(&self) -> usize {
        self.offers.values().map(|level| level.order_count).sum()
    }

    /// Get the number of bid price levels
    #[inline]
    pub fn bid_levels(&self) -> usize {
        self.bids.len()
    }

    /// Get the number of offer price levels
    #[inline]
    pub fn offer_levels(&self) -> usize {
        self.offers.len()
    }

    /// Arrival stamps left behind by cancelled orders
    #[inline]
    pub fn stale_arrivals(&self) -> usize {
        self.store.stale_arrivals()
    }

    /// The book's configuration
    #[inline]
    pub fn config(&self) -> &BookConfig {
        &self.config
    }

    /// Read access to the underlying store
    #[inline]
    pub fn store(&self) -> &OrderStore<C> {
        &self.store
    }

    // ========================================================================
    // State Root
    // ========================================================================

    /// SHA-256 over the active orders in arrival order
    ///
    /// Two books that went through the same operations on the same clock
    /// produce the same root.
    pub fn state_root(&self) -> Result<[u8; 32]> {
        let mut hasher = Sha256::new();
        for order in self.store.ordered_by_arrival()? {
            hasher.update(order.id.to_le_bytes());
            hasher.update(order.price.to_bits().to_le_bytes());
            hasher.update([order.side.as_char() as u8]);
            hasher.update(order.size.to_le_bytes());
        }
        Ok(hasher.finalize().into())
    }

    /// [`OrderBook::state_root`] as lowercase hex
    pub fn state_root_hex(&self) -> Result<String> {
        self.state_root().map(hex::encode)
    }

    // ========================================================================
    // Level Maintenance
    // ========================================================================

    fn attach(&mut self, order: &Order) {
        let key = PriceKey::new(order.price);
        let level = match order.side {
            Side::Bid => self
                .bids
                .entry(Reverse(key))
                .or_insert_with(|| PriceLevel::new(key.price())),
            Side::Offer => self
                .offers
                .entry(key)
                .or_insert_with(|| PriceLevel::new(key.price())),
        };
        level.add(order.size);
    }

    fn detach(&mut self, order: &Order) {
        let key = PriceKey::new(order.price);
        match order.side {
            Side::Bid => {
                if let Some(level) = self.bids.get_mut(&Reverse(key)) {
                    level.remove(order.size);

                    // Remove empty price levels
                    if level.is_empty() {
                        self.bids.remove(&Reverse(key));
                    }
                }
            }
            Side::Offer => {
                if let Some(level) = self.offers.get_mut(&key) {
                    level.remove(order.size);

                    if level.is_empty() {
                        self.offers.remove(&key);
                    }
                }
            }
        }
    }

    fn level_mut(&mut self, order: &Order) -> Option<&mut PriceLevel> {
        let key = PriceKey::new(order.price);
        match order.side {
            Side::Bid => self.bids.get_mut(&Reverse(key)),
            Side::Offer => self.offers.get_mut(&key),
        }
    }

    fn nth_level(&self, side: Side, level: usize) -> Option<&PriceLevel> {
        match side {
            Side::Bid => self.bids.values().nth(level - 1),
            Side::Offer => self.offers.values().nth(level - 1),
        }
    }

    fn resolve_price(&self, side: Side, level: usize) -> f64 {
        self.nth_level(side, level).map_or(0.0, |found| found.price)
    }

    fn resolve_total_size(&self, side: Side, level: usize) -> u64 {
        let key = PriceKey::new(self.resolve_price(side, level));
        if key.is_nan() {
            return 0;
        }

        let found = match side {
            Side::Bid => self.bids.get(&Reverse(key)),
            Side::Offer => self.offers.get(&key),
        };
        found.map_or(0, |found| found.total_size)
    }
}

/// Check a side code and a 1-indexed level, side first
fn validate<S>(side: S, level: usize) -> Result<(Side, usize)>
where
    S: TryInto<Side>,
    BookError: From<S::Error>,
{
    let side = side.try_into()?;
    if level < 1 {
        return Err(BookError::InvalidLevel(level));
    }
    Ok((side, level))
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orderbook::ManualClock;

    fn ids(orders: &[Order]) -> Vec<OrderId> {
        orders.iter().map(|order| order.id).collect()
    }

    fn bid_book() -> OrderBook {
        let mut book = OrderBook::with_capacity(16);
        for order in [
            Order::bid(1, 2.0, 1),
            Order::bid(2, 4.0, 2),
            Order::bid(3, 3.0, 3),
            Order::bid(7, 4.0, 10),
        ] {
            assert_eq!(book.add_order(order), Ok(true));
        }
        book
    }

    fn offer_book() -> OrderBook {
        let mut book = OrderBook::with_capacity(16);
        for order in [
            Order::offer(4, 7.0, 1),
            Order::offer(5, 5.0, 2),
            Order::offer(8, 5.0, 12),
            Order::offer(6, 6.0, 3),
        ] {
            assert_eq!(book.add_order(order), Ok(true));
        }
        book
    }

    #[test]
    fn test_book_new() {
        let book = OrderBook::new();

        assert!(book.is_empty());
        assert_eq!(book.order_count(), 0);
        assert_eq!(book.bid_levels(), 0);
        assert_eq!(book.offer_levels(), 0);
        assert!(book.best_bid().is_none());
        assert!(book.best_offer().is_none());
        assert_eq!(book.config(), &BookConfig::default());
    }

    #[test]
    fn test_add_absent_order_fails() {
        let mut book = OrderBook::new();
        assert_eq!(book.add_order(None::<Order>), Err(BookError::MissingOrder));
        assert!(book.is_empty());
    }

    #[test]
    fn test_add_duplicate_id_is_noop() {
        let mut book = bid_book();

        assert_eq!(book.add_order(Order::bid(1, 12.0, 13)), Ok(false));
        assert_eq!(book.find_by_id(1), Some(Order::bid(1, 2.0, 1)));
        assert_eq!(book.order_count(), 4);
        assert_eq!(book.best_bid(), Some(4.0));
    }

    #[test]
    fn test_bid_levels_rank_descending() {
        let book = bid_book();

        assert_eq!(book.price_at_level(Side::Bid, 1), Ok(4.0));
        assert_eq!(book.price_at_level(Side::Bid, 2), Ok(3.0));
        assert_eq!(book.price_at_level(Side::Bid, 3), Ok(2.0));
        assert_eq!(book.price_at_level(Side::Bid, 4), Ok(0.0));
        assert_eq!(book.total_size_at_level(Side::Bid, 1), Ok(12));
        assert_eq!(book.total_size_at_level(Side::Bid, 2), Ok(3));
    }

    #[test]
    fn test_offer_levels_rank_ascending() {
        let book = offer_book();

        assert_eq!(book.price_at_level(Side::Offer, 1), Ok(5.0));
        assert_eq!(book.price_at_level(Side::Offer, 2), Ok(6.0));
        assert_eq!(book.price_at_level(Side::Offer, 3), Ok(7.0));
        assert_eq!(book.total_size_at_level(Side::Offer, 1), Ok(14));
    }

    #[test]
    fn test_sides_are_independent() {
        let book = bid_book();

        assert_eq!(book.price_at_level(Side::Offer, 1), Ok(0.0));
        assert_eq!(book.total_size_at_level(Side::Offer, 1), Ok(0));
    }

    #[test]
    fn test_validation_order_side_then_level() {
        let book = OrderBook::new();

        assert_eq!(book.price_at_level('X', 0), Err(BookError::InvalidSide('X')));
        assert_eq!(book.price_at_level('B', 0), Err(BookError::InvalidLevel(0)));
        assert_eq!(book.total_size_at_level('O', 0), Err(BookError::InvalidLevel(0)));
        assert_eq!(book.orders_for_side('X'), Err(BookError::InvalidSide('X')));
        assert_eq!(book.depth('Z', 3), Err(BookError::InvalidSide('Z')));
    }

    #[test]
    fn test_missing_level_counts_zero_priced_orders() {
        let mut book = OrderBook::new();
        book.add_order(Order::bid(1, 0.0, 5)).unwrap();

        // Level 2 does not exist, resolves to 0.0, which level 1 holds
        assert_eq!(book.price_at_level(Side::Bid, 2), Ok(0.0));
        assert_eq!(book.total_size_at_level(Side::Bid, 2), Ok(5));
    }

    #[test]
    fn test_signed_zero_shares_level() {
        let mut book = OrderBook::new();
        book.add_order(Order::offer(1, 0.0, 5)).unwrap();
        book.add_order(Order::offer(2, -0.0, 6)).unwrap();

        assert_eq!(book.offer_levels(), 1);
        assert_eq!(book.total_size_at_level(Side::Offer, 1), Ok(11));
    }

    #[test]
    fn test_nan_level_ranks_best_bid_with_zero_size() {
        let mut book = OrderBook::new();
        book.add_order(Order::bid(1, 3.0, 1)).unwrap();
        book.add_order(Order::bid(2, f64::NAN, 4)).unwrap();

        assert!(book.price_at_level(Side::Bid, 1).unwrap().is_nan());
        assert_eq!(book.total_size_at_level(Side::Bid, 1), Ok(0));
        assert_eq!(book.price_at_level(Side::Bid, 2), Ok(3.0));
        assert_eq!(book.total_size_at_level(Side::Bid, 2), Ok(1));
    }

    #[test]
    fn test_remove_order() {
        let mut book = bid_book();

        assert!(book.remove_order(2));
        assert!(!book.contains_id(2));
        assert_eq!(book.total_size_at_level(Side::Bid, 1), Ok(10));

        assert!(book.remove_order(7));
        assert_eq!(book.price_at_level(Side::Bid, 1), Ok(3.0));
        assert_eq!(book.bid_levels(), 2);

        assert!(!book.remove_order(100));
    }

    #[test]
    fn test_update_order_changes_only_size() {
        let mut book = bid_book();

        assert!(book.update_order(2, 20));
        assert_eq!(book.find_by_id(2), Some(Order::bid(2, 4.0, 20)));
        assert_eq!(book.total_size_at_level(Side::Bid, 1), Ok(30));
        assert_eq!(book.order_count(), 4);

        assert!(!book.update_order(100, 13));
    }

    #[test]
    fn test_level_size_exact_after_overflowing_total() {
        let mut book = OrderBook::new();
        book.add_order(Order::bid(1, 1.0, u64::MAX)).unwrap();
        book.add_order(Order::bid(2, 1.0, 1)).unwrap();
        assert_eq!(book.total_size_at_level(Side::Bid, 1), Ok(u64::MAX));

        assert!(book.remove_order(2));
        assert_eq!(book.total_size_at_level(Side::Bid, 1), Ok(u64::MAX));

        book.add_order(Order::bid(3, 1.0, 5)).unwrap();
        assert!(book.update_order(1, 10));
        assert_eq!(book.total_size_at_level(Side::Bid, 1), Ok(15));
        assert_eq!(book.depth(Side::Bid, 1).unwrap()[0].total_size, 15);
    }

    #[test]
    fn test_update_order_keeps_time_priority() {
        let mut book = bid_book();
        book.update_order(1, 99);

        let ranked = book.orders_for_side(Side::Bid).unwrap();
        assert_eq!(ids(&ranked), vec![1, 2, 3, 7]);
        assert_eq!(ranked[0].size, 99);
    }

    #[test]
    fn test_cancel_and_readd_goes_to_back() {
        let mut book = bid_book();

        assert!(book.remove_order(1));
        assert_eq!(book.add_order(Order::bid(1, 2.0, 1)), Ok(true));

        assert_eq!(ids(&book.orders_for_side('B').unwrap()), vec![2, 3, 7, 1]);
    }

    #[test]
    fn test_orders_for_side_ignores_price() {
        let book = offer_book();
        assert_eq!(ids(&book.orders_for_side(Side::Offer).unwrap()), vec![4, 5, 8, 6]);
        assert!(book.orders_for_side(Side::Bid).unwrap().is_empty());
    }

    #[test]
    fn test_retain_policy_leaves_stale_arrival() {
        let mut book = bid_book();
        book.remove_order(3);

        assert_eq!(book.stale_arrivals(), 1);
        assert!(book.store().arrival_of(3).is_some());
    }

    #[test]
    fn test_purge_policy_drops_arrival_on_cancel_only() {
        let config = BookConfig::default().with_retention(ArrivalRetention::PurgeOnCancel);
        let mut book = OrderBook::with_config(config);
        book.add_order(Order::bid(1, 2.0, 1)).unwrap();
        book.add_order(Order::bid(2, 2.0, 1)).unwrap();

        book.update_order(1, 5);
        assert_eq!(ids(&book.orders_for_side(Side::Bid).unwrap()), vec![1, 2]);

        book.remove_order(1);
        assert_eq!(book.stale_arrivals(), 0);
        assert!(book.store().arrival_of(1).is_none());
    }

    #[test]
    fn test_best_and_spread() {
        let mut book = bid_book();
        assert!(book.spread().is_none());

        book.add_order(Order::offer(5, 5.0, 2)).unwrap();
        assert_eq!(book.best_bid(), Some(4.0));
        assert_eq!(book.best_offer(), Some(5.0));
        assert_eq!(book.spread(), Some(1.0));

        // Crossed
        book.add_order(Order::bid(9, 6.0, 1)).unwrap();
        assert!(book.spread().is_none());
    }

    #[test]
    fn test_counts() {
        let mut book = bid_book();
        book.add_order(Order::offer(5, 5.0, 2)).unwrap();

        assert_eq!(book.order_count(), 5);
        assert_eq!(book.bid_count(), 4);
        assert_eq!(book.offer_count(), 1);
        assert_eq!(book.bid_levels(), 3);
        assert_eq!(book.offer_levels(), 1);
    }

    #[test]
    fn test_depth_snapshot() {
        let book = offer_book();
        let depth = book.depth(Side::Offer, 2).unwrap();

        assert_eq!(depth.len(), 2);
        assert_eq!(depth[0].price, 5.0);
        assert_eq!(depth[0].total_size, 14);
        assert_eq!(depth[0].order_count, 2);
        assert_eq!(depth[1].price, 6.0);
        assert_eq!(book.depth(Side::Offer, 10).unwrap().len(), 3);
    }

    #[test]
    fn test_notional_at_level() {
        let book = bid_book();

        assert_eq!(book.notional_at_level(Side::Bid, 1), Ok(Decimal::from(48)));
        assert_eq!(book.notional_at_level(Side::Bid, 9), Ok(Decimal::ZERO));
        assert_eq!(book.notional_at_level(Side::Bid, 0), Err(BookError::InvalidLevel(0)));
    }

    #[test]
    fn test_reset() {
        let mut book = bid_book();
        book.remove_order(1);

        book.reset();

        assert!(book.is_empty());
        assert_eq!(book.bid_levels(), 0);
        assert_eq!(book.stale_arrivals(), 0);
        assert_eq!(book.price_at_level(Side::Bid, 1), Ok(0.0));
    }

    #[test]
    fn test_state_root_deterministic() {
        let first = bid_book();
        let second = bid_book();
        assert_eq!(first.state_root(), second.state_root());

        let mut third = bid_book();
        third.update_order(3, 4);
        assert_ne!(first.state_root(), third.state_root());

        assert_eq!(first.state_root_hex().unwrap().len(), 64);
    }

    #[test]
    fn test_state_root_tracks_arrival_order() {
        let mut reordered = OrderBook::new();
        for order in [
            Order::bid(2, 4.0, 2),
            Order::bid(1, 2.0, 1),
            Order::bid(3, 3.0, 3),
            Order::bid(7, 4.0, 10),
        ] {
            reordered.add_order(order).unwrap();
        }

        assert_ne!(reordered.state_root(), bid_book().state_root());
    }

    #[test]
    fn test_wall_clock_ties_keep_arrival_order() {
        let clock = ManualClock::new(1_703_577_600_000);
        let mut book = OrderBook::with_clock(BookConfig::default(), clock.clone());

        book.add_order(Order::offer(9, 5.0, 1)).unwrap();
        book.add_order(Order::offer(3, 5.0, 1)).unwrap();
        clock.advance(1);
        book.add_order(Order::offer(1, 5.0, 1)).unwrap();

        assert_eq!(ids(&book.orders_for_side(Side::Offer).unwrap()), vec![9, 3, 1]);
    }
}
