//! Order storage with arrival-time bookkeeping.
//!
//! ## Design
//!
//! [`OrderStore`] owns two records behind one interface:
//!
//! - **Orders**: the active set, held in a slab with an id index
//! - **Arrivals**: the FIFO stamp of each id, kept in its own map
//!
//! The two are deliberately not coupled. Removing an order leaves its arrival
//! stamp in place, and re-inserting without recording keeps whatever stamp the
//! id already has. That is what lets a quantity amendment keep its place in
//! the queue: remove, then re-insert with `record_arrival = false`.
//!
//! ## Memory Model
//!
//! Per slab docs (https://docs.rs/slab/0.4.11):
//! - `Slab::with_capacity(n)` pre-allocates n slots
//! - Keys are reused after removal
//! - O(1) insert, remove, and lookup
//!
//! Slab order is therefore not arrival order. FIFO rank comes only from the
//! arrival map.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use slab::Slab;
use tracing::trace;

use crate::error::{BookError, Result};
use crate::orderbook::{Clock, MonotonicClock};
use crate::types::{Order, OrderId};

/// Arrival stamp of an order
///
/// Ordered by clock reading, then by the store's arrival sequence, so two
/// orders stamped in the same clock tick still rank in the order they came.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Arrival {
    /// Clock reading when the arrival was recorded
    pub timestamp: u64,
    /// Store-wide arrival counter
    pub sequence: u64,
}

/// Active orders plus their arrival stamps
#[derive(Debug)]
pub struct OrderStore<C = MonotonicClock> {
    /// Active order storage
    orders: Slab<Order>,

    /// Order ID to slab key mapping
    index: HashMap<OrderId, usize>,

    /// Order ID to arrival stamp; may outlive the order
    arrivals: HashMap<OrderId, Arrival>,

    /// Next arrival sequence number
    next_sequence: u64,

    clock: C,
}

impl Default for OrderStore<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderStore<MonotonicClock> {
    /// Create an empty store on a logical clock
    pub fn new() -> Self {
        Self::with_clock(0, MonotonicClock::new())
    }

    /// Create a store with pre-allocated capacity on a logical clock
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_clock(capacity, MonotonicClock::new())
    }
}

impl<C: Clock> OrderStore<C> {
    /// Create a store with pre-allocated capacity and a given clock
    pub fn with_clock(capacity: usize, clock: C) -> Self {
        Self {
            orders: Slab::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            arrivals: HashMap::with_capacity(capacity),
            next_sequence: 0,
            clock,
        }
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Append an order
    ///
    /// With `record_arrival`, a fresh stamp is written for `order.id` first,
    /// replacing any earlier one. Without it the arrival map is not touched.
    ///
    /// # Returns
    ///
    /// `false` if an order with the same id is already stored. Any stamp
    /// written by this call is then rolled back to its previous value.
    pub fn insert(&mut self, order: Order, record_arrival: bool) -> bool {
        let previous = if record_arrival {
            let stamp = self.next_arrival();
            Some(self.arrivals.insert(order.id, stamp))
        } else {
            None
        };

        match self.index.entry(order.id) {
            Entry::Vacant(slot) => {
                slot.insert(self.orders.insert(order));
                true
            }
            Entry::Occupied(_) => {
                match previous {
                    Some(Some(stamp)) => {
                        self.arrivals.insert(order.id, stamp);
                    }
                    Some(None) => {
                        self.arrivals.remove(&order.id);
                    }
                    None => {}
                }
                trace!(order_id = order.id, "insert rejected, id already stored");
                false
            }
        }
    }

    /// Remove the order with the given id
    ///
    /// The arrival stamp is left in place.
    pub fn remove(&mut self, id: OrderId) -> Option<Order> {
        let key = self.index.remove(&id)?;
        Some(self.orders.remove(key))
    }

    /// Remove every order matching `predicate`
    ///
    /// Arrival stamps are left in place. An empty result means nothing
    /// matched.
    pub fn remove_where<F>(&mut self, mut predicate: F) -> Vec<Order>
    where
        F: FnMut(&Order) -> bool,
    {
        let ids: Vec<OrderId> = self
            .orders
            .iter()
            .filter(|(_, order)| predicate(order))
            .map(|(_, order)| order.id)
            .collect();

        ids.into_iter().filter_map(|id| self.remove(id)).collect()
    }

    /// Drop the arrival stamp of an id
    pub fn forget_arrival(&mut self, id: OrderId) -> Option<Arrival> {
        self.arrivals.remove(&id)
    }

    /// Remove all orders and all arrival stamps
    pub fn clear(&mut self) {
        self.orders.clear();
        self.index.clear();
        self.arrivals.clear();
        self.next_sequence = 0;
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Check if an order with this id is stored
    #[inline]
    pub fn contains(&self, id: OrderId) -> bool {
        self.index.contains_key(&id)
    }

    /// Get the stored order with this id
    #[inline]
    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.index.get(&id).map(|&key| &self.orders[key])
    }

    /// Number of stored orders
    #[inline]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Check if no orders are stored
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Pre-allocated order slots
    #[inline]
    pub fn capacity(&self) -> usize {
        self.orders.capacity()
    }

    /// Iterate stored orders in storage order (not arrival order)
    pub fn iter(&self) -> impl Iterator<Item = &Order> + '_ {
        self.orders.iter().map(|(_, order)| order)
    }

    /// Arrival stamp recorded for an id, active or not
    #[inline]
    pub fn arrival_of(&self, id: OrderId) -> Option<Arrival> {
        self.arrivals.get(&id).copied()
    }

    /// Number of arrival stamps whose order is no longer stored
    pub fn stale_arrivals(&self) -> usize {
        self.arrivals
            .keys()
            .filter(|&id| !self.index.contains_key(id))
            .count()
    }

    /// All stored orders, oldest arrival first
    ///
    /// # Errors
    ///
    /// `BookError::MissingArrival` if a stored order was never stamped.
    pub fn ordered_by_arrival(&self) -> Result<Vec<Order>> {
        let mut ranked = self
            .iter()
            .map(|order| {
                self.arrivals
                    .get(&order.id)
                    .map(|&arrival| (arrival, *order))
                    .ok_or(BookError::MissingArrival(order.id))
            })
            .collect::<Result<Vec<_>>>()?;

        // Sequence numbers make every stamp unique
        ranked.sort_unstable_by_key(|&(arrival, _)| arrival);
        Ok(ranked.into_iter().map(|(_, order)| order).collect())
    }

    fn next_arrival(&mut self) -> Arrival {
        let arrival = Arrival {
            timestamp: self.clock.now(),
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;
        arrival
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
