//! Order types for the limit order book.
//!
//! ## Value Semantics
//!
//! An [`Order`] is a small `Copy` record. The book never mutates a resting
//! order in place: a quantity amendment replaces the record wholesale with
//! [`Order::with_size`], and every query hands back copies.
//!
//! ## Side Encoding
//!
//! Sides convert from a single character so that loosely-typed input can be
//! validated at the boundary:
//! - `'B'` = [`Side::Bid`]
//! - `'O'` = [`Side::Offer`]

use std::fmt;

use crate::error::BookError;

/// Unique identifier of an active order.
pub type OrderId = u64;

// ============================================================================
// Side enum
// ============================================================================

/// Order side: Bid or Offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Buy order - best price is the highest
    Bid,
    /// Sell order - best price is the lowest
    Offer,
}

impl Side {
    /// Character code for bids
    pub const BID_CHAR: char = 'B';

    /// Character code for offers
    pub const OFFER_CHAR: char = 'O';

    /// Convert to the character code
    pub fn as_char(self) -> char {
        match self {
            Side::Bid => Self::BID_CHAR,
            Side::Offer => Self::OFFER_CHAR,
        }
    }

    /// Convert from a character code
    pub fn from_char(value: char) -> Option<Self> {
        match value {
            Self::BID_CHAR => Some(Side::Bid),
            Self::OFFER_CHAR => Some(Side::Offer),
            _ => None,
        }
    }
}

impl TryFrom<char> for Side {
    type Error = BookError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Side::from_char(value).ok_or(BookError::InvalidSide(value))
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Bid => f.write_str("bid"),
            Side::Offer => f.write_str("offer"),
        }
    }
}

// ============================================================================
// Order struct
// ============================================================================

/// A resting limit order.
///
/// Identity is the `id` alone: the book treats two records with the same id
/// as the same order, whatever their other fields say.
///
/// ## Example
///
/// ```
/// use limit_order_book::types::{Order, Side};
///
/// let order = Order::new(1, 101.5, Side::Bid, 10);
/// let amended = order.with_size(4);
///
/// assert_eq!(amended.id, order.id);
/// assert_eq!(amended.price, order.price);
/// assert_eq!(amended.size, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Order {
    /// Unique order identifier (unique while active)
    pub id: OrderId,

    /// Limit price; expected positive, not validated
    pub price: f64,

    /// Side of the book the order rests on
    pub side: Side,

    /// Outstanding quantity
    pub size: u64,
}

impl Order {
    /// Create a new order
    pub fn new(id: OrderId, price: f64, side: Side, size: u64) -> Self {
        Self { id, price, side, size }
    }

    /// Create a bid
    pub fn bid(id: OrderId, price: f64, size: u64) -> Self {
        Self::new(id, price, Side::Bid, size)
    }

    /// Create an offer
    pub fn offer(id: OrderId, price: f64, size: u64) -> Self {
        Self::new(id, price, Side::Offer, size)
    }

    /// Copy of this order carrying a different size
    #[must_use]
    pub fn with_size(&self, size: u64) -> Self {
        Self { size, ..*self }
    }

    /// Check if the order rests on the given side
    #[inline]
    pub fn is_on(&self, side: Side) -> bool {
        self.side == side
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} {}@{}", self.id, self.side, self.size, self.price)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
