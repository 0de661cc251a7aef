//! Price keys and notional helpers.
//!
//! ## Exact Equality
//!
//! Levels are distinct prices compared with exact floating-point equality,
//! no epsilon. `f64` is not `Ord`, so level maps are keyed by [`PriceKey`],
//! a total-ordered wrapper whose equality agrees with `==` on every non-NaN
//! price:
//!
//! - `-0.0` is folded into `0.0` (they compare equal with `==`)
//! - every NaN payload is folded into one canonical NaN, which sorts above
//!   `+inf`
//!
//! ## Notional
//!
//! `price * size` is computed with `rust_decimal` so that summing a level's
//! notional does not accumulate binary rounding error.
//!
//! ```
//! use limit_order_book::types::price::{notional, PriceKey};
//!
//! assert_eq!(PriceKey::new(-0.0), PriceKey::new(0.0));
//! assert!(PriceKey::new(4.0) > PriceKey::new(3.0));
//! assert_eq!(notional(2.5, 4), Some(rust_decimal::Decimal::from(10)));
//! ```

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

// ============================================================================
// PriceKey
// ============================================================================

/// Total-ordered, exactly-compared price used as a level map key.
#[derive(Debug, Clone, Copy)]
pub struct PriceKey(f64);

impl PriceKey {
    /// Build the canonical key for a price
    #[inline]
    pub fn new(price: f64) -> Self {
        if price.is_nan() {
            Self(f64::NAN)
        } else if price == 0.0 {
            Self(0.0)
        } else {
            Self(price)
        }
    }

    /// The canonical price value
    #[inline]
    pub fn price(self) -> f64 {
        self.0
    }

    /// Check if the key holds the canonical NaN
    #[inline]
    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }
}

impl From<f64> for PriceKey {
    fn from(price: f64) -> Self {
        Self::new(price)
    }
}

impl PartialEq for PriceKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PriceKey {}

impl PartialOrd for PriceKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PriceKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for PriceKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

// ============================================================================
// Conversion Functions
// ============================================================================

/// Convert a price to a Decimal
///
/// # Returns
///
/// * `None` - If the price is NaN, infinite or out of Decimal range
pub fn price_to_decimal(price: f64) -> Option<Decimal> {
    Decimal::from_f64(price)
}

/// Notional value of `size` units at `price`
///
/// # Returns
///
/// * `Some(Decimal)` - `price * size`
/// * `None` - If the price is not representable or the product overflows
pub fn notional(price: f64, size: u64) -> Option<Decimal> {
    price_to_decimal(price)?.checked_mul(Decimal::from(size))
}

// ============================================================================
// Unit Tests
// ============================================================================
