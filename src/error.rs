//! Error types for the order book.
//!
//! Only malformed input is an error. "Nothing there" outcomes (unknown id,
//! too few price levels) are ordinary `false` / `None` / zero results.

use std::convert::Infallible;

use thiserror::Error;

use crate::types::OrderId;

/// Order book error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// An absent order was passed to `add_order`
    #[error("cannot add an absent order")]
    MissingOrder,

    /// Side code is neither bid nor offer
    #[error("invalid side: {0:?}")]
    InvalidSide(char),

    /// Price levels are 1-indexed
    #[error("invalid level: {0}")]
    InvalidLevel(usize),

    /// An active order has no arrival time to rank it by
    #[error("no arrival time recorded for order {0}")]
    MissingArrival(OrderId),
}

impl BookError {
    /// Check if the error was caused by caller input
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            BookError::MissingOrder | BookError::InvalidSide(_) | BookError::InvalidLevel(_)
        )
    }
}

impl From<Infallible> for BookError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Result alias for order book operations
pub type Result<T> = std::result::Result<T, BookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(BookError::MissingOrder.to_string(), "cannot add an absent order");
        assert_eq!(BookError::InvalidSide('X').to_string(), "invalid side: 'X'");
        assert_eq!(BookError::InvalidLevel(0).to_string(), "invalid level: 0");
        assert_eq!(
            BookError::MissingArrival(9).to_string(),
            "no arrival time recorded for order 9"
        );
    }

    #[test]
    fn test_invalid_input_classification() {
        assert!(BookError::MissingOrder.is_invalid_input());
        assert!(BookError::InvalidSide('X').is_invalid_input());
        assert!(BookError::InvalidLevel(0).is_invalid_input());
        assert!(!BookError::MissingArrival(1).is_invalid_input());
    }
}
