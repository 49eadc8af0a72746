//! Error types for the matching core
//!
//! Error taxonomy using thiserror. "No trade possible" is not an error and
//! never appears here.

use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};
use crate::order::Side;
use thiserror::Error;

/// Order book errors
///
/// Every variant is a broken caller precondition. They are propagated,
/// never retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    #[error("No {side} orders in book")]
    EmptyBook { side: Side },

    #[error("No {side} orders queued at price {price}")]
    EmptyLevel { side: Side, price: Price },

    #[error("Order error: {0}")]
    Order(#[from] OrderError),
}

/// Order-specific errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("Invalid quantity for order {order_id}: must be greater than zero")]
    InvalidQuantity { order_id: OrderId },

    #[error("Fill of {requested} exceeds remaining {remaining} on order {order_id}")]
    Overfill {
        order_id: OrderId,
        requested: Quantity,
        remaining: Quantity,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_book_display() {
        let err = BookError::EmptyBook { side: Side::BUY };
        assert_eq!(err.to_string(), "No BUY orders in book");
    }

    #[test]
    fn test_empty_level_display() {
        let err = BookError::EmptyLevel { side: Side::SELL, price: Price::new(100) };
        assert_eq!(err.to_string(), "No SELL orders queued at price 100");
    }

    #[test]
    fn test_order_error_display() {
        let err = OrderError::Overfill {
            order_id: OrderId::new(4),
            requested: Quantity::new(6),
            remaining: Quantity::new(5),
        };
        assert_eq!(err.to_string(), "Fill of 6 exceeds remaining 5 on order 4");
    }

    #[test]
    fn test_book_error_from_order_error() {
        let order_err = OrderError::InvalidQuantity { order_id: OrderId::new(1) };
        let book_err: BookError = order_err.into();
        assert!(matches!(book_err, BookError::Order(_)));
    }
}
