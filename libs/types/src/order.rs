//! Resting order types

use crate::errors::OrderError;
use crate::ids::OrderId;
use crate::numeric::Quantity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order (bid)
    BUY,
    /// Sell order (ask)
    SELL,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::BUY => f.write_str("BUY"),
            Side::SELL => f.write_str("SELL"),
        }
    }
}

/// A single resting interest
///
/// Identity and side are fixed at construction. Only `quantity` changes,
/// and only downward as fills are applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    order_id: OrderId,
    side: Side,
    quantity: Quantity,
}

impl Order {
    /// Create a new order, rejecting zero quantity
    pub fn new(order_id: OrderId, side: Side, quantity: Quantity) -> Result<Self, OrderError> {
        if quantity.is_zero() {
            return Err(OrderError::InvalidQuantity { order_id });
        }

        Ok(Self {
            order_id,
            side,
            quantity,
        })
    }

    /// Convenience constructor for a buy order
    pub fn buy(order_id: i64, quantity: u64) -> Result<Self, OrderError> {
        Self::new(OrderId::new(order_id), Side::BUY, Quantity::new(quantity))
    }

    /// Convenience constructor for a sell order
    pub fn sell(order_id: i64, quantity: u64) -> Result<Self, OrderError> {
        Self::new(OrderId::new(order_id), Side::SELL, Quantity::new(quantity))
    }

    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Remaining (unexecuted) quantity
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Check if nothing remains to execute
    pub fn is_filled(&self) -> bool {
        self.quantity.is_zero()
    }

    /// Apply an execution of `fill_quantity`, returning the new remaining quantity
    ///
    /// Leaves the order untouched if the fill would exceed what remains.
    pub fn fill(&mut self, fill_quantity: Quantity) -> Result<Quantity, OrderError> {
        let remaining = self
            .quantity
            .checked_sub(fill_quantity)
            .ok_or(OrderError::Overfill {
                order_id: self.order_id,
                requested: fill_quantity,
                remaining: self.quantity,
            })?;

        self.quantity = remaining;
        Ok(remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_creation() {
        let order = Order::buy(1, 10).unwrap();

        assert_eq!(order.order_id(), OrderId::new(1));
        assert_eq!(order.side(), Side::BUY);
        assert_eq!(order.quantity(), Quantity::new(10));
        assert!(!order.is_filled());
    }

    #[test]
    fn test_order_zero_quantity_rejected() {
        let err = Order::sell(9, 0).unwrap_err();
        assert_eq!(err, OrderError::InvalidQuantity { order_id: OrderId::new(9) });
    }

    #[test]
    fn test_order_fill() {
        let mut order = Order::sell(2, 10).unwrap();

        // Partial fill
        assert_eq!(order.fill(Quantity::new(3)).unwrap(), Quantity::new(7));
        assert!(!order.is_filled());

        // Complete fill
        assert_eq!(order.fill(Quantity::new(7)).unwrap(), Quantity::zero());
        assert!(order.is_filled());
    }

    #[test]
    fn test_order_overfill_rejected() {
        let mut order = Order::buy(3, 5).unwrap();

        let err = order.fill(Quantity::new(6)).unwrap_err();
        assert!(matches!(err, OrderError::Overfill { .. }));
        // Quantity is untouched on failure
        assert_eq!(order.quantity(), Quantity::new(5));
    }

    #[test]
    fn test_order_serialization() {
        let order = Order::sell(11, 4).unwrap();

        let json = serde_json::to_string(&order).unwrap();
        assert!(json.contains("\"SELL\""));

        let deserialized: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(order, deserialized);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Fills never take an order below zero and never partially apply.
        #[test]
        fn prop_fill_conserves_quantity(
            initial in 1u64..1_000,
            fills in prop::collection::vec(0u64..300, 0..20),
        ) {
            let mut order = Order::buy(1, initial).unwrap();
            let mut executed = 0u64;

            for fill in fills {
                let before = order.quantity();
                match order.fill(Quantity::new(fill)) {
                    Ok(remaining) => {
                        executed += fill;
                        prop_assert_eq!(remaining.lots() + fill, before.lots());
                    }
                    Err(_) => {
                        prop_assert_eq!(order.quantity(), before);
                    }
                }
            }

            prop_assert_eq!(order.quantity().lots() + executed, initial);
        }
    }
}
