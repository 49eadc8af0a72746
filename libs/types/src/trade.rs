//! Execution result types
//!
//! One `ExecutionResult` is produced per matcher step. A result with
//! `executed == false` means no trade was possible and carries sentinel
//! fields; it is a normal outcome, not an error.

use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Outcome of a single matching step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub executed: bool,
    /// Execution price (the resting ask's price)
    pub price: Price,
    pub quantity: Quantity,
    pub buy_order_id: OrderId,
    pub sell_order_id: OrderId,
}

impl ExecutionResult {
    /// A completed trade between `buy_order_id` and `sell_order_id`
    pub fn trade(
        price: Price,
        quantity: Quantity,
        buy_order_id: OrderId,
        sell_order_id: OrderId,
    ) -> Self {
        Self {
            executed: true,
            price,
            quantity,
            buy_order_id,
            sell_order_id,
        }
    }

    /// The "nothing to do" result
    pub fn none() -> Self {
        Self {
            executed: false,
            price: Price::default(),
            quantity: Quantity::zero(),
            buy_order_id: OrderId::SENTINEL,
            sell_order_id: OrderId::SENTINEL,
        }
    }

    pub fn is_executed(&self) -> bool {
        self.executed
    }

    /// Calculate trade value (price × quantity)
    pub fn notional(&self) -> Decimal {
        self.price.as_decimal() * self.quantity.as_decimal()
    }
}
