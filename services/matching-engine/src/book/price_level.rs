//! Price level implementation with FIFO queue
//!
//! A price level contains all orders resting at a specific price on one
//! side of the book. Orders are kept in arrival order to enforce time
//! priority: only the head order is ever executed, and it keeps its place
//! until nothing remains of it.

use std::collections::VecDeque;
use types::errors::BookError;
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};

/// A price level containing orders at a specific price
///
/// The level exclusively owns its queued orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceLevel {
    price: Price,
    side: Side,
    /// Queue of orders at this price level (FIFO order)
    orders: VecDeque<Order>,
    /// Total quantity available at this level
    total_quantity: Quantity,
}

impl PriceLevel {
    /// Create a new empty price level
    pub fn new(price: Price, side: Side) -> Self {
        Self {
            price,
            side,
            orders: VecDeque::new(),
            total_quantity: Quantity::zero(),
        }
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Append an order at the back of the queue (time priority)
    pub fn push_back(&mut self, order: Order) {
        debug_assert_eq!(order.side(), self.side, "order side must match level side");

        self.total_quantity = self.total_quantity.saturating_add(order.quantity());
        self.orders.push_back(order);
    }

    /// Peek at the order with time priority without removing it
    pub fn front(&self) -> Option<&Order> {
        self.orders.front()
    }

    /// Execute `quantity` against the head order in place
    ///
    /// Returns the head's remaining quantity. The head stays queued even
    /// when it reaches zero; `pop_front` removes it.
    pub fn fill_front(&mut self, quantity: Quantity) -> Result<Quantity, BookError> {
        let head = self.orders.front_mut().ok_or(BookError::EmptyLevel {
            side: self.side,
            price: self.price,
        })?;

        let remaining = head.fill(quantity)?;

        debug_assert!(
            self.total_quantity >= quantity,
            "level total {} below filled quantity {}",
            self.total_quantity,
            quantity
        );
        self.total_quantity = self
            .total_quantity
            .checked_sub(quantity)
            .unwrap_or(Quantity::zero());

        Ok(remaining)
    }

    /// Pop the front order from the queue
    pub fn pop_front(&mut self) -> Option<Order> {
        let order = self.orders.pop_front()?;

        debug_assert!(
            self.total_quantity >= order.quantity(),
            "level total {} below popped quantity {}",
            self.total_quantity,
            order.quantity()
        );
        self.total_quantity = self
            .total_quantity
            .checked_sub(order.quantity())
            .unwrap_or(Quantity::zero());

        Some(order)
    }

    /// Iterate queued orders in time priority
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    /// Check if the price level is empty
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Get the total quantity at this price level
    pub fn total_quantity(&self) -> Quantity {
        self.total_quantity
    }

    /// Get the number of orders at this level
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }
}
