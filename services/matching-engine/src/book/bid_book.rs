//! Bid (buy-side) order book
//!
//! Maintains buy orders sorted by price descending (best bid first).
//! Uses BTreeMap for deterministic iteration order and O(log n) access to
//! the best price.

use std::collections::BTreeMap;
use tracing::debug;
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};

use super::price_level::PriceLevel;

/// Bid (buy) side order book
///
/// Orders are sorted by price descending, so the highest bid is first.
/// At each price level, orders are maintained in FIFO order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BidBook {
    /// Price levels keyed by price; the best bid is the last key
    levels: BTreeMap<Price, PriceLevel>,
}

impl BidBook {
    /// Create a new empty bid book
    pub fn new() -> Self {
        Self {
            levels: BTreeMap::new(),
        }
    }

    /// Append an order to the level at `price`
    ///
    /// Returns true if a new price level was created
    pub fn insert(&mut self, price: Price, order: Order) -> bool {
        let created = !self.levels.contains_key(&price);
        if created {
            debug!(%price, side = %Side::BUY, "Creating price level");
        }

        self.levels
            .entry(price)
            .or_insert_with(|| PriceLevel::new(price, Side::BUY))
            .push_back(order);

        created
    }

    /// Get the best bid (highest price) with its aggregate quantity
    pub fn best_bid(&self) -> Option<(Price, Quantity)> {
        // BTreeMap iter is ascending, so we need last()
        self.levels
            .iter()
            .next_back()
            .map(|(price, level)| (*price, level.total_quantity()))
    }

    /// Get the best bid price
    pub fn best_bid_price(&self) -> Option<Price> {
        self.levels.keys().next_back().copied()
    }

    /// Get the level at `price`
    pub fn level(&self, price: Price) -> Option<&PriceLevel> {
        self.levels.get(&price)
    }

    pub(crate) fn level_mut(&mut self, price: Price) -> Option<&mut PriceLevel> {
        self.levels.get_mut(&price)
    }

    /// Drop a level once its queue has emptied
    pub(crate) fn remove_level(&mut self, price: Price) -> Option<PriceLevel> {
        debug!(%price, side = %Side::BUY, "Removing empty price level");
        self.levels.remove(&price)
    }

    /// Iterate levels best-first
    pub fn levels(&self) -> impl Iterator<Item = &PriceLevel> {
        self.levels.values().rev()
    }

    /// Get depth snapshot (top N price levels)
    pub fn depth_snapshot(&self, depth: usize) -> Vec<(Price, Quantity)> {
        self.levels
            .iter()
            .rev() // Reverse to get highest prices first
            .take(depth)
            .map(|(price, level)| (*price, level.total_quantity()))
            .collect()
    }

    /// Total resting quantity across all bid levels
    pub fn total_quantity(&self) -> Quantity {
        self.levels
            .values()
            .fold(Quantity::zero(), |acc, level| acc.saturating_add(level.total_quantity()))
    }

    /// Check if the bid book is empty
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Get the total number of price levels
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buy(id: i64, qty: u64) -> Order {
        Order::buy(id, qty).unwrap()
    }

    #[test]
    fn test_bid_book_insert() {
        let mut book = BidBook::new();

        assert!(book.insert(Price::new(100), buy(1, 10)));
        assert!(!book.insert(Price::new(100), buy(2, 5)));

        assert_eq!(book.level_count(), 1);
        assert_eq!(book.level(Price::new(100)).unwrap().order_count(), 2);
        assert!(!book.is_empty());
    }

    #[test]
    fn test_bid_book_best_bid() {
        let mut book = BidBook::new();

        book.insert(Price::new(100), buy(1, 10));
        book.insert(Price::new(101), buy(2, 20)); // Higher price
        book.insert(Price::new(99), buy(3, 15)); // Lower price

        let (best_price, best_qty) = book.best_bid().unwrap();
        assert_eq!(best_price, Price::new(101)); // Highest price
        assert_eq!(best_qty, Quantity::new(20));
        assert_eq!(book.best_bid_price(), Some(Price::new(101)));
    }

    #[test]
    fn test_bid_book_empty() {
        let book = BidBook::new();
        assert!(book.best_bid().is_none());
        assert!(book.best_bid_price().is_none());
        assert_eq!(book.total_quantity(), Quantity::zero());
    }

    #[test]
    fn test_bid_book_remove_level() {
        let mut book = BidBook::new();
        book.insert(Price::new(100), buy(1, 10));

        let removed = book.remove_level(Price::new(100)).unwrap();
        assert_eq!(removed.order_count(), 1);
        assert!(book.is_empty());
    }

    #[test]
    fn test_bid_book_depth_snapshot() {
        let mut book = BidBook::new();

        book.insert(Price::new(100), buy(1, 10));
        book.insert(Price::new(101), buy(2, 20));
        book.insert(Price::new(99), buy(3, 15));
        book.insert(Price::new(102), buy(4, 5));

        let depth = book.depth_snapshot(2);

        // Should return top 2 levels (highest prices first)
        assert_eq!(depth, vec![(Price::new(102), Quantity::new(5)), (Price::new(101), Quantity::new(20))]);

        let prices: Vec<Price> = book.levels().map(|l| l.price()).collect();
        assert_eq!(prices, vec![Price::new(102), Price::new(101), Price::new(100), Price::new(99)]);
    }

    #[test]
    fn test_bid_book_same_price_aggregates() {
        let mut book = BidBook::new();

        book.insert(Price::new(100), buy(1, 10));
        book.insert(Price::new(100), buy(2, 20)); // Same price

        // Both orders at same price level
        assert_eq!(book.level_count(), 1);

        let (price, total_qty) = book.best_bid().unwrap();
        assert_eq!(price, Price::new(100));
        assert_eq!(total_qty, Quantity::new(30));
        assert_eq!(book.total_quantity(), Quantity::new(30));
    }
}
