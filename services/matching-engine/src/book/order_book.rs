//! Two-sided order book
//!
//! Owns one `BidBook` and one `AskBook` and answers top-of-book queries.
//! `try_match_once` is the only place that decides whether the book is
//! crossed.

use serde::{Deserialize, Serialize};
use tracing::trace;
use types::errors::BookError;
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};

use super::{AskBook, BidBook, PriceLevel};
use crate::matching::crossing;

/// Resting interest for a single instrument
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderBook {
    bids: BidBook,
    asks: AskBook,
}

/// Top-of-book depth view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSnapshot {
    /// Best-first (highest price first)
    pub bids: Vec<(Price, Quantity)>,
    /// Best-first (lowest price first)
    pub asks: Vec<(Price, Quantity)>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self {
            bids: BidBook::new(),
            asks: AskBook::new(),
        }
    }

    /// Rest `order` at `price` on the side the order names
    ///
    /// Returns true if a new price level was created. The order joins the
    /// tail of the level's queue.
    pub fn add_order(&mut self, price: Price, order: Order) -> bool {
        trace!(
            order_id = %order.order_id(),
            side = %order.side(),
            %price,
            quantity = %order.quantity(),
            "Adding order"
        );

        match order.side() {
            Side::BUY => self.bids.insert(price, order),
            Side::SELL => self.asks.insert(price, order),
        }
    }

    /// Highest bid price
    pub fn best_bid(&self) -> Result<Price, BookError> {
        self.bids
            .best_bid_price()
            .ok_or(BookError::EmptyBook { side: Side::BUY })
    }

    /// Lowest ask price
    pub fn best_ask(&self) -> Result<Price, BookError> {
        self.asks
            .best_ask_price()
            .ok_or(BookError::EmptyBook { side: Side::SELL })
    }

    /// Check if a trade is possible right now
    ///
    /// True iff both sides have orders and the best bid is at or above the
    /// best ask. Has no side effects.
    pub fn try_match_once(&self) -> bool {
        match (self.bids.best_bid_price(), self.asks.best_ask_price()) {
            (Some(bid), Some(ask)) => crossing::can_match(bid, ask),
            _ => false,
        }
    }

    pub fn bids(&self) -> &BidBook {
        &self.bids
    }

    pub fn asks(&self) -> &AskBook {
        &self.asks
    }

    /// Split borrow of both sides for the matcher
    pub(crate) fn sides_mut(&mut self) -> (&mut BidBook, &mut AskBook) {
        (&mut self.bids, &mut self.asks)
    }

    /// Look up the level at `price` on `side`
    pub fn level(&self, side: Side, price: Price) -> Option<&PriceLevel> {
        match side {
            Side::BUY => self.bids.level(price),
            Side::SELL => self.asks.level(price),
        }
    }

    /// Total resting quantity on `side`
    pub fn total_quantity(&self, side: Side) -> Quantity {
        match side {
            Side::BUY => self.bids.total_quantity(),
            Side::SELL => self.asks.total_quantity(),
        }
    }

    /// Get order book snapshot (top `depth` levels per side)
    pub fn depth_snapshot(&self, depth: usize) -> BookSnapshot {
        BookSnapshot {
            bids: self.bids.depth_snapshot(depth),
            asks: self.asks.depth_snapshot(depth),
        }
    }

    /// Check if neither side has resting orders
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }
}
