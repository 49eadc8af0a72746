//! Trade execution logic
//!
//! `Matcher` executes one trade at a time between the head orders of the
//! best bid and best ask levels, and can drain a book until it no longer
//! crosses.

use tracing::{debug, trace};
use types::errors::{BookError, OrderError};
use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};
use types::trade::ExecutionResult;

use crate::book::OrderBook;
use crate::tape::TradeTape;

/// The pair of orders the next execution would touch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchCandidate<'a> {
    pub bid_price: Price,
    pub ask_price: Price,
    pub buy: &'a Order,
    pub sell: &'a Order,
}

/// Stateless price-time priority matcher
#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher;

impl Matcher {
    pub fn new() -> Self {
        Self
    }

    /// Inspect the orders the next execution would match, without mutating
    ///
    /// Returns None when the book is not crossed.
    pub fn select_orders<'a>(&self, book: &'a OrderBook) -> Option<MatchCandidate<'a>> {
        if !book.try_match_once() {
            return None;
        }

        let bid_price = book.best_bid().ok()?;
        let ask_price = book.best_ask().ok()?;
        let buy = book.level(Side::BUY, bid_price)?.front()?;
        let sell = book.level(Side::SELL, ask_price)?.front()?;

        Some(MatchCandidate {
            bid_price,
            ask_price,
            buy,
            sell,
        })
    }

    /// Execute exactly one trade if the book is crossed
    ///
    /// Only the head orders of the best bid and best ask levels are touched.
    /// Both are decremented by the smaller of their quantities, exhausted
    /// orders are popped, and emptied levels are removed before returning.
    /// The execution price is the ask level's price.
    ///
    /// A non-crossed book yields `ExecutionResult::none()` and is left
    /// unchanged. An error means a side emptied between the gate and the
    /// execution, which is a broken invariant.
    pub fn execute_once(&self, book: &mut OrderBook) -> Result<ExecutionResult, BookError> {
        if !book.try_match_once() {
            trace!("Book not crossed");
            return Ok(ExecutionResult::none());
        }

        let bid_price = book.best_bid()?;
        let ask_price = book.best_ask()?;

        let (bids, asks) = book.sides_mut();
        let buy_level = bids
            .level_mut(bid_price)
            .ok_or(BookError::EmptyBook { side: Side::BUY })?;
        let sell_level = asks
            .level_mut(ask_price)
            .ok_or(BookError::EmptyBook { side: Side::SELL })?;

        let (buy_id, buy_quantity) = buy_level
            .front()
            .map(|o| (o.order_id(), o.quantity()))
            .ok_or(BookError::EmptyLevel { side: Side::BUY, price: bid_price })?;
        let (sell_id, sell_quantity) = sell_level
            .front()
            .map(|o| (o.order_id(), o.quantity()))
            .ok_or(BookError::EmptyLevel { side: Side::SELL, price: ask_price })?;

        let execution_quantity = buy_quantity.min(sell_quantity);

        // Both fills are checked before either head is touched
        let buy_remaining = remaining_after(buy_id, buy_quantity, execution_quantity)?;
        let sell_remaining = remaining_after(sell_id, sell_quantity, execution_quantity)?;

        buy_level.fill_front(execution_quantity)?;
        sell_level.fill_front(execution_quantity)?;

        // A partially filled head keeps its place in the queue
        if buy_remaining.is_zero() {
            buy_level.pop_front();
        }
        if sell_remaining.is_zero() {
            sell_level.pop_front();
        }

        let buy_level_empty = buy_level.is_empty();
        let sell_level_empty = sell_level.is_empty();
        if buy_level_empty {
            bids.remove_level(bid_price);
        }
        if sell_level_empty {
            asks.remove_level(ask_price);
        }

        debug!(
            %buy_id,
            %sell_id,
            price = %ask_price,
            quantity = %execution_quantity,
            %buy_remaining,
            %sell_remaining,
            "Trade executed"
        );

        Ok(ExecutionResult::trade(
            ask_price,
            execution_quantity,
            buy_id,
            sell_id,
        ))
    }

    /// Execute trades until the book no longer crosses
    ///
    /// Every executed result is recorded on `tape` in execution order.
    /// Returns the number of trades executed by this call.
    pub fn trades_executed(&self, book: &mut OrderBook, tape: &mut TradeTape) -> Result<usize, BookError> {
        let mut trades = 0;

        loop {
            let result = self.execute_once(book)?;
            if !result.executed {
                break;
            }

            tape.record(result);
            trades += 1;
        }

        debug!(trades, tape_len = tape.len(), "Matching drained");
        Ok(trades)
    }
}

fn remaining_after(order_id: OrderId, quantity: Quantity, requested: Quantity) -> Result<Quantity, OrderError> {
    quantity.checked_sub(requested).ok_or(OrderError::Overfill {
        order_id,
        requested,
        remaining: quantity,
    })
}
