//! Matching session
//!
//! Owns the book, the tape and the matcher for one trading session, and
//! drains the book after every submission.

use tracing::info;
use types::errors::BookError;
use types::numeric::Price;
use types::order::Order;

use crate::book::{BookSnapshot, OrderBook};
use crate::config::{ConfigError, EngineConfig};
use crate::matching::Matcher;
use crate::tape::TradeTape;

/// One trading session over a single book
///
/// Access goes through `&mut self`; callers sharing a session across
/// threads must serialize access themselves.
#[derive(Debug)]
pub struct MatchingSession {
    book: OrderBook,
    tape: TradeTape,
    matcher: Matcher,
    config: EngineConfig,
}

impl MatchingSession {
    /// Open a session, rejecting an invalid configuration
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::open(config))
    }

    pub fn with_defaults() -> Self {
        Self::open(EngineConfig::default())
    }

    fn open(config: EngineConfig) -> Self {
        let tape = TradeTape::with_capacity(config.tape_capacity);

        info!(
            session_id = %tape.session_id(),
            tape_capacity = config.tape_capacity,
            snapshot_depth = config.snapshot_depth,
            "Matching session opened"
        );

        Self {
            book: OrderBook::new(),
            tape,
            matcher: Matcher::new(),
            config,
        }
    }

    /// Rest `order` at `price`, then match until the book no longer crosses
    ///
    /// Returns the number of trades this submission produced.
    pub fn submit(&mut self, price: Price, order: Order) -> Result<usize, BookError> {
        self.book.add_order(price, order);
        self.drain()
    }

    /// Match until the book no longer crosses
    pub fn drain(&mut self) -> Result<usize, BookError> {
        self.matcher.trades_executed(&mut self.book, &mut self.tape)
    }

    pub fn book(&self) -> &OrderBook {
        &self.book
    }

    pub fn tape(&self) -> &TradeTape {
        &self.tape
    }

    /// Top levels per side, using the configured depth
    pub fn snapshot(&self) -> BookSnapshot {
        self.book.depth_snapshot(self.config.snapshot_depth)
    }

    /// Discard resting orders and start a new tape session
    pub fn reset(&mut self) {
        self.book = OrderBook::new();
        self.tape.clear();

        info!(session_id = %self.tape.session_id(), "Matching session reset");
    }
}
