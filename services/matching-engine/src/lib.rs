//! Matching Engine Service
//!
//! Matching core of a continuous double-auction order book. Orders rest in
//! a two-sided book; the matcher executes one trade at a time under
//! price-time priority and records each execution on an append-only tape.
//!
//! **Key Invariants:**
//! - Price-time priority strictly enforced
//! - Deterministic matching (same inputs → same outputs)
//! - Conservation of quantity
//! - No empty price levels left in the book
//!
//! A book is driven by a single caller; there is no internal locking.

pub mod book;
pub mod matching;
pub mod tape;
pub mod events;
pub mod config;
pub mod engine;

pub use book::{OrderBook, PriceLevel};
pub use config::{ConfigError, EngineConfig};
pub use engine::MatchingSession;
pub use matching::Matcher;
pub use tape::TradeTape;
