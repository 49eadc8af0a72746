//! Order book infrastructure module
//!
//! Contains price levels, the bid and ask sides, and the two-sided book.

pub mod price_level;
pub mod bid_book;
pub mod ask_book;
pub mod order_book;

pub use price_level::PriceLevel;
pub use bid_book::BidBook;
pub use ask_book::AskBook;
pub use order_book::{BookSnapshot, OrderBook};
