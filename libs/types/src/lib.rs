//! Types library for the price-time matching core
//!
//! This library provides the value types shared by the order book, the
//! matcher and the trade tape, keeping arithmetic on prices and quantities
//! integral and deterministic.
//!
//! # Modules
//! - `ids`: Identifiers (OrderId, SessionId)
//! - `numeric`: Integer price and quantity types
//! - `order`: Resting order and side
//! - `trade`: Execution results
//! - `errors`: Error taxonomy

pub mod ids;
pub mod numeric;
pub mod order;
pub mod trade;
pub mod errors;

