//! Trade tape
//!
//! Append-only, in-memory ledger of executions for one trading session.
//! Insertion order is execution order; entries are never edited or
//! removed individually. `clear` starts a new session.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::info;
use types::ids::SessionId;
use types::numeric::Quantity;
use types::trade::ExecutionResult;

use crate::events::TradeExecutedEvent;

/// Ordered record of executed trades
#[derive(Debug, Clone)]
pub struct TradeTape {
    records: Vec<ExecutionResult>,
    session_id: SessionId,
    opened_at: DateTime<Utc>,
}

impl TradeTape {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a tape with room for `capacity` trades before reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            session_id: SessionId::new(),
            opened_at: Utc::now(),
        }
    }

    /// Append a result at the tail
    ///
    /// Results are kept exactly as given; the drain loop only passes
    /// executed trades.
    pub fn record(&mut self, result: ExecutionResult) {
        self.records.push(result);
    }

    /// Read-only view of all records in execution order
    pub fn records(&self) -> &[ExecutionResult] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExecutionResult> {
        self.records.iter()
    }

    /// Most recent trade
    pub fn last(&self) -> Option<&ExecutionResult> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of executed quantity across the tape
    pub fn total_volume(&self) -> Quantity {
        self.records
            .iter()
            .fold(Quantity::zero(), |acc, r| acc.saturating_add(r.quantity))
    }

    /// Sum of price × quantity across the tape
    pub fn total_notional(&self) -> Decimal {
        self.records.iter().map(ExecutionResult::notional).sum()
    }

    /// Executed trades as sequence-numbered events
    pub fn events(&self) -> impl Iterator<Item = TradeExecutedEvent> + '_ {
        let session_id = self.session_id;
        self.records
            .iter()
            .filter(|result| result.executed)
            .zip(1u64..)
            .map(move |(result, sequence)| TradeExecutedEvent::from_result(session_id, sequence, result))
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Reset for a new session
    ///
    /// Drops every record and assigns a fresh session id.
    pub fn clear(&mut self) {
        info!(
            session_id = %self.session_id,
            trades = self.records.len(),
            "Closing trade tape session"
        );

        self.records.clear();
        self.session_id = SessionId::new();
        self.opened_at = Utc::now();
    }
}

impl Default for TradeTape {
    fn default() -> Self {
        Self::new()
    }
}
