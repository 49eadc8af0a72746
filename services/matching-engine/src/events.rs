//! Event structures for the matching core
//!
//! Serializable view of tape entries for downstream consumers.

use serde::{Deserialize, Serialize};
use types::ids::{OrderId, SessionId};
use types::numeric::{Price, Quantity};
use types::trade::ExecutionResult;

/// Trade executed event
///
/// `sequence` starts at 1 and follows tape order within a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeExecutedEvent {
    pub session_id: SessionId,
    pub sequence: u64,
    pub buy_order_id: OrderId,
    pub sell_order_id: OrderId,
    pub price: Price,
    pub quantity: Quantity,
}

impl TradeExecutedEvent {
    pub fn from_result(session_id: SessionId, sequence: u64, result: &ExecutionResult) -> Self {
        Self {
            session_id,
            sequence,
            buy_order_id: result.buy_order_id,
            sell_order_id: result.sell_order_id,
            price: result.price,
            quantity: result.quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_from_result() {
        let session_id = SessionId::new();
        let result = ExecutionResult::trade(
            Price::new(100),
            Quantity::new(7),
            OrderId::new(1),
            OrderId::new(2),
        );

        let event = TradeExecutedEvent::from_result(session_id, 1, &result);

        assert_eq!(event.session_id, session_id);
        assert_eq!(event.sequence, 1);
        assert_eq!(event.price, Price::new(100));
        assert_eq!(event.quantity, Quantity::new(7));

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"buy_order_id\":1"));
        let deserialized: TradeExecutedEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
