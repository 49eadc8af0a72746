//! Crossing detection logic
//!
//! Determines when a bid and ask can match based on price compatibility

use types::numeric::Price;

/// Check if a bid and ask can match at given prices
///
/// A buy crosses a sell when the bid is at or above the ask.
pub fn can_match(bid_price: Price, ask_price: Price) -> bool {
    bid_price >= ask_price
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_match_crossing() {
        let bid = Price::new(101);
        let ask = Price::new(100);
        assert!(can_match(bid, ask), "Bid > ask should match");
    }

    #[test]
    fn test_can_match_exact() {
        let price = Price::new(100);
        assert!(can_match(price, price), "Equal prices should match");
    }

    #[test]
    fn test_can_match_no_cross() {
        let bid = Price::new(99);
        let ask = Price::new(100);
        assert!(!can_match(bid, ask), "Bid < ask should not match");
    }
}
