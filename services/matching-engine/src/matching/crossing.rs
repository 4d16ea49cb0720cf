//! Crossing detection logic
//!
//! Determines when an incoming order can trade against a resting level.

use types::numeric::Price;
use types::order::Side;

/// Check if an incoming order crosses a resting level
///
/// A buy crosses when its limit is at or above the level price; a sell
/// crosses when its limit is at or below the level price.
pub fn incoming_crosses(incoming_side: Side, limit: Price, level_price: Price) -> bool {
    match incoming_side {
        Side::Buy => limit >= level_price,
        Side::Sell => limit <= level_price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buy_crosses_at_or_above() {
        let limit = Price::from_u64(100);
        assert!(incoming_crosses(Side::Buy, limit, Price::from_u64(99)));
        assert!(incoming_crosses(Side::Buy, limit, Price::from_u64(100)));
        assert!(!incoming_crosses(Side::Buy, limit, Price::from_u64(101)));
    }

    #[test]
    fn test_sell_crosses_at_or_below() {
        let limit = Price::from_u64(100);
        assert!(incoming_crosses(Side::Sell, limit, Price::from_u64(101)));
        assert!(incoming_crosses(Side::Sell, limit, Price::from_u64(100)));
        assert!(!incoming_crosses(Side::Sell, limit, Price::from_u64(99)));
    }
}
