//! Binance aggregate-trade wire format
//!
//! One `aggTrade` message per executed aggregate trade. Numeric fields come
//! as decimal strings; `m` marks whether the buyer was the maker.

use serde::Deserialize;
use types::numeric::{Price, Qty};
use types::order::{Order, Side};

use crate::error::{FeedError, Result};

/// Binance aggregate trade message
#[derive(Debug, Clone, Deserialize)]
pub struct AggTrade {
    /// Aggregate trade id
    #[serde(rename = "a")]
    pub trade_id: u64,
    /// Trade price as a decimal string
    #[serde(rename = "p")]
    pub price: String,
    /// Trade quantity as a decimal string
    #[serde(rename = "q")]
    pub quantity: String,
    /// Whether the buyer was the maker (true means the aggressor sold)
    #[serde(rename = "m")]
    pub is_buyer_maker: bool,
}

/// Decode a raw stream payload into an aggregate trade
pub fn decode(text: &str) -> Result<AggTrade> {
    Ok(serde_json::from_str(text)?)
}

impl AggTrade {
    /// Build the synthetic order this trade submits against the book
    ///
    /// The aggressor side is the opposite of the maker: a buyer-maker trade
    /// was driven by a seller.
    pub fn to_order(&self) -> Result<Order> {
        let price = Price::parse(&self.price).ok_or(FeedError::InvalidField {
            trade_id: self.trade_id,
            field: "price",
        })?;
        let quantity = self
            .quantity
            .parse::<f64>()
            .map(Qty::from_external)
            .map_err(|_| FeedError::InvalidField {
                trade_id: self.trade_id,
                field: "quantity",
            })?;
        let side = if self.is_buyer_maker {
            Side::Sell
        } else {
            Side::Buy
        };

        Ok(Order::new(self.trade_id, price, quantity, side))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Shape of a live message, including the fields we ignore
    const SAMPLE: &str = r#"{
        "e": "aggTrade", "E": 1718888000123, "s": "BTCUSDT",
        "a": 3141592653, "p": "67234.51", "q": "0.523",
        "f": 100, "l": 105, "T": 1718888000120, "m": true, "M": true
    }"#;

    #[test]
    fn test_decode_live_message_shape() {
        let trade = decode(SAMPLE).unwrap();
        assert_eq!(trade.trade_id, 3141592653);
        assert_eq!(trade.price, "67234.51");
        assert_eq!(trade.quantity, "0.523");
        assert!(trade.is_buyer_maker);
    }

    #[test]
    fn test_decode_missing_field_fails() {
        let result = decode(r#"{"a": 1, "p": "100.0", "m": false}"#);
        assert!(matches!(result, Err(FeedError::Decode(_))));
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(decode("not json").is_err());
    }

    #[test]
    fn test_to_order_buyer_maker_means_sell_aggressor() {
        let trade = decode(SAMPLE).unwrap();
        let order = trade.to_order().unwrap();
        assert_eq!(order.side, Side::Sell);
        assert_eq!(order.id, 3141592653);
        assert_eq!(order.price, Price::parse("67234.51").unwrap());
        assert_eq!(order.remaining(), Qty::from_scaled(523));
    }

    #[test]
    fn test_to_order_seller_maker_means_buy_aggressor() {
        let trade = AggTrade {
            trade_id: 7,
            price: "100.0".to_string(),
            quantity: "1.2345".to_string(),
            is_buyer_maker: false,
        };
        let order = trade.to_order().unwrap();
        assert_eq!(order.side, Side::Buy);
        // floor(1.2345 * 1000)
        assert_eq!(order.remaining(), Qty::from_scaled(1234));
    }

    #[test]
    fn test_to_order_bad_price_fails() {
        let trade = AggTrade {
            trade_id: 7,
            price: "garbage".to_string(),
            quantity: "1.0".to_string(),
            is_buyer_maker: false,
        };
        assert!(matches!(
            trade.to_order(),
            Err(FeedError::InvalidField { field: "price", .. })
        ));
    }

    #[test]
    fn test_to_order_bad_quantity_fails() {
        let trade = AggTrade {
            trade_id: 7,
            price: "100.0".to_string(),
            quantity: "garbage".to_string(),
            is_buyer_maker: false,
        };
        assert!(matches!(
            trade.to_order(),
            Err(FeedError::InvalidField { field: "quantity", .. })
        ));
    }

    #[test]
    fn test_dust_quantity_scales_to_zero() {
        let trade = AggTrade {
            trade_id: 7,
            price: "100.0".to_string(),
            quantity: "0.0004".to_string(),
            is_buyer_maker: true,
        };
        let order = trade.to_order().unwrap();
        assert!(order.remaining().is_zero());
    }
}
