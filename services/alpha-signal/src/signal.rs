//! Signal output types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete directional recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignalKind {
    StrongBuy,
    Buy,
    Hold,
    Sell,
    StrongSell,
}

impl SignalKind {
    /// Signed magnitude of the recommendation: +2 strong buy .. -2 strong sell
    pub fn as_i8(&self) -> i8 {
        match self {
            SignalKind::StrongBuy => 2,
            SignalKind::Buy => 1,
            SignalKind::Hold => 0,
            SignalKind::Sell => -1,
            SignalKind::StrongSell => -2,
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SignalKind::StrongBuy => "STRONG_BUY",
            SignalKind::Buy => "BUY",
            SignalKind::Hold => "HOLD",
            SignalKind::Sell => "SELL",
            SignalKind::StrongSell => "STRONG_SELL",
        };
        write!(f, "{}", label)
    }
}

/// One generated signal with the indicator readings behind it
///
/// A snapshot value: never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlphaSignal {
    /// Directional recommendation
    pub signal: SignalKind,
    /// Confidence in [0, 1]
    pub strength: f64,
    /// Human-readable summary of the contributing conditions
    pub reason: String,
    /// Price at generation time
    pub price: f64,
    /// Short simple moving average
    pub sma_short: f64,
    /// Long simple moving average
    pub sma_long: f64,
    /// Relative strength index
    pub rsi: f64,
    /// Rate-of-change momentum, percent
    pub momentum: f64,
    /// Coefficient-of-variation volatility, percent
    pub volatility: f64,
}

impl AlphaSignal {
    /// The placeholder returned before enough history has accumulated
    pub fn insufficient_data() -> Self {
        Self {
            signal: SignalKind::Hold,
            strength: 0.0,
            reason: "Insufficient data".to_string(),
            price: 0.0,
            sma_short: 0.0,
            sma_long: 0.0,
            rsi: 0.0,
            momentum: 0.0,
            volatility: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_kind_values() {
        assert_eq!(SignalKind::StrongBuy.as_i8(), 2);
        assert_eq!(SignalKind::Buy.as_i8(), 1);
        assert_eq!(SignalKind::Hold.as_i8(), 0);
        assert_eq!(SignalKind::Sell.as_i8(), -1);
        assert_eq!(SignalKind::StrongSell.as_i8(), -2);
    }

    #[test]
    fn test_signal_kind_display() {
        assert_eq!(SignalKind::StrongBuy.to_string(), "STRONG_BUY");
        assert_eq!(SignalKind::Hold.to_string(), "HOLD");
        assert_eq!(SignalKind::StrongSell.to_string(), "STRONG_SELL");
    }

    #[test]
    fn test_signal_kind_serialization() {
        assert_eq!(serde_json::to_string(&SignalKind::StrongBuy).unwrap(), "\"STRONG_BUY\"");
        let back: SignalKind = serde_json::from_str("\"SELL\"").unwrap();
        assert_eq!(back, SignalKind::Sell);
    }

    #[test]
    fn test_insufficient_data_placeholder() {
        let signal = AlphaSignal::insufficient_data();
        assert_eq!(signal.signal, SignalKind::Hold);
        assert_eq!(signal.strength, 0.0);
        assert_eq!(signal.reason, "Insufficient data");
        assert_eq!(signal.price, 0.0);
    }
}
