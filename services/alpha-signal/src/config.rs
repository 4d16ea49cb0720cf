//! Signal engine configuration

/// Indicator lookback periods and history bound
///
/// The defaults match the live deployment; all windows are in samples, one
/// sample per processed trade.
#[derive(Debug, Clone)]
pub struct SignalConfig {
    /// Window for the short simple moving average
    pub short_ma_period: usize,
    /// Window for the long simple moving average; also gates signal
    /// activation (see [`SignalConfig::min_history`])
    pub long_ma_period: usize,
    /// RSI lookback, in price changes
    pub rsi_period: usize,
    /// Momentum lookback
    pub momentum_period: usize,
    /// Volatility lookback
    pub volatility_period: usize,
    /// Cap on each rolling series
    pub max_history: usize,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            short_ma_period: 10,
            long_ma_period: 30,
            rsi_period: 14,
            momentum_period: 10,
            volatility_period: 20,
            max_history: 1000,
        }
    }
}

impl SignalConfig {
    /// Minimum history length before signals activate
    pub fn min_history(&self) -> usize {
        self.long_ma_period + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_periods() {
        let config = SignalConfig::default();
        assert_eq!(config.short_ma_period, 10);
        assert_eq!(config.long_ma_period, 30);
        assert_eq!(config.rsi_period, 14);
        assert_eq!(config.momentum_period, 10);
        assert_eq!(config.volatility_period, 20);
        assert_eq!(config.max_history, 1000);
    }

    #[test]
    fn test_min_history_is_long_ma_plus_one() {
        assert_eq!(SignalConfig::default().min_history(), 31);
    }
}
