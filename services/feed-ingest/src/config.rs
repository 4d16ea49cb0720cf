//! Feed configuration

use std::time::Duration;

/// Connection settings for the trade stream
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// WebSocket base endpoint
    pub ws_base: String,
    /// Instrument symbol, lowercase as the stream path expects
    pub symbol: String,
    /// Consecutive failed connection attempts before giving up
    pub reconnect_max_attempts: u32,
    /// Delay between reconnection attempts
    pub reconnect_delay: Duration,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            // Port 443 is less likely to be blocked than 9443
            ws_base: "wss://stream.binance.com:443/ws".to_string(),
            symbol: "btcusdt".to_string(),
            reconnect_max_attempts: 10,
            reconnect_delay: Duration::from_secs(1),
        }
    }
}

impl FeedConfig {
    /// Full URL of the aggregate-trade stream
    pub fn stream_url(&self) -> String {
        format!("{}/{}@aggTrade", self.ws_base, self.symbol)
    }

    /// Default configuration with environment overrides applied
    ///
    /// `APEXLOB_SYMBOL` selects the instrument.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(symbol) = std::env::var("APEXLOB_SYMBOL") {
            config.symbol = symbol.to_lowercase();
        }
        config
    }
}
