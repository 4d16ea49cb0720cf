//! Signal engine: rolling state plus the deterministic scoring rule
//!
//! `update` appends one sample per processed trade; `generate` computes a
//! snapshot from current state and is a pure function of that state.

use parking_lot::RwLock;

use crate::config::SignalConfig;
use crate::history::History;
use crate::indicators;
use crate::signal::{AlphaSignal, SignalKind};

/// Indicator readings for one evaluation
struct Readings {
    price: f64,
    sma_short: f64,
    sma_long: f64,
    rsi: f64,
    momentum: f64,
    volatility: f64,
}

/// Alpha signal engine over bounded rolling windows
#[derive(Debug)]
pub struct SignalEngine {
    config: SignalConfig,
    history: RwLock<History>,
}

impl Default for SignalEngine {
    fn default() -> Self {
        Self::new(SignalConfig::default())
    }
}

impl SignalEngine {
    /// Create an engine with the given configuration
    pub fn new(config: SignalConfig) -> Self {
        let history = RwLock::new(History::new(config.max_history));
        Self { config, history }
    }

    /// Engine configuration
    pub fn config(&self) -> &SignalConfig {
        &self.config
    }

    /// Append one (price, volume, vwap) sample
    pub fn update(&self, price: f64, volume: f64, vwap: f64) {
        self.history.write().push(price, volume, vwap);
    }

    /// Current length of the price series
    pub fn history_size(&self) -> usize {
        self.history.read().len()
    }

    /// Compute a signal snapshot from current state
    ///
    /// Returns the insufficient-data placeholder until
    /// `long_ma_period + 1` samples have accumulated.
    pub fn generate(&self) -> AlphaSignal {
        let history = self.history.read();
        let prices = history.prices();

        if prices.len() < self.config.min_history() {
            return AlphaSignal::insufficient_data();
        }

        let readings = Readings {
            price: history.last_price().unwrap_or(0.0),
            sma_short: indicators::sma(prices, self.config.short_ma_period),
            sma_long: indicators::sma(prices, self.config.long_ma_period),
            rsi: indicators::rsi(prices, self.config.rsi_period),
            momentum: indicators::momentum(prices, self.config.momentum_period),
            volatility: indicators::volatility(prices, self.config.volatility_period),
        };

        let kind = determine_signal(&readings);
        let strength = signal_strength(kind, readings.momentum);
        let reason = signal_reason(&readings);

        AlphaSignal {
            signal: kind,
            strength,
            reason,
            price: readings.price,
            sma_short: readings.sma_short,
            sma_long: readings.sma_long,
            rsi: readings.rsi,
            momentum: readings.momentum,
            volatility: readings.volatility,
        }
    }
}

/// Combine the indicator readings into a discrete signal
fn determine_signal(r: &Readings) -> SignalKind {
    let mut score = 0i32;

    // Moving average crossover
    if r.sma_short > r.sma_long {
        score += 1;
    } else if r.sma_short < r.sma_long {
        score -= 1;
    }

    // RSI bands: oversold/overbought score double
    if r.rsi < 30.0 {
        score += 2;
    } else if r.rsi < 40.0 {
        score += 1;
    } else if r.rsi > 70.0 {
        score -= 2;
    } else if r.rsi > 60.0 {
        score -= 1;
    }

    // Momentum thresholds
    if r.momentum > 2.0 {
        score += 1;
    } else if r.momentum < -2.0 {
        score -= 1;
    }

    // High volatility damps the score one step toward zero
    if r.volatility > 5.0 {
        score -= score.signum();
    }

    match score {
        s if s >= 3 => SignalKind::StrongBuy,
        s if s >= 1 => SignalKind::Buy,
        s if s <= -3 => SignalKind::StrongSell,
        s if s <= -1 => SignalKind::Sell,
        _ => SignalKind::Hold,
    }
}

/// Confidence in [0, 1]: base plus signal class plus momentum contribution
fn signal_strength(kind: SignalKind, momentum: f64) -> f64 {
    let mut strength = 0.5;

    match kind {
        SignalKind::StrongBuy | SignalKind::StrongSell => strength += 0.3,
        SignalKind::Buy | SignalKind::Sell => strength += 0.2,
        SignalKind::Hold => {}
    }

    strength += (momentum.abs() / 5.0).min(0.2);
    strength.min(1.0)
}

/// Space-joined tokens naming the contributing conditions
fn signal_reason(r: &Readings) -> String {
    let mut tokens: Vec<&str> = Vec::new();

    if r.sma_short > r.sma_long {
        tokens.push("MA↑");
    } else if r.sma_short < r.sma_long {
        tokens.push("MA↓");
    }

    if r.rsi < 30.0 {
        tokens.push("RSI_OS");
    } else if r.rsi > 70.0 {
        tokens.push("RSI_OB");
    } else if r.rsi < 50.0 {
        tokens.push("RSI↓");
    } else {
        tokens.push("RSI↑");
    }

    if r.momentum > 2.0 {
        tokens.push("Mom↑");
    } else if r.momentum < -2.0 {
        tokens.push("Mom↓");
    }

    tokens.join(" ")
}
