//! Technical indicators over the rolling price series
//!
//! All functions operate on the last N samples of an oldest-first series and
//! return a defined neutral value when the window is not yet full: 0 for the
//! averages, momentum, and volatility; 50 (neutral) for RSI.

use std::collections::VecDeque;

/// Simple moving average of the last `period` values
pub fn sma(data: &VecDeque<f64>, period: usize) -> f64 {
    if period == 0 || data.len() < period {
        return 0.0;
    }
    let sum: f64 = data.iter().skip(data.len() - period).sum();
    sum / period as f64
}

/// Exponential moving average seeded `period` samples back
pub fn ema(data: &VecDeque<f64>, period: usize) -> f64 {
    if period == 0 || data.len() < period {
        return 0.0;
    }
    let multiplier = 2.0 / (period as f64 + 1.0);
    let mut iter = data.iter().skip(data.len() - period);
    let mut ema = *iter.next().expect("window is non-empty");
    for &value in iter {
        ema = (value - ema) * multiplier + ema;
    }
    ema
}

/// Relative strength index over the last `period` price changes
///
/// Un-smoothed mean variant: plain averages of gains and losses, not
/// Wilder's exponential smoothing. Needs `period + 1` prices; returns the
/// neutral 50 otherwise. Zero average loss pins the result at 100.
pub fn rsi(prices: &VecDeque<f64>, period: usize) -> f64 {
    if period == 0 || prices.len() < period + 1 {
        return 50.0;
    }

    let mut gains = 0.0;
    let mut losses = 0.0;
    for i in prices.len() - period..prices.len() {
        let change = prices[i] - prices[i - 1];
        if change > 0.0 {
            gains += change;
        } else {
            losses += -change;
        }
    }

    let avg_gain = gains / period as f64;
    let avg_loss = losses / period as f64;

    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - 100.0 / (1.0 + rs)
}

/// Rate-of-change momentum: percent change versus `period` samples ago
///
/// Needs `period + 1` prices; returns 0 otherwise.
pub fn momentum(prices: &VecDeque<f64>, period: usize) -> f64 {
    if period == 0 || prices.len() < period + 1 {
        return 0.0;
    }
    let current = prices[prices.len() - 1];
    let past = prices[prices.len() - 1 - period];
    (current - past) / past * 100.0
}

/// Coefficient-of-variation volatility over the last `period` prices
///
/// Population standard deviation divided by the window mean, as a
/// percentage. Needs `period + 1` prices; returns 0 otherwise, and 0 when
/// the mean is not strictly positive.
pub fn volatility(prices: &VecDeque<f64>, period: usize) -> f64 {
    if period == 0 || prices.len() < period + 1 {
        return 0.0;
    }

    let mean = sma(prices, period);
    if mean <= 0.0 {
        return 0.0;
    }

    let variance: f64 = prices
        .iter()
        .skip(prices.len() - period)
        .map(|&value| {
            let diff = value - mean;
            diff * diff
        })
        .sum::<f64>()
        / period as f64;

    variance.sqrt() / mean * 100.0
}
