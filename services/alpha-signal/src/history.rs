//! Bounded rolling sample history
//!
//! Three parallel series (price, volume, VWAP) grown in lockstep and evicted
//! in lockstep, so indexes always align across them.

use std::collections::VecDeque;

/// Rolling windows of the book-derived series
#[derive(Debug, Clone)]
pub struct History {
    prices: VecDeque<f64>,
    volumes: VecDeque<f64>,
    vwaps: VecDeque<f64>,
    max_len: usize,
}

impl History {
    /// Create empty history bounded at `max_len` samples per series
    pub fn new(max_len: usize) -> Self {
        Self {
            prices: VecDeque::with_capacity(max_len),
            volumes: VecDeque::with_capacity(max_len),
            vwaps: VecDeque::with_capacity(max_len),
            max_len,
        }
    }

    /// Append one sample to all three series, evicting the oldest at capacity
    pub fn push(&mut self, price: f64, volume: f64, vwap: f64) {
        self.prices.push_back(price);
        self.volumes.push_back(volume);
        self.vwaps.push_back(vwap);

        if self.prices.len() > self.max_len {
            self.prices.pop_front();
            self.volumes.pop_front();
            self.vwaps.pop_front();
        }
    }

    /// Number of samples currently held
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Whether no samples have been recorded yet
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Price series, oldest first
    pub fn prices(&self) -> &VecDeque<f64> {
        &self.prices
    }

    /// Volume series, oldest first
    pub fn volumes(&self) -> &VecDeque<f64> {
        &self.volumes
    }

    /// VWAP series, oldest first
    pub fn vwaps(&self) -> &VecDeque<f64> {
        &self.vwaps
    }

    /// Most recent price, if any
    pub fn last_price(&self) -> Option<f64> {
        self.prices.back().copied()
    }
}
