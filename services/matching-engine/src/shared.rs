//! Thread-safe book wrapper
//!
//! One writer (the feed callback) and any number of metric readers. The
//! whole submission — fills, stats updates, remainder resting — happens
//! under the write lock, so a reader observes either the pre-submit or the
//! post-submit state, never a partial one.

use parking_lot::RwLock;
use rust_decimal::Decimal;
use types::fill::Fill;
use types::numeric::Price;
use types::order::Order;

use crate::engine::OrderBook;
use crate::stats::BookStatsSnapshot;

/// Shared, internally synchronized order book
#[derive(Debug, Default)]
pub struct SharedOrderBook {
    inner: RwLock<OrderBook>,
}

impl SharedOrderBook {
    /// Create a new empty shared book
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(OrderBook::new()),
        }
    }

    /// Submit an order; the entire matching pass is atomic for readers
    pub fn submit(&self, order: Order) -> Vec<Fill> {
        self.inner.write().submit(order)
    }

    /// Price of the most recent fill
    pub fn last_trade_price(&self) -> Option<Price> {
        self.inner.read().stats().last_trade_price()
    }

    /// Volume-weighted average price over all fills; zero before any trade
    pub fn vwap(&self) -> Decimal {
        self.inner.read().stats().vwap()
    }

    /// Cumulative matched quantity, in scaled units
    pub fn total_volume(&self) -> u64 {
        self.inner.read().stats().total_volume_traded()
    }

    /// Cumulative notional across all fills
    pub fn cumulative_notional(&self) -> Decimal {
        self.inner.read().stats().cumulative_notional()
    }

    /// Consistent snapshot of all statistics under one read lock
    pub fn snapshot(&self) -> BookStatsSnapshot {
        self.inner.read().snapshot()
    }
}
