//! Cumulative trade statistics
//!
//! Updated on every fill, under the same lock as the book itself, so a
//! reader always observes a consistent (last price, volume, notional) triple.

use rust_decimal::Decimal;
use serde::Serialize;
use types::numeric::{Price, Qty};

/// Running totals across all fills since the book was created
#[derive(Debug, Clone, Default)]
pub struct BookStats {
    /// Price of the most recent fill; None until the first trade prints
    last_trade_price: Option<Price>,
    /// Cumulative matched quantity, in scaled units
    total_volume_traded: u64,
    /// Cumulative sum of fill price x fill quantity
    cumulative_notional: Decimal,
}

impl BookStats {
    /// Create zeroed stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one fill
    pub fn record_fill(&mut self, price: Price, quantity: Qty) {
        self.last_trade_price = Some(price);
        self.total_volume_traded += quantity.as_u64();
        self.cumulative_notional += price * quantity;
    }

    /// Price of the most recent fill
    pub fn last_trade_price(&self) -> Option<Price> {
        self.last_trade_price
    }

    /// Cumulative matched quantity, in scaled units
    pub fn total_volume_traded(&self) -> u64 {
        self.total_volume_traded
    }

    /// Cumulative notional across all fills
    pub fn cumulative_notional(&self) -> Decimal {
        self.cumulative_notional
    }

    /// Volume-weighted average price over all fills; zero before any trade
    pub fn vwap(&self) -> Decimal {
        if self.total_volume_traded > 0 {
            self.cumulative_notional / Decimal::from(self.total_volume_traded)
        } else {
            Decimal::ZERO
        }
    }

    /// Consistent point-in-time copy of all stats
    pub fn snapshot(&self) -> BookStatsSnapshot {
        BookStatsSnapshot {
            last_trade_price: self.last_trade_price,
            total_volume_traded: self.total_volume_traded,
            cumulative_notional: self.cumulative_notional,
            vwap: self.vwap(),
        }
    }
}

/// Point-in-time view of the book statistics
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BookStatsSnapshot {
    pub last_trade_price: Option<Price>,
    pub total_volume_traded: u64,
    pub cumulative_notional: Decimal,
    pub vwap: Decimal,
}
