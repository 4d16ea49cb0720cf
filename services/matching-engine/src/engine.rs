//! Matching engine core
//!
//! A single-instrument book fed from a trade tape. Each submitted order is
//! matched against resting liquidity best-price-first, FIFO within a level,
//! and any remainder rests at its limit price. Cumulative trade statistics
//! are updated per fill, so the stats and the book always agree.

use types::fill::Fill;
use types::numeric::Price;
use types::order::{Order, Side};

use crate::book::{AskBook, BidBook};
use crate::matching::crossing;
use crate::stats::{BookStats, BookStatsSnapshot};

/// Two-sided limit order book with price-time priority matching
#[derive(Debug, Default)]
pub struct OrderBook {
    /// Buy side, best (highest) price first
    bids: BidBook,
    /// Sell side, best (lowest) price first
    asks: AskBook,
    /// Cumulative trade statistics
    stats: BookStats,
    /// Monotonic sequence stamped onto fills
    fill_sequence: u64,
}

impl OrderBook {
    /// Create a new empty book
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit an order: match against the opposite side, rest the remainder
    ///
    /// Takes ownership of the order. Execution price is always the resting
    /// level's price. A zero-quantity order produces no fill and never rests.
    pub fn submit(&mut self, mut order: Order) -> Vec<Fill> {
        let fills = match order.side {
            Side::Buy => self.match_against_asks(&mut order),
            Side::Sell => self.match_against_bids(&mut order),
        };

        if !order.is_complete() {
            match order.side {
                Side::Buy => self.bids.insert_resting(order),
                Side::Sell => self.asks.insert_resting(order),
            }
        }

        fills
    }

    /// Match an incoming buy against the ask side
    fn match_against_asks(&mut self, order: &mut Order) -> Vec<Fill> {
        let mut fills = Vec::new();

        while !order.is_complete() {
            let Some((level_price, level)) = self.asks.best_level_mut() else {
                break;
            };
            if !crossing::incoming_crosses(order.side, order.price, level_price) {
                break;
            }

            while !order.is_complete() {
                let Some(resting) = level.front() else { break };
                let maker_order_id = resting.id;
                let traded = order.remaining().min(resting.remaining());

                self.fill_sequence += 1;
                fills.push(Fill {
                    sequence: self.fill_sequence,
                    maker_order_id,
                    taker_order_id: order.id,
                    price: level_price,
                    quantity: traded,
                    taker_side: order.side,
                });
                self.stats.record_fill(level_price, traded);

                order.fill(traded);
                level.fill_front(traded);
            }

            if level.is_empty() {
                self.asks.remove_level(&level_price);
            }
        }

        fills
    }

    /// Match an incoming sell against the bid side
    fn match_against_bids(&mut self, order: &mut Order) -> Vec<Fill> {
        let mut fills = Vec::new();

        while !order.is_complete() {
            let Some((level_price, level)) = self.bids.best_level_mut() else {
                break;
            };
            if !crossing::incoming_crosses(order.side, order.price, level_price) {
                break;
            }

            while !order.is_complete() {
                let Some(resting) = level.front() else { break };
                let maker_order_id = resting.id;
                let traded = order.remaining().min(resting.remaining());

                self.fill_sequence += 1;
                fills.push(Fill {
                    sequence: self.fill_sequence,
                    maker_order_id,
                    taker_order_id: order.id,
                    price: level_price,
                    quantity: traded,
                    taker_side: order.side,
                });
                self.stats.record_fill(level_price, traded);

                order.fill(traded);
                level.fill_front(traded);
            }

            if level.is_empty() {
                self.bids.remove_level(&level_price);
            }
        }

        fills
    }

    /// Cumulative trade statistics
    pub fn stats(&self) -> &BookStats {
        &self.stats
    }

    /// Consistent point-in-time copy of the statistics
    pub fn snapshot(&self) -> BookStatsSnapshot {
        self.stats.snapshot()
    }

    /// Best bid price, if any
    pub fn best_bid(&self) -> Option<Price> {
        self.bids.best_price()
    }

    /// Best ask price, if any
    pub fn best_ask(&self) -> Option<Price> {
        self.asks.best_price()
    }

    /// Buy side of the book
    pub fn bids(&self) -> &BidBook {
        &self.bids
    }

    /// Sell side of the book
    pub fn asks(&self) -> &AskBook {
        &self.asks
    }
}
