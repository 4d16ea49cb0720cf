//! Trade ingestion adapter
//!
//! Bridges the decoded feed to the core: every aggregate trade becomes a
//! synthetic aggressor order submitted to the book, and the book's updated
//! statistics are pushed into the signal engine. The two components have
//! separate locks; the adapter never holds both at once.

use std::sync::Arc;
use std::time::Instant;

use alpha_signal::{AlphaSignal, SignalEngine};
use matching_engine::{BookStatsSnapshot, SharedOrderBook};
use rust_decimal::prelude::ToPrimitive;
use tracing::debug;
use types::fill::Fill;

use crate::binance;
use crate::error::Result;
use crate::stats::IngestStats;

/// Everything derived from one processed trade event
#[derive(Debug)]
pub struct TickUpdate {
    /// Fills produced by this submission
    pub fills: Vec<Fill>,
    /// Book statistics after the submission
    pub book: BookStatsSnapshot,
    /// Signal computed after this event
    pub signal: AlphaSignal,
    /// Current signal history length
    pub history_size: usize,
}

/// Feed-to-core adapter
pub struct TradeIngestor {
    book: Arc<SharedOrderBook>,
    signals: Arc<SignalEngine>,
    stats: Arc<IngestStats>,
}

impl TradeIngestor {
    /// Create an adapter over shared core components
    pub fn new(
        book: Arc<SharedOrderBook>,
        signals: Arc<SignalEngine>,
        stats: Arc<IngestStats>,
    ) -> Self {
        Self {
            book,
            signals,
            stats,
        }
    }

    /// Process one raw stream payload
    ///
    /// Malformed events count as dropped and leave all core state untouched.
    pub fn process_message(&self, text: &str) -> Result<TickUpdate> {
        let started = Instant::now();

        let order = binance::decode(text)
            .and_then(|trade| trade.to_order())
            .inspect_err(|_| self.stats.record_dropped())?;

        debug!(
            trade_id = order.id,
            price = %order.price,
            quantity = %order.remaining(),
            side = ?order.side,
            "processing trade"
        );

        let fills = self.book.submit(order);
        let book = self.book.snapshot();

        // Feed the series only once a real trade has printed, so the
        // pre-trade zeros never poison the history.
        if let Some(last) = book.last_trade_price {
            self.signals.update(
                last.to_f64(),
                book.total_volume_traded as f64,
                book.vwap.to_f64().unwrap_or(0.0),
            );
        }

        let signal = self.signals.generate();
        let history_size = self.signals.history_size();

        self.stats.record_message(started.elapsed());

        Ok(TickUpdate {
            fills,
            book,
            signal,
            history_size,
        })
    }

    /// Ingestion counters
    pub fn stats(&self) -> &IngestStats {
        &self.stats
    }

    /// Minimum history length before signals activate
    pub fn min_history(&self) -> usize {
        self.signals.config().min_history()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alpha_signal::SignalKind;
    use rust_decimal_macros::dec;

    fn ingestor() -> TradeIngestor {
        TradeIngestor::new(
            Arc::new(SharedOrderBook::new()),
            Arc::new(SignalEngine::default()),
            Arc::new(IngestStats::new()),
        )
    }

    fn agg_trade(id: u64, price: &str, qty: &str, buyer_maker: bool) -> String {
        format!(
            r#"{{"e":"aggTrade","s":"BTCUSDT","a":{},"p":"{}","q":"{}","m":{}}}"#,
            id, price, qty, buyer_maker
        )
    }

    #[test]
    fn test_first_resting_order_does_not_feed_signals() {
        let ingestor = ingestor();

        // Buy aggressor against an empty book: rests, no trade prints
        let update = ingestor
            .process_message(&agg_trade(1, "100.0", "0.5", false))
            .unwrap();

        assert!(update.fills.is_empty());
        assert_eq!(update.book.last_trade_price, None);
        assert_eq!(update.history_size, 0);
        assert_eq!(update.signal.signal, SignalKind::Hold);
    }

    #[test]
    fn test_crossing_trade_updates_book_and_signals() {
        let ingestor = ingestor();

        ingestor
            .process_message(&agg_trade(1, "100.0", "0.5", false))
            .unwrap();
        // Seller aggressor lifts the resting bid at 100
        let update = ingestor
            .process_message(&agg_trade(2, "100.0", "0.3", true))
            .unwrap();

        assert_eq!(update.fills.len(), 1);
        assert_eq!(update.book.total_volume_traded, 300);
        assert_eq!(update.book.vwap, dec!(100));
        assert_eq!(update.history_size, 1);
        assert_eq!(ingestor.stats().messages_processed(), 2);
    }

    #[test]
    fn test_malformed_event_dropped_without_state_change() {
        let ingestor = ingestor();
        ingestor
            .process_message(&agg_trade(1, "100.0", "0.5", false))
            .unwrap();

        let result = ingestor.process_message(r#"{"e":"aggTrade","a":2,"m":true}"#);

        assert!(result.is_err());
        assert_eq!(ingestor.stats().events_dropped(), 1);
        assert_eq!(ingestor.stats().messages_processed(), 1);
        // Book unchanged: the resting bid is still there, nothing traded
        assert_eq!(ingestor.process_message(&agg_trade(3, "100.0", "0.5", true))
            .unwrap()
            .book
            .total_volume_traded, 500);
    }

    #[test]
    fn test_unparseable_numeric_dropped() {
        let ingestor = ingestor();
        let result = ingestor.process_message(&agg_trade(1, "oops", "0.5", false));

        assert!(result.is_err());
        assert_eq!(ingestor.stats().events_dropped(), 1);
    }

    #[test]
    fn test_dust_trade_is_noop_on_book() {
        let ingestor = ingestor();
        let update = ingestor
            .process_message(&agg_trade(1, "100.0", "0.0002", false))
            .unwrap();

        assert!(update.fills.is_empty());
        assert_eq!(update.book.last_trade_price, None);
        // Still counted as a processed message
        assert_eq!(ingestor.stats().messages_processed(), 1);
    }

    #[test]
    fn test_signal_activates_after_enough_trades() {
        let ingestor = ingestor();

        // Alternating maker/taker events at drifting prices: every pair
        // prints a trade, so the series grows once per crossing event.
        let mut id = 0;
        for i in 0..40 {
            let price = format!("{:.1}", 100.0 + i as f64 * 0.1);
            id += 1;
            ingestor
                .process_message(&agg_trade(id, &price, "0.5", false))
                .unwrap();
            id += 1;
            let update = ingestor
                .process_message(&agg_trade(id, &price, "0.5", true))
                .unwrap();

            if update.history_size >= ingestor.min_history() {
                assert_ne!(update.signal.reason, "Insufficient data");
            } else {
                assert_eq!(update.signal.reason, "Insufficient data");
            }
        }

        assert!(ingestor.stats().messages_processed() >= 80);
    }
}
