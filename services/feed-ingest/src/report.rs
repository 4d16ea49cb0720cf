//! Live metrics status line
//!
//! Plain-text rendering of the book metrics and the current signal. Display
//! only: nothing here feeds back into the core.

use crate::ingest::TickUpdate;
use crate::stats::IngestStatsSnapshot;
use rust_decimal::prelude::ToPrimitive;

/// Render the one-line live status for the latest processed event
pub fn status_line(
    update: &TickUpdate,
    ingest: &IngestStatsSnapshot,
    min_history: usize,
) -> String {
    let last = update
        .book
        .last_trade_price
        .map(|p| p.to_f64())
        .unwrap_or(0.0);
    let vwap = update.book.vwap.to_f64().unwrap_or(0.0);

    let mut line = format!(
        "[LOB] Last: {:.2} | VWAP: {:.2} | Vol: {} | Msg: {} | AvgProc: {:.3}ms",
        last, vwap, update.book.total_volume_traded, ingest.message_count, ingest.avg_processing_ms
    );

    if update.history_size >= min_history {
        line.push_str(&format!(
            " | [ALPHA] {} ({:.1}%) | RSI: {:.1} | Mom: {:.2}% | {}",
            update.signal.signal,
            update.signal.strength * 100.0,
            update.signal.rsi,
            update.signal.momentum,
            update.signal.reason
        ));
    } else {
        line.push_str(&format!(
            " | [ALPHA] Collecting data... ({}/{})",
            update.history_size, min_history
        ));
    }

    line
}
