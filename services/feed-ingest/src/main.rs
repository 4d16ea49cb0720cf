//! ApexLOB entrypoint: live Binance feed into the book and signal engine

use std::io::Write;
use std::sync::Arc;

use alpha_signal::{SignalEngine, SignalKind};
use anyhow::Context;
use matching_engine::SharedOrderBook;
use tracing::info;
use tracing_subscriber::EnvFilter;

use feed_ingest::{report, ws, FeedConfig, IngestStats, TradeIngestor};

/// Install the tracing subscriber
///
/// `RUST_LOG` controls verbosity; `APEXLOB_LOG` redirects output to a file.
fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match std::env::var("APEXLOB_LOG") {
        Ok(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("failed to open log file {}", path))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        Err(_) => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let config = FeedConfig::from_env();

    info!("ApexLOB trading engine starting");
    info!(
        symbol = %config.symbol,
        "alpha signals enabled: SMA(10/30), RSI(14), Momentum(10), Volatility(20)"
    );

    let book = Arc::new(SharedOrderBook::new());
    let signals = Arc::new(SignalEngine::default());
    let stats = Arc::new(IngestStats::new());
    let ingestor = TradeIngestor::new(book, signals, stats);
    let min_history = ingestor.min_history();

    let result = ws::run(&config, &ingestor, |update| {
        let line = report::status_line(update, &ingestor.stats().snapshot(), min_history);
        print!("\r{}", line);
        let _ = std::io::stdout().flush();

        if matches!(
            update.signal.signal,
            SignalKind::StrongBuy | SignalKind::StrongSell
        ) {
            info!(
                signal = %update.signal.signal,
                strength = update.signal.strength,
                rsi = update.signal.rsi,
                "strong signal generated"
            );
        }
    })
    .await;

    println!();
    let final_stats = ingestor.stats().snapshot();
    info!(
        messages = final_stats.message_count,
        dropped = final_stats.events_dropped,
        avg_processing_ms = final_stats.avg_processing_ms,
        "ApexLOB trading engine shutting down"
    );

    result.context("trade feed terminated")
}
