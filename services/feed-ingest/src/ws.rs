//! WebSocket runtime for the trade stream
//!
//! Connects to the aggregate-trade stream, answers pings, hands every text
//! payload to the ingestor, and reconnects with a bounded number of
//! consecutive failed attempts. The core components never see transport
//! failures: a disconnect just stops the flow of submissions.

use std::time::Instant;

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};
use tracing::{info, warn};

use crate::config::FeedConfig;
use crate::error::{FeedError, Result};
use crate::ingest::{TickUpdate, TradeIngestor};

/// Run the feed until the retry budget is exhausted
///
/// `on_update` is invoked once per successfully processed event.
pub async fn run<F>(config: &FeedConfig, ingestor: &TradeIngestor, mut on_update: F) -> Result<()>
where
    F: FnMut(&TickUpdate),
{
    let mut failures = 0u32;

    loop {
        let url = config.stream_url();
        info!(%url, "connecting to trade stream");
        let connected_at = Instant::now();

        match connect_async(url.as_str()).await {
            Ok((stream, _)) => {
                info!(
                    elapsed_ms = connected_at.elapsed().as_millis() as u64,
                    "connected to trade stream"
                );
                failures = 0;

                let session_start_messages = ingestor.stats().messages_processed();
                if let Err(error) = drive_stream(stream, ingestor, &mut on_update, connected_at).await
                {
                    warn!(%error, "stream ended with error");
                }

                let duration = connected_at.elapsed();
                let session_messages =
                    ingestor.stats().messages_processed() - session_start_messages;
                let throughput = session_messages as f64 / duration.as_secs_f64().max(1e-9);
                info!(
                    duration_secs = duration.as_secs(),
                    messages = session_messages,
                    messages_per_sec = throughput,
                    "trade stream session ended"
                );
            }
            Err(error) => {
                failures += 1;
                warn!(%error, attempt = failures, "connection failed");
                if failures >= config.reconnect_max_attempts {
                    return Err(FeedError::Disconnected { attempts: failures });
                }
            }
        }

        tokio::time::sleep(config.reconnect_delay).await;
    }
}

/// Pump one established connection until it closes
async fn drive_stream<F>(
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
    ingestor: &TradeIngestor,
    on_update: &mut F,
    connected_at: Instant,
) -> Result<()>
where
    F: FnMut(&TickUpdate),
{
    let (mut write, mut read) = stream.split();
    let mut first_message_seen = false;

    while let Some(message) = read.next().await {
        match message? {
            Message::Text(text) => {
                if !first_message_seen {
                    first_message_seen = true;
                    info!(
                        elapsed_ms = connected_at.elapsed().as_millis() as u64,
                        "first message received"
                    );
                }
                match ingestor.process_message(&text) {
                    Ok(update) => on_update(&update),
                    Err(error) => warn!(%error, "dropping malformed trade event"),
                }
            }
            // Binance pings every few minutes and expects a mirrored pong
            Message::Ping(payload) => write.send(Message::Pong(payload)).await?,
            Message::Close(frame) => {
                info!(?frame, "close frame received");
                break;
            }
            _ => {}
        }
    }

    Ok(())
}
