//! Feed error taxonomy

use thiserror::Error;

/// Errors surfaced by the ingestion boundary
///
/// Decode errors are per-event and recoverable: the event is dropped and the
/// stream continues. Transport errors end the current connection.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("websocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("malformed trade event: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("trade {trade_id} has unparseable {field}")]
    InvalidField { trade_id: u64, field: &'static str },

    #[error("gave up after {attempts} failed connection attempts")]
    Disconnected { attempts: u32 },
}

/// Convenience alias for feed operations
pub type Result<T> = std::result::Result<T, FeedError>;
