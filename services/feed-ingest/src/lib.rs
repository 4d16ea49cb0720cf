//! Feed ingestion boundary
//!
//! Decodes Binance aggregate-trade events, submits them to the matching
//! engine as synthetic aggressor orders, and pushes the resulting book
//! metrics into the alpha-signal engine.
//!
//! # Modules
//! - `binance`: wire format and decoding
//! - `config`: stream endpoint and reconnect policy
//! - `error`: feed error taxonomy
//! - `ingest`: the feed-to-core adapter
//! - `stats`: lock-free ingestion counters
//! - `report`: live status-line rendering
//! - `ws`: the WebSocket runtime loop

pub mod binance;
pub mod config;
pub mod error;
pub mod ingest;
pub mod report;
pub mod stats;
pub mod ws;

pub use config::FeedConfig;
pub use error::FeedError;
pub use ingest::{TickUpdate, TradeIngestor};
pub use stats::IngestStats;
