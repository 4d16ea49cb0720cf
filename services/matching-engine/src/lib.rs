//! Matching engine for a single-instrument synthetic book
//!
//! Consumes orders derived from a live trade tape and maintains:
//! - a two-sided, price-indexed limit order book with price-time priority
//!   matching, partial fills, and remainder resting
//! - cumulative trade statistics (last price, volume, notional, VWAP)
//!
//! # Modules
//! - `book`: price levels and the bid/ask side maps
//! - `matching`: crossing predicate
//! - `engine`: the matching loop and the single-threaded `OrderBook`
//! - `stats`: cumulative statistics, updated per fill
//! - `shared`: the internally synchronized `SharedOrderBook` wrapper

pub mod book;
pub mod engine;
pub mod matching;
pub mod shared;
pub mod stats;

pub use engine::OrderBook;
pub use shared::SharedOrderBook;
pub use stats::{BookStats, BookStatsSnapshot};
