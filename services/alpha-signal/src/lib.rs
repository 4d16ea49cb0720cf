//! Alpha signal engine
//!
//! Consumes the (price, volume, VWAP) series derived from the order book and
//! emits a discrete directional recommendation with a confidence score.
//!
//! # Modules
//! - `config`: indicator periods and history bound
//! - `history`: bounded lockstep rolling series
//! - `indicators`: SMA, EMA, mean-based RSI, momentum, volatility
//! - `signal`: `SignalKind` and the `AlphaSignal` snapshot
//! - `engine`: scoring rule and the synchronized `SignalEngine`

pub mod config;
pub mod engine;
pub mod history;
pub mod indicators;
pub mod signal;

pub use config::SignalConfig;
pub use engine::SignalEngine;
pub use signal::{AlphaSignal, SignalKind};
