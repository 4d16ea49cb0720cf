//! Order types for the synthetic book
//!
//! Orders are derived from the feed's aggregate trades: the id is the
//! exchange-assigned aggregate trade id, and the remaining quantity is the
//! only field that changes after construction (it decreases during matching).

use crate::numeric::{Price, Qty};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order (bid)
    Buy,
    /// Sell order (ask)
    Sell,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

/// A limit order owned by the book while it rests
///
/// The header fields (id, price, side, entry time) are immutable after
/// construction. `remaining` only decreases; zero marks the order complete.
#[derive(Debug, Clone)]
pub struct Order {
    /// Exchange-assigned identifier (aggregate trade id)
    pub id: u64,
    /// Limit price
    pub price: Price,
    /// Side of the book this order belongs to
    pub side: Side,
    /// Unfilled quantity in scaled units
    remaining: Qty,
    /// Monotonic entry timestamp, captured at construction
    entry_time: Instant,
}

impl Order {
    /// Create a new order, capturing the entry time from the monotonic clock
    pub fn new(id: u64, price: Price, quantity: Qty, side: Side) -> Self {
        Self {
            id,
            price,
            side,
            remaining: quantity,
            entry_time: Instant::now(),
        }
    }

    /// Unfilled quantity
    pub fn remaining(&self) -> Qty {
        self.remaining
    }

    /// Monotonic entry timestamp
    pub fn entry_time(&self) -> Instant {
        self.entry_time
    }

    /// Reduce the remaining quantity by a fill
    ///
    /// # Panics
    /// Panics if the fill exceeds the remaining quantity
    pub fn fill(&mut self, traded: Qty) {
        self.remaining = self.remaining - traded;
    }

    /// Whether the order is fully filled
    pub fn is_complete(&self) -> bool {
        self.remaining.is_zero()
    }
}
