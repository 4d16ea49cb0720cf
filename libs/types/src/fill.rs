//! Fill records produced by matching
//!
//! A fill is the atomic unit of execution: one maker/taker pair, one price,
//! one quantity. The book stamps each fill with a monotonic sequence number.

use crate::numeric::{Price, Qty};
use crate::order::Side;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single execution between an incoming order and a resting order
///
/// The price is always the resting (maker) level's price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fill {
    /// Book-monotonic fill sequence number
    pub sequence: u64,
    /// Id of the resting order
    pub maker_order_id: u64,
    /// Id of the incoming order
    pub taker_order_id: u64,
    /// Execution price (maker's price)
    pub price: Price,
    /// Matched quantity in scaled units
    pub quantity: Qty,
    /// Side of the incoming order
    pub taker_side: Side,
}

impl Fill {
    /// Notional value of this fill (price x quantity, scaled units)
    pub fn notional(&self) -> Decimal {
        self.price * self.quantity
    }
}
