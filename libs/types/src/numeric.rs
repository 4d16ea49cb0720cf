//! Numeric types for prices and quantities
//!
//! Prices use rust_decimal so that feed prices (quantized decimal strings)
//! compare exactly when used as ordered map keys. Quantities are scaled
//! integers: the feed's fractional quantities are converted at a fixed scale
//! and all book arithmetic stays integral.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Scale applied to external fractional quantities: 3 decimal places.
pub const QTY_SCALE: u32 = 1000;

/// Price with fixed-point decimal representation
///
/// Must always be positive. Ordered, so it can key the book's side maps.
/// Serialized as a string to prevent JSON number precision loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(Decimal);

impl Price {
    /// Create a new Price from a Decimal
    ///
    /// # Panics
    /// Panics if the price is not strictly positive
    pub fn new(value: Decimal) -> Self {
        assert!(value > Decimal::ZERO, "Price must be positive");
        Self(value)
    }

    /// Try to create a Price, returning None if not strictly positive
    pub fn try_new(value: Decimal) -> Option<Self> {
        if value > Decimal::ZERO {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Create from integer (for testing/convenience)
    pub fn from_u64(value: u64) -> Self {
        Self::new(Decimal::from(value))
    }

    /// Parse a decimal string as sent by the feed
    ///
    /// Returns None for unparseable or non-positive input.
    pub fn parse(s: &str) -> Option<Self> {
        Decimal::from_str(s).ok().and_then(Self::try_new)
    }

    /// Get the inner decimal value
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Lossy conversion for indicator math
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(0.0)
    }
}

impl Mul<Qty> for Price {
    type Output = Decimal;

    /// Notional value of a quantity at this price (in scaled quantity units)
    fn mul(self, rhs: Qty) -> Self::Output {
        self.0 * Decimal::from(rhs.0)
    }
}

// Custom serialization to preserve precision
impl Serialize for Price {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let decimal = Decimal::from_str(&s).map_err(serde::de::Error::custom)?;
        Self::try_new(decimal).ok_or_else(|| serde::de::Error::custom("Price must be positive"))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Order quantity in scaled integer units
///
/// One unit is 1/1000 of the instrument's base quantity. Zero is
/// representable: a fully-filled order carries a zero remaining quantity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Qty(u32);

impl Qty {
    /// Create from already-scaled units
    pub fn from_scaled(units: u32) -> Self {
        Self(units)
    }

    /// Convert an external fractional quantity at QTY_SCALE resolution
    ///
    /// Truncates toward zero. Float-to-int casts saturate, so non-finite and
    /// oversized inputs clamp rather than wrap.
    pub fn from_external(quantity: f64) -> Self {
        Self((quantity * f64::from(QTY_SCALE)).floor() as u32)
    }

    /// Zero quantity
    pub fn zero() -> Self {
        Self(0)
    }

    /// Check if quantity is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Scaled units as u32
    pub fn as_scaled(&self) -> u32 {
        self.0
    }

    /// Scaled units widened for cumulative counters
    pub fn as_u64(&self) -> u64 {
        u64::from(self.0)
    }
}

impl Add for Qty {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Qty {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        assert!(self.0 >= rhs.0, "Qty subtraction would underflow");
        Self(self.0 - rhs.0)
    }
}

impl fmt::Display for Qty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
