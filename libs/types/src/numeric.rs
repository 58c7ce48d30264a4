//! Fixed-point types for prices and quantities
//!
//! Prices are stored as a signed 64-bit count of cents, so `104.53` on the
//! wire is the integer `10453` in memory. All arithmetic is integral and
//! deterministic. Both types serialize as strings to prevent JSON number
//! precision loss.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a wire value does not lex as a price.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid price literal")]
pub struct ParsePriceError;

/// Price in cents (two implied decimal places)
///
/// The wire form is exactly `d+.dd`: at least one integer digit, a dot, and
/// exactly two fractional digits. `0.00` is reserved for Market orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(i64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Raw integer cents, as emitted in trade prints.
    pub fn cents(&self) -> i64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

impl FromStr for Price {
    type Err = ParsePriceError;

    /// Strict `d+.dd` lexer: no sign, no extra fraction digits, no junk.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (whole, frac) = s.split_once('.').ok_or(ParsePriceError)?;
        if whole.is_empty() || frac.len() != 2 {
            return Err(ParsePriceError);
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParsePriceError);
        }
        let whole: i64 = whole.parse().map_err(|_| ParsePriceError)?;
        // Two digits, cannot fail
        let frac: i64 = frac.parse().map_err(|_| ParsePriceError)?;
        whole
            .checked_mul(100)
            .and_then(|cents| cents.checked_add(frac))
            .map(Price)
            .ok_or(ParsePriceError)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, (self.0 % 100).abs())
    }
}

// Custom serialization to preserve precision
impl Serialize for Price {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Order quantity
///
/// Strictly positive for every live order; zero only as a transient value
/// while the book consumes an entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(i64);

impl Quantity {
    pub fn new(quantity: i64) -> Self {
        Self(quantity)
    }

    pub fn zero() -> Self {
        Self(0)
    }

    pub fn get(&self) -> i64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn checked_sub(&self, rhs: Quantity) -> Option<Quantity> {
        self.0.checked_sub(rhs.0).filter(|q| *q >= 0).map(Quantity)
    }
}

impl Add for Quantity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Quantity {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        debug_assert!(self.0 >= rhs.0, "quantity subtraction went negative");
        Self(self.0 - rhs.0)
    }
}

// Custom serialization to preserve precision
impl Serialize for Quantity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let quantity: i64 = s.parse().map_err(serde::de::Error::custom)?;
        Ok(Self(quantity))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
