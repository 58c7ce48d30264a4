//! Client-supplied identifiers
//!
//! All identity here comes from the wire: order ids, timestamps, and ticker
//! symbols are chosen by the client and carried, not generated. Validity is a
//! query on the type rather than a constructor invariant so that handlers can
//! turn bad values into the coded rejections the protocol requires.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp supplied by the client, non-negative once validated.
///
/// Carried in data only; the engine never uses it to reorder events.
pub type Timestamp = i64;

/// Unique identifier for an order, supplied by the client.
///
/// Positive 32-bit integer. Zero is representable so that the New/Amend/Cancel
/// handlers can reject it with the proper code instead of the parser silently
/// dropping the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u32);

impl OrderId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Live orders must have a strictly positive id.
    pub fn is_valid(&self) -> bool {
        self.0 > 0
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ticker symbol (instrument identifier)
///
/// Valid symbols are non-empty, ASCII alphabetic, case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    /// Non-empty and ASCII letters only.
    pub fn is_valid(&self) -> bool {
        !self.0.is_empty() && self.0.bytes().all(|b| b.is_ascii_alphabetic())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_validity() {
        assert!(OrderId::new(1).is_valid());
        assert!(OrderId::new(u32::MAX).is_valid());
        assert!(!OrderId::new(0).is_valid());
    }

    #[test]
    fn test_order_id_display() {
        assert_eq!(OrderId::new(42).to_string(), "42");
    }

    #[test]
    fn test_order_id_serialization() {
        let id = OrderId::new(7);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "7");

        let deserialized: OrderId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_symbol_validity() {
        assert!(Symbol::from("XYZ").is_valid());
        assert!(Symbol::from("abc").is_valid());
        assert!(Symbol::from("AbC").is_valid());

        assert!(!Symbol::from("").is_valid());
        assert!(!Symbol::from("XY1").is_valid());
        assert!(!Symbol::from("X Y").is_valid());
        assert!(!Symbol::from("ÖBB").is_valid());
    }

    #[test]
    fn test_symbol_case_sensitive() {
        assert_ne!(Symbol::from("XYZ"), Symbol::from("xyz"));
    }

    #[test]
    fn test_symbol_serialization() {
        let symbol = Symbol::from("XYZ");
        let json = serde_json::to_string(&symbol).unwrap();
        assert_eq!(json, "\"XYZ\"");

        let deserialized: Symbol = serde_json::from_str(&json).unwrap();
        assert_eq!(symbol, deserialized);
    }
}
