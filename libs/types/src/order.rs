//! Order record and its enums

use crate::ids::{OrderId, Symbol, Timestamp};
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};

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

    /// Wire character: `B` or `S`
    pub fn as_char(&self) -> char {
        match self {
            Side::Buy => 'B',
            Side::Sell => 'S',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'B' => Some(Side::Buy),
            'S' => Some(Side::Sell),
            _ => None,
        }
    }
}

/// Order type
///
/// Market orders carry price `0.00` and are willing to trade at any price;
/// IOC orders match like Limit orders but never rest across a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    Market,
    Limit,
    IOC,
}

impl OrderType {
    /// Wire character: `M`, `L`, or `I`
    pub fn as_char(&self) -> char {
        match self {
            OrderType::Market => 'M',
            OrderType::Limit => 'L',
            OrderType::IOC => 'I',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'M' => Some(OrderType::Market),
            'L' => Some(OrderType::Limit),
            'I' => Some(OrderType::IOC),
            _ => None,
        }
    }
}

/// One live order's state
///
/// Plain copyable record; it never holds a reference back into the book.
/// `quantity` is strictly positive for as long as the order is live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub timestamp: Timestamp,
    pub symbol: Symbol,
    pub order_type: OrderType,
    pub side: Side,
    pub price: Price,
    pub quantity: Quantity,
}
