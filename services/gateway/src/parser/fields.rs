//! Field lexers
//!
//! Strict by construction: integers are unsigned digit runs with no sign,
//! decimals, or trailing junk; prices are exactly `d+.dd`. Syntax and range
//! live here — semantic positivity (id > 0, qty > 0) is a handler concern,
//! so that bad values surface as coded rejections rather than vanishing at
//! parse time.

use types::ids::{OrderId, Timestamp};
use types::numeric::{Price, Quantity};
use types::order::{OrderType, Side};

/// Strict unsigned decimal integer. Overflow rejects.
fn parse_u64_strict(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

pub fn parse_order_id(s: &str) -> Option<OrderId> {
    let raw = parse_u64_strict(s)?;
    u32::try_from(raw).ok().map(OrderId::new)
}

pub fn parse_timestamp(s: &str) -> Option<Timestamp> {
    let raw = parse_u64_strict(s)?;
    i64::try_from(raw).ok()
}

pub fn parse_quantity(s: &str) -> Option<Quantity> {
    let raw = parse_u64_strict(s)?;
    i64::try_from(raw).ok().map(Quantity::new)
}

pub fn parse_price(s: &str) -> Option<Price> {
    s.parse().ok()
}

pub fn parse_side(s: &str) -> Option<Side> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Side::from_char(c),
        _ => None,
    }
}

pub fn parse_order_type(s: &str) -> Option<OrderType> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => OrderType::from_char(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_range() {
        assert_eq!(parse_order_id("7"), Some(OrderId::new(7)));
        assert_eq!(parse_order_id("0"), Some(OrderId::new(0)));
        assert_eq!(parse_order_id("4294967295"), Some(OrderId::new(u32::MAX)));
        assert_eq!(parse_order_id("4294967296"), None);
    }

    #[test]
    fn test_integers_reject_sign_and_junk() {
        for bad in ["", "-1", "+1", "1.0", "1a", " 1", "1 ", "0x10"] {
            assert_eq!(parse_order_id(bad), None, "lexed {:?}", bad);
            assert_eq!(parse_timestamp(bad), None, "lexed {:?}", bad);
            assert_eq!(parse_quantity(bad), None, "lexed {:?}", bad);
        }
    }

    #[test]
    fn test_timestamp_range() {
        assert_eq!(parse_timestamp("0"), Some(0));
        assert_eq!(parse_timestamp("9223372036854775807"), Some(i64::MAX));
        assert_eq!(parse_timestamp("9223372036854775808"), None);
    }

    #[test]
    fn test_quantity_accepts_zero_for_handler_rejection() {
        assert_eq!(parse_quantity("0"), Some(Quantity::new(0)));
        assert_eq!(parse_quantity("100"), Some(Quantity::new(100)));
    }

    #[test]
    fn test_price() {
        assert_eq!(parse_price("104.53"), Some(Price::from_cents(10453)));
        assert_eq!(parse_price("0.00"), Some(Price::ZERO));
        assert_eq!(parse_price("104.5"), None);
        assert_eq!(parse_price("104"), None);
    }

    #[test]
    fn test_side() {
        assert_eq!(parse_side("B"), Some(Side::Buy));
        assert_eq!(parse_side("S"), Some(Side::Sell));
        assert_eq!(parse_side("b"), None);
        assert_eq!(parse_side("BS"), None);
        assert_eq!(parse_side(""), None);
    }

    #[test]
    fn test_order_type() {
        assert_eq!(parse_order_type("M"), Some(OrderType::Market));
        assert_eq!(parse_order_type("L"), Some(OrderType::Limit));
        assert_eq!(parse_order_type("I"), Some(OrderType::IOC));
        assert_eq!(parse_order_type("X"), None);
        assert_eq!(parse_order_type("ML"), None);
    }
}
