//! Crossing detection and execution pricing

use crate::book::LevelEntry;
use types::numeric::Price;

/// A bid and an ask can trade when the bid price is at or above the ask.
pub fn crosses(bid_price: Price, ask_price: Price) -> bool {
    bid_price >= ask_price
}

/// Execution price of a crossing pair: the resting side's price.
///
/// Resting is the order that entered the book first, i.e. the smaller
/// arrival sequence; the later arrival is the aggressor.
pub fn execution_price(bid: &LevelEntry, ask: &LevelEntry) -> Price {
    if bid.seq() < ask.seq() {
        bid.order().price
    } else {
        ask.order().price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::OrderBook;
    use types::ids::{OrderId, Symbol};
    use types::numeric::Quantity;
    use types::order::{Order, OrderType, Side};

    #[test]
    fn test_crosses() {
        assert!(crosses(Price::from_cents(10100), Price::from_cents(10000)));
        assert!(crosses(Price::from_cents(10000), Price::from_cents(10000)));
        assert!(!crosses(Price::from_cents(9900), Price::from_cents(10000)));
    }

    fn order(id: u32, side: Side, price_cents: i64) -> Order {
        Order {
            order_id: OrderId::new(id),
            timestamp: id as i64,
            symbol: Symbol::from("XYZ"),
            order_type: OrderType::Limit,
            side,
            price: Price::from_cents(price_cents),
            quantity: Quantity::new(10),
        }
    }

    #[test]
    fn test_execution_price_is_resting_side() {
        // Bid rests first, sell crosses it: trade at the bid's price.
        let mut book = OrderBook::new();
        book.add(order(1, Side::Buy, 10100));
        book.add(order(2, Side::Sell, 10000));
        let price = execution_price(book.best_bid().unwrap(), book.best_ask().unwrap());
        assert_eq!(price, Price::from_cents(10100));

        // Ask rests first, buy crosses it: trade at the ask's price.
        let mut book = OrderBook::new();
        book.add(order(2, Side::Sell, 10000));
        book.add(order(1, Side::Buy, 10100));
        let price = execution_price(book.best_bid().unwrap(), book.best_ask().unwrap());
        assert_eq!(price, Price::from_cents(10000));
    }
}
