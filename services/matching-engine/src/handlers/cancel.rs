//! Cancel handler

use types::errors::Reject;
use types::ids::{OrderId, Timestamp};

use crate::book::OrderBook;

/// Parsed `X` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelRequest {
    pub order_id: OrderId,
    pub timestamp: Timestamp,
}

pub fn execute(book: &mut OrderBook, request: &CancelRequest) -> Result<(), Reject> {
    if !request.order_id.is_valid() || request.timestamp < 0 {
        return Err(Reject::InvalidCancelDetails);
    }
    if !book.is_live(request.order_id) {
        return Err(Reject::OrderNotFound);
    }
    book.erase(request.order_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::ids::Symbol;
    use types::numeric::{Price, Quantity};
    use types::order::{Order, OrderType, Side};

    fn seed(book: &mut OrderBook, id: u32) {
        book.add(Order {
            order_id: OrderId::new(id),
            timestamp: 1,
            symbol: Symbol::from("XYZ"),
            order_type: OrderType::Limit,
            side: Side::Buy,
            price: Price::from_cents(10000),
            quantity: Quantity::new(100),
        });
    }

    #[test]
    fn test_cancel_live_order() {
        let mut book = OrderBook::new();
        seed(&mut book, 7);

        let request = CancelRequest {
            order_id: OrderId::new(7),
            timestamp: 2,
        };
        assert_eq!(execute(&mut book, &request), Ok(()));
        assert!(!book.is_live(OrderId::new(7)));
    }

    #[test]
    fn test_double_cancel_hits_not_found() {
        let mut book = OrderBook::new();
        seed(&mut book, 7);

        let request = CancelRequest {
            order_id: OrderId::new(7),
            timestamp: 2,
        };
        assert_eq!(execute(&mut book, &request), Ok(()));
        assert_eq!(execute(&mut book, &request), Err(Reject::OrderNotFound));
        // idempotent: the second attempt does not mutate anything
        assert_eq!(book.live_count(), 0);
    }

    #[test]
    fn test_invalid_fields_reject_before_existence_check() {
        let mut book = OrderBook::new();

        let request = CancelRequest {
            order_id: OrderId::new(0),
            timestamp: 2,
        };
        assert_eq!(execute(&mut book, &request), Err(Reject::InvalidCancelDetails));

        let request = CancelRequest {
            order_id: OrderId::new(1),
            timestamp: -1,
        };
        assert_eq!(execute(&mut book, &request), Err(Reject::InvalidCancelDetails));
    }
}
