//! New-order handler
//!
//! Validates an incoming order and inserts it at the tail of its price
//! level. Every failure, including a duplicate id, surfaces as the same
//! coded rejection.

use types::errors::Reject;
use types::order::{Order, OrderType};

use crate::book::OrderBook;

pub fn execute(book: &mut OrderBook, order: Order) -> Result<(), Reject> {
    if !is_valid(&order) {
        return Err(Reject::InvalidOrderDetails);
    }
    // Duplicate id keeps the same code/message as malformed fields
    if !book.add(order) {
        return Err(Reject::InvalidOrderDetails);
    }
    Ok(())
}

fn is_valid(order: &Order) -> bool {
    if !order.order_id.is_valid() || order.timestamp < 0 {
        return false;
    }
    if !order.quantity.is_positive() || !order.symbol.is_valid() {
        return false;
    }
    // Market orders carry price 0.00; Limit/IOC must be strictly positive
    match order.order_type {
        OrderType::Market => order.price.is_zero(),
        OrderType::Limit | OrderType::IOC => order.price.is_positive(),
    }
}
