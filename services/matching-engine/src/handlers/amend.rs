//! Amend handler
//!
//! An amend may change price and/or quantity; symbol, type, and side are
//! identity fields and must match the live order. The only amend that keeps
//! time priority is a bare quantity decrease — everything else re-enters the
//! book at the tail of its level.

use types::errors::Reject;
use types::ids::{OrderId, Symbol, Timestamp};
use types::numeric::{Price, Quantity};
use types::order::{OrderType, Side};

use crate::book::OrderBook;

/// Parsed `A` command.
///
/// `new_price` / `new_quantity` are `None` when the field was left blank on
/// the wire (partial amend); at least one must be present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmendRequest {
    pub order_id: OrderId,
    pub timestamp: Timestamp,
    pub symbol: Symbol,
    pub order_type: OrderType,
    pub side: Side,
    pub new_price: Option<Price>,
    pub new_quantity: Option<Quantity>,
}

pub fn execute(book: &mut OrderBook, request: &AmendRequest) -> Result<(), Reject> {
    if !is_valid(request) {
        return Err(Reject::InvalidAmendDetails);
    }

    let existing = book
        .order(request.order_id)
        .cloned()
        .ok_or(Reject::OrderNotFound)?;

    // Only price and quantity may change
    if existing.symbol != request.symbol
        || existing.order_type != request.order_type
        || existing.side != request.side
    {
        return Err(Reject::InvalidAmendDetails);
    }

    let old_price = existing.price;
    let old_quantity = existing.quantity;
    let new_price = request.new_price.unwrap_or(old_price);
    let new_quantity = request.new_quantity.unwrap_or(old_quantity);

    // At least one value must actually change
    if new_price == old_price && new_quantity == old_quantity {
        return Err(Reject::InvalidAmendDetails);
    }

    // A bare quantity decrease keeps the order's place in the queue
    if new_price == old_price && new_quantity < old_quantity {
        book.reduce_quantity(request.order_id, new_quantity, request.timestamp);
        return Ok(());
    }

    // Priority forfeited: re-enter at the tail of the (possibly new) level
    let mut amended = existing;
    amended.price = new_price;
    amended.quantity = new_quantity;
    amended.timestamp = request.timestamp;

    book.erase(request.order_id);
    if !book.add(amended) {
        return Err(Reject::InvalidAmendDetails);
    }
    Ok(())
}

fn is_valid(request: &AmendRequest) -> bool {
    if !request.order_id.is_valid() || request.timestamp < 0 || !request.symbol.is_valid() {
        return false;
    }
    if request.new_price.is_none() && request.new_quantity.is_none() {
        return false;
    }
    if let Some(quantity) = request.new_quantity {
        if !quantity.is_positive() {
            return false;
        }
    }
    if let Some(price) = request.new_price {
        let price_ok = match request.order_type {
            OrderType::Market => price.is_zero(),
            OrderType::Limit | OrderType::IOC => price.is_positive(),
        };
        if !price_ok {
            return false;
        }
    }
    true
}
