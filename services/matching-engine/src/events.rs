//! Events emitted during matching

use serde::Serialize;
use std::fmt;
use types::ids::{OrderId, Symbol};
use types::numeric::{Price, Quantity};
use types::order::OrderType;

/// One executed cross between a buy and a sell order.
///
/// `Display` renders the trade-print wire line, e.g.
/// `XYZ|1,L,100,10000|10000,100,L,2` — buy leg first, then the sell leg,
/// with the price as raw integer cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TradeEvent {
    pub symbol: Symbol,
    pub buy_order_id: OrderId,
    pub sell_order_id: OrderId,
    pub buy_order_type: OrderType,
    pub sell_order_type: OrderType,
    pub quantity: Quantity,
    pub price: Price,
}

impl fmt::Display for TradeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{},{},{},{}|{},{},{},{}",
            self.symbol,
            self.buy_order_id,
            self.buy_order_type.as_char(),
            self.quantity,
            self.price.cents(),
            self.price.cents(),
            self.quantity,
            self.sell_order_type.as_char(),
            self.sell_order_id,
        )
    }
}
