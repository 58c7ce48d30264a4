//! Match handler
//!
//! Crosses the book on demand. A symbol-filtered request matches only that
//! symbol; the unfiltered request folds the per-symbol matcher over every
//! symbol with liquidity on both sides (lexicographic order), so a cross can
//! never pair orders of different symbols. IOC orders still live when the
//! match ends are swept from the book.

pub mod crossing;

use types::ids::{Symbol, Timestamp};

use crate::book::OrderBook;
use crate::events::TradeEvent;

/// Parsed `M` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRequest {
    pub timestamp: Timestamp,
    /// Restrict matching to one symbol; `None` matches every symbol.
    pub symbol: Option<Symbol>,
}

pub fn execute(book: &mut OrderBook, request: &MatchRequest) -> Vec<TradeEvent> {
    let mut events = Vec::new();
    match &request.symbol {
        Some(symbol) => {
            match_symbol(book, symbol, &mut events);
            book.sweep_ioc(Some(symbol));
        }
        None => {
            for symbol in book.live_symbols() {
                match_symbol(book, &symbol, &mut events);
            }
            book.sweep_ioc(None);
        }
    }
    events
}

/// Cross one symbol until its filtered tops no longer overlap.
fn match_symbol(book: &mut OrderBook, symbol: &Symbol, events: &mut Vec<TradeEvent>) {
    loop {
        let Some((bid, ask)) = book.best_bid_for(symbol).zip(book.best_ask_for(symbol)) else {
            break;
        };
        if !crossing::crosses(bid.order().price, ask.order().price) {
            break;
        }

        let quantity = bid.order().quantity.min(ask.order().quantity);
        let price = crossing::execution_price(bid, ask);
        events.push(TradeEvent {
            symbol: symbol.clone(),
            buy_order_id: bid.order().order_id,
            sell_order_id: ask.order().order_id,
            buy_order_type: bid.order().order_type,
            sell_order_type: ask.order().order_type,
            quantity,
            price,
        });

        book.consume_best_ask_for(quantity, symbol);
        book.consume_best_bid_for(quantity, symbol);
    }
}
