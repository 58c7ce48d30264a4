//! Command parser
//!
//! Turns one tokenized line into a [`Request`]. The first token must be the
//! command letter itself (`N`, `A`, `X`, `M`) and the arity must match the
//! grammar; anything else is a silent `None` and the caller diagnoses it.

mod fields;
mod tokenize;

use matching_engine::handlers::{AmendRequest, CancelRequest};
use matching_engine::matching::MatchRequest;
use matching_engine::Request;
use types::ids::Symbol;
use types::order::Order;

pub fn parse_line(line: &str) -> Option<Request> {
    let tokens = tokenize::tokenize(line);
    match tokens.first().map(String::as_str) {
        Some("N") if tokens.len() == 8 => parse_new(&tokens).map(Request::New),
        Some("A") if tokens.len() == 8 => parse_amend(&tokens).map(Request::Amend),
        Some("X") if tokens.len() == 3 => parse_cancel(&tokens).map(Request::Cancel),
        Some("M") if tokens.len() == 2 || tokens.len() == 3 => {
            parse_match(&tokens).map(Request::Match)
        }
        _ => None,
    }
}

/// `N,<id>,<ts>,<sym>,<type>,<side>,<price>,<qty>`
fn parse_new(tokens: &[String]) -> Option<Order> {
    Some(Order {
        order_id: fields::parse_order_id(&tokens[1])?,
        timestamp: fields::parse_timestamp(&tokens[2])?,
        symbol: Symbol::new(tokens[3].clone()),
        order_type: fields::parse_order_type(&tokens[4])?,
        side: fields::parse_side(&tokens[5])?,
        price: fields::parse_price(&tokens[6])?,
        quantity: fields::parse_quantity(&tokens[7])?,
    })
}

/// `A,<id>,<ts>,<sym>,<type>,<side>,<price>,<qty>`
///
/// An empty price or quantity field means "leave unchanged" (partial amend).
fn parse_amend(tokens: &[String]) -> Option<AmendRequest> {
    let new_price = if tokens[6].is_empty() {
        None
    } else {
        Some(fields::parse_price(&tokens[6])?)
    };
    let new_quantity = if tokens[7].is_empty() {
        None
    } else {
        Some(fields::parse_quantity(&tokens[7])?)
    };
    Some(AmendRequest {
        order_id: fields::parse_order_id(&tokens[1])?,
        timestamp: fields::parse_timestamp(&tokens[2])?,
        symbol: Symbol::new(tokens[3].clone()),
        order_type: fields::parse_order_type(&tokens[4])?,
        side: fields::parse_side(&tokens[5])?,
        new_price,
        new_quantity,
    })
}

/// `X,<id>,<ts>`
fn parse_cancel(tokens: &[String]) -> Option<CancelRequest> {
    Some(CancelRequest {
        order_id: fields::parse_order_id(&tokens[1])?,
        timestamp: fields::parse_timestamp(&tokens[2])?,
    })
}

/// `M,<ts>` or `M,<ts>,<sym>`
fn parse_match(tokens: &[String]) -> Option<MatchRequest> {
    let symbol = match tokens.get(2) {
        None => None,
        Some(token) if token.is_empty() => return None,
        Some(token) => Some(Symbol::new(token.clone())),
    };
    Some(MatchRequest {
        timestamp: fields::parse_timestamp(&tokens[1])?,
        symbol,
    })
}
