//! Command dispatcher
//!
//! Owns the book, routes each parsed request to its handler, and formats the
//! result as output lines: exactly one line per New/Amend/Cancel, zero or
//! more trade prints per Match.

use types::errors::Reject;
use types::ids::OrderId;
use types::order::Order;

use crate::book::OrderBook;
use crate::handlers::{amend, cancel, new, AmendRequest, CancelRequest};
use crate::matching::{self, MatchRequest};

/// One parsed input command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    New(Order),
    Amend(AmendRequest),
    Cancel(CancelRequest),
    Match(MatchRequest),
}

/// Routes requests to handlers over the book it owns.
#[derive(Debug, Default)]
pub struct Dispatcher {
    book: OrderBook,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the book, for diagnostics and tests.
    pub fn book(&self) -> &OrderBook {
        &self.book
    }

    /// Apply one request and return its formatted output lines.
    pub fn dispatch(&mut self, request: Request) -> Vec<String> {
        match request {
            Request::New(order) => {
                let order_id = order.order_id;
                let result = new::execute(&mut self.book, order);
                vec![format_result(order_id, result, "Accept", "Reject")]
            }
            Request::Amend(request) => {
                let result = amend::execute(&mut self.book, &request);
                vec![format_result(request.order_id, result, "AmendAccept", "AmendReject")]
            }
            Request::Cancel(request) => {
                let result = cancel::execute(&mut self.book, &request);
                vec![format_result(request.order_id, result, "CancelAccept", "CancelReject")]
            }
            Request::Match(request) => matching::execute(&mut self.book, &request)
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

fn format_result(order_id: OrderId, result: Result<(), Reject>, accept: &str, reject: &str) -> String {
    match result {
        Ok(()) => format!("{} - {}", order_id, accept),
        Err(r) => format!("{} - {} - {} - {}", order_id, reject, r.code(), r),
    }
}
