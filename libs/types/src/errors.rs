//! Coded rejections surfaced on the wire
//!
//! Every rejection a handler can produce maps to a numeric code and a fixed
//! message; both appear verbatim in the output line. The `amendement`
//! spelling is part of the protocol.

use thiserror::Error;

/// A coded rejection of a New, Amend, or Cancel command.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reject {
    /// New: field validation failure or duplicate order id.
    #[error("Invalid order details")]
    InvalidOrderDetails,

    /// Cancel: field validation failure.
    #[error("Invalid cancel details")]
    InvalidCancelDetails,

    /// Amend: field validation failure, identity mismatch, or no-op amend.
    #[error("Invalid amendement details")]
    InvalidAmendDetails,

    /// Cancel/Amend: target id is not live.
    #[error("Order does not exist")]
    OrderNotFound,
}

impl Reject {
    /// Numeric code emitted next to the message.
    pub fn code(&self) -> u16 {
        match self {
            Reject::InvalidOrderDetails => 303,
            Reject::InvalidCancelDetails | Reject::InvalidAmendDetails => 101,
            Reject::OrderNotFound => 404,
        }
    }
}
