//! Matching Engine
//!
//! In-memory continuous-double-auction engine with a per-side,
//! price-time-priority order book, driven by a four-command state machine
//! (New / Amend / Cancel / Match).
//!
//! **Key Invariants:**
//! - An order id is live iff exactly one order with that id sits in exactly
//!   one half-book
//! - Price levels are never empty; live quantities are strictly positive
//! - Bid levels iterate descending, ask levels ascending
//! - Within a level, FIFO order equals arrival order

pub mod book;
pub mod dispatcher;
pub mod events;
pub mod handlers;
pub mod matching;

pub use dispatcher::{Dispatcher, Request};
