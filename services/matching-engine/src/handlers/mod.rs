//! Command handlers
//!
//! One module per book-mutating command. Handlers are stateless functions
//! over a mutable book reference; the dispatcher owns the book and formats
//! the results.

pub mod amend;
pub mod cancel;
pub mod new;

pub use amend::AmendRequest;
pub use cancel::CancelRequest;
