//! # Adapters Layer
//!
//! In-memory implementations of the outbound ports. Hosts embedding the
//! registry next to a real ledger supply their own implementations; these
//! are complete enough for tests and single-process deployments.

pub mod event_log;
pub mod ledger;

pub use event_log::*;
pub use ledger::*;
