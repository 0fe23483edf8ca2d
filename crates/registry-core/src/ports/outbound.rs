//! Outbound (Driven) ports for the item registry.
//!
//! These traits define what the registry needs from its host: a way to move
//! value for the mint fee, and a sink for the observable event side channel.

use crate::domain::{Amount, Identity, LedgerError};
use crate::events::RegistryEvent;

/// Value transfer capability of the underlying ledger.
///
/// Called exactly once per successful mint, after every check has passed
/// and before the item is recorded. A failure aborts the whole mint.
pub trait ValueTransfer: Send + Sync {
    /// Moves `amount` from `from` to `to`.
    ///
    /// # Errors
    /// - `InsufficientBalance`: `from` does not hold `amount`
    /// - `Unavailable`: the ledger refused the transfer for its own reasons
    fn transfer(&self, amount: Amount, from: Identity, to: Identity) -> Result<(), LedgerError>;
}

/// Sink for registry events.
///
/// Events are an observable side channel, not part of an operation's
/// result: publishing cannot fail and cannot roll an operation back.
pub trait EventSink: Send + Sync {
    /// Publishes one event.
    fn publish(&self, event: RegistryEvent);
}

/// Ledger that refuses every transfer, for exercising abort paths.
#[cfg(test)]
pub struct RefusingLedger;

#[cfg(test)]
impl ValueTransfer for RefusingLedger {
    fn transfer(&self, _amount: Amount, _from: Identity, _to: Identity) -> Result<(), LedgerError> {
        Err(LedgerError::Unavailable("refused by test ledger".to_string()))
    }
}
