//! In-memory ledger adapter.
//!
//! Backs the [`ValueTransfer`] port with a balance table plus an
//! append-only transfer trail, so tests can assert not just balances but
//! exactly which transfers happened and in what order. Interior mutability
//! lets the adapter sit behind an `Arc` shared with the host.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::{Amount, Identity, LedgerError};
use crate::ports::ValueTransfer;

// =============================================================================
// TRANSFER RECORD
// =============================================================================

/// One executed transfer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransferRecord {
    /// Paying account.
    pub from: Identity,
    /// Receiving account.
    pub to: Identity,
    /// Amount moved.
    pub amount: Amount,
}

// =============================================================================
// IN-MEMORY LEDGER
// =============================================================================

/// Ledger adapter holding balances in memory.
///
/// Accounts spring into existence on first credit; unknown accounts read
/// as zero.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    balances: RwLock<HashMap<Identity, Amount>>,
    transfers: RwLock<Vec<TransferRecord>>,
}

impl InMemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits an account, creating it if needed.
    pub fn credit(&self, account: Identity, amount: Amount) {
        let mut balances = self.balances.write().unwrap();
        let balance = balances.entry(account).or_insert(0);
        *balance = balance.saturating_add(amount);
    }

    /// Returns an account's balance.
    #[must_use]
    pub fn balance_of(&self, account: Identity) -> Amount {
        self.balances
            .read()
            .unwrap()
            .get(&account)
            .copied()
            .unwrap_or(0)
    }

    /// Returns every executed transfer, oldest first.
    #[must_use]
    pub fn transfers(&self) -> Vec<TransferRecord> {
        self.transfers.read().unwrap().clone()
    }
}

impl ValueTransfer for InMemoryLedger {
    fn transfer(&self, amount: Amount, from: Identity, to: Identity) -> Result<(), LedgerError> {
        let mut balances = self.balances.write().unwrap();
        let available = balances.get(&from).copied().unwrap_or(0);
        if available < amount {
            return Err(LedgerError::InsufficientBalance {
                required: amount,
                available,
            });
        }
        balances.insert(from, available - amount);
        let credited = balances.entry(to).or_insert(0);
        *credited = credited.saturating_add(amount);
        drop(balances);

        self.transfers
            .write()
            .unwrap()
            .push(TransferRecord { from, to, amount });
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
