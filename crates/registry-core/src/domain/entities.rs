//! # Domain Entities
//!
//! Core records and payloads for the item registry: the registered item
//! itself, its amendment record, the caller-supplied request payloads, and
//! the per-operation execution context.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Amount, Height, Identity, ItemId, ItemType};

// =============================================================================
// ITEM RECORD
// =============================================================================

/// A registered item.
///
/// ## Invariants
/// - `id` equals the record's slot in the registry and never changes
/// - `serial` is unique across all records, active or not
/// - `active` moves from `true` to `false` at most once
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Registry-assigned dense id.
    pub id: ItemId,
    /// Free-form description.
    pub metadata: String,
    /// Parsed item classification.
    pub item_type: ItemType,
    /// Height at which the item stops being valid.
    pub expiry: Height,
    /// Issuer-chosen serial number, unique forever.
    pub serial: String,
    /// Physical location, or the configured default.
    pub location: String,
    /// Free-form grouping label.
    pub category: String,
    /// Height at which the item was minted.
    pub issued_at: Height,
    /// Identity that minted the item.
    pub issuer: Identity,
    /// False once the item has been deactivated.
    pub active: bool,
}

impl ItemRecord {
    /// Returns true once `height` has passed the item's expiry.
    #[must_use]
    pub const fn is_expired(&self, height: Height) -> bool {
        height > self.expiry
    }
}

// =============================================================================
// AMENDMENT RECORD
// =============================================================================

/// The most recent amendment applied to an item.
///
/// The amendment log keeps one record per item; every successful update
/// overwrites the previous record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmendmentRecord {
    /// Metadata after the amendment.
    pub metadata: String,
    /// Expiry after the amendment.
    pub expiry: Height,
    /// Location after the amendment.
    pub location: String,
    /// Height at which the amendment was applied.
    pub updated_at: Height,
    /// Identity that applied the amendment.
    pub updated_by: Identity,
}

// =============================================================================
// REQUEST PAYLOADS
// =============================================================================

/// Caller-supplied payload for minting a new item.
///
/// Fields arrive unvalidated; the registry checks them in a fixed order
/// before any state changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintRequest {
    /// Free-form description.
    pub metadata: String,
    /// Item classification in wire form (for example `"passport"`).
    pub item_type: String,
    /// Height at which the item stops being valid.
    pub expiry: Height,
    /// Issuer-chosen serial number.
    pub serial: String,
    /// Physical location. An empty string selects the configured default.
    pub location: String,
    /// Free-form grouping label.
    pub category: String,
}

/// Caller-supplied payload for amending an existing item.
///
/// Only metadata, expiry, and location can be amended. Type, serial, and
/// category are fixed at mint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRequest {
    /// Replacement metadata.
    pub metadata: String,
    /// Replacement expiry.
    pub expiry: Height,
    /// Replacement location.
    pub location: String,
}

// =============================================================================
// OPERATION CONTEXT
// =============================================================================

/// Ambient facts about the operation being executed.
///
/// The host assembles this once per operation; the registry never reaches
/// outside it for caller or time information.
#[derive(Clone, Copy, Debug)]
pub struct OperationContext {
    /// Authenticated identity invoking the operation.
    pub caller: Identity,
    /// Ledger height at which the operation executes.
    pub height: Height,
}

impl OperationContext {
    /// Creates a context for `caller` at `height`.
    #[must_use]
    pub const fn new(caller: Identity, height: Height) -> Self {
        Self { caller, height }
    }
}

// =============================================================================
// MINT APPROVAL
// =============================================================================

/// Proof that a mint request passed every check.
///
/// Captures everything the commit phase needs from configuration, so a
/// single mint observes one consistent config snapshot even though the fee
/// transfer happens between check and commit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MintApproval {
    /// Fee owed by the caller, captured at check time.
    pub fee: Amount,
    /// Authority that receives the fee.
    pub authority: Identity,
    /// Parsed item classification.
    pub item_type: ItemType,
    /// Location to record, with the default already substituted.
    pub location: String,
}

// =============================================================================
// REGISTRY STATUS
// =============================================================================

/// Point-in-time snapshot of registry health.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryStatus {
    /// Items minted over the registry's lifetime.
    pub items_minted: u64,
    /// Items currently active.
    pub items_active: u64,
    /// Configured mint capacity.
    pub max_items: u64,
    /// True once an issuing authority has been configured.
    pub authority_set: bool,
    /// Oldest entries dropped from per-type indexes so far.
    pub type_index_evictions: u64,
}

// =============================================================================
// TESTS
// =============================================================================
