//! # Registry Errors
//!
//! Closed error taxonomy for every registry operation. Each variant maps to
//! exactly one rejection cause, so callers can react to failures without
//! parsing message strings.

use thiserror::Error;

use crate::domain::value_objects::{Amount, Height, Identity, ItemId};

// =============================================================================
// REGISTRY ERROR
// =============================================================================

/// Why a registry operation was rejected.
///
/// Validation variants carry the offending measurement so that hosts can
/// surface precise diagnostics without re-deriving them.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The issuing authority has already been configured.
    #[error("authority is already set")]
    AuthorityAlreadySet,

    /// No issuing authority has been configured yet.
    #[error("authority is not set")]
    AuthorityNotSet,

    /// The registry is at its configured mint capacity.
    #[error("mint capacity reached: limit {limit}")]
    MaxItemsExceeded {
        /// Configured capacity at the time of the attempt.
        limit: u64,
    },

    /// Metadata length is outside the accepted range.
    #[error("metadata length {length} out of range")]
    InvalidMetadata {
        /// Measured length in characters.
        length: usize,
    },

    /// The supplied item type does not parse.
    #[error("unknown item type {supplied:?}")]
    InvalidItemType {
        /// The string the caller supplied.
        supplied: String,
    },

    /// The requested expiry is already in the past.
    #[error("expiry {expiry} is before current height {height}")]
    ExpiryInPast {
        /// Requested expiry height.
        expiry: Height,
        /// Height at which the request executed.
        height: Height,
    },

    /// Serial number length is outside the accepted range.
    #[error("serial length {length} out of range")]
    InvalidSerial {
        /// Measured length in characters.
        length: usize,
    },

    /// Location length is outside the accepted range.
    #[error("location length {length} out of range")]
    InvalidLocation {
        /// Measured length in characters.
        length: usize,
    },

    /// Category length is outside the accepted range.
    #[error("category length {length} out of range")]
    InvalidCategory {
        /// Measured length in characters.
        length: usize,
    },

    /// An item with the same serial was minted before.
    #[error("item already exists for serial {serial:?}")]
    ItemAlreadyExists {
        /// The conflicting serial.
        serial: String,
    },

    /// No item is registered under the given id.
    #[error("item {id} not found")]
    ItemNotFound {
        /// The id that was looked up.
        id: ItemId,
    },

    /// The caller is not the item's issuer.
    #[error("caller {caller} did not issue this item")]
    Unauthorized {
        /// Identity that attempted the operation.
        caller: Identity,
    },

    /// The item has been deactivated and can no longer be amended.
    #[error("item {id} is deactivated")]
    UpdateNotAllowed {
        /// The deactivated item.
        id: ItemId,
    },

    /// A configuration update carried an unusable value.
    #[error("invalid configuration update")]
    InvalidUpdate,

    /// The mint fee could not be moved from caller to authority.
    #[error("fee transfer failed: {0}")]
    TransferFailed(#[from] LedgerError),
}

// =============================================================================
// LEDGER ERROR
// =============================================================================

/// Why a value transfer on the underlying ledger failed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The paying account does not hold enough value.
    #[error("insufficient balance: required {required}, available {available}")]
    InsufficientBalance {
        /// Amount the transfer needed.
        required: Amount,
        /// Amount the account actually held.
        available: Amount,
    },

    /// The ledger rejected the transfer for a reason of its own.
    #[error("ledger unavailable: {0}")]
    Unavailable(String),
}

// =============================================================================
// TESTS
// =============================================================================
