//! # Registry Configuration
//!
//! Administrative parameters that govern minting: capacity, fee, default
//! location, and the issuing authority. All mutation flows through setters
//! so the bootstrap rule (authority first, exactly once) cannot be bypassed.

use serde::{Deserialize, Serialize};

use crate::domain::errors::RegistryError;
use crate::domain::validation;
use crate::domain::value_objects::{Amount, Identity};

// =============================================================================
// REGISTRY CONFIG
// =============================================================================

/// Mutable registry-wide settings.
///
/// ## Invariants
/// - `authority` moves from `None` to `Some` exactly once and never back
/// - `max_items` is never zero
/// - `default_location` always passes the location check, so it is never
///   empty
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Lifetime mint capacity.
    max_items: u64,
    /// Fee charged to the caller on every successful mint.
    issuer_fee: Amount,
    /// Location recorded when a mint request leaves location empty.
    default_location: String,
    /// Fee recipient and configuration administrator. None until bootstrap.
    authority: Option<Identity>,
}

impl RegistryConfig {
    /// Capacity used until an administrator changes it.
    pub const DEFAULT_MAX_ITEMS: u64 = 5_000;

    /// Fee used until an administrator changes it.
    pub const DEFAULT_ISSUER_FEE: Amount = 500;

    /// Default location used until an administrator changes it.
    pub const DEFAULT_LOCATION: &'static str = "Global";

    /// Creates a configuration with default parameters and no authority.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_items: Self::DEFAULT_MAX_ITEMS,
            issuer_fee: Self::DEFAULT_ISSUER_FEE,
            default_location: Self::DEFAULT_LOCATION.to_string(),
            authority: None,
        }
    }

    /// Returns the lifetime mint capacity.
    #[must_use]
    pub const fn max_items(&self) -> u64 {
        self.max_items
    }

    /// Returns the fee charged per mint.
    #[must_use]
    pub const fn issuer_fee(&self) -> Amount {
        self.issuer_fee
    }

    /// Returns the location substituted for empty mint locations.
    #[must_use]
    pub fn default_location(&self) -> &str {
        &self.default_location
    }

    /// Returns the issuing authority, if bootstrapped.
    #[must_use]
    pub const fn authority(&self) -> Option<Identity> {
        self.authority
    }

    /// Sets the issuing authority.
    ///
    /// This is the bootstrap step: minting is blocked until it happens,
    /// and it can never happen twice.
    pub fn set_authority(&mut self, authority: Identity) -> Result<(), RegistryError> {
        if self.authority.is_some() {
            return Err(RegistryError::AuthorityAlreadySet);
        }
        self.authority = Some(authority);
        Ok(())
    }

    /// Sets the fee charged per mint.
    ///
    /// Every representable amount is accepted. The historical lower-bound
    /// check cannot reject anything because `Amount` is unsigned, so it is
    /// not written out here.
    pub fn set_issuer_fee(&mut self, fee: Amount) -> Result<(), RegistryError> {
        if self.authority.is_none() {
            return Err(RegistryError::AuthorityNotSet);
        }
        self.issuer_fee = fee;
        Ok(())
    }

    /// Sets the lifetime mint capacity. Zero is rejected.
    pub fn set_max_items(&mut self, max_items: u64) -> Result<(), RegistryError> {
        if self.authority.is_none() {
            return Err(RegistryError::AuthorityNotSet);
        }
        if max_items == 0 {
            return Err(RegistryError::InvalidUpdate);
        }
        self.max_items = max_items;
        Ok(())
    }

    /// Sets the default location. The new value must pass the location
    /// check against the current default.
    pub fn set_default_location(&mut self, location: String) -> Result<(), RegistryError> {
        if self.authority.is_none() {
            return Err(RegistryError::AuthorityNotSet);
        }
        validation::check_location(&location, &self.default_location)?;
        self.default_location = location;
        Ok(())
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================
