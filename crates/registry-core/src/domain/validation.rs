//! # Validation Pipeline
//!
//! Pure field checks applied to mint and update payloads. Every check is
//! independent of registry state; the composites at the bottom apply them
//! in the fixed order the registry commits to, so the first failing field
//! decides the error.
//!
//! Lengths are measured in characters, not bytes.

use crate::domain::entities::{MintRequest, UpdateRequest};
use crate::domain::errors::RegistryError;
use crate::domain::value_objects::{Height, ItemType};

// =============================================================================
// FIELD LIMITS
// =============================================================================

/// Bounds enforced by the validation pipeline and the registry indexes.
pub mod limits {
    /// Maximum metadata length in characters.
    pub const METADATA_MAX_CHARS: usize = 100;

    /// Maximum serial length in characters.
    pub const SERIAL_MAX_CHARS: usize = 50;

    /// Maximum location length in characters.
    pub const LOCATION_MAX_CHARS: usize = 50;

    /// Maximum category length in characters.
    pub const CATEGORY_MAX_CHARS: usize = 30;

    /// Entries a per-type index holds before evicting its oldest id.
    pub const TYPE_INDEX_CAP: usize = 100;
}

/// Measures a field the way the limits are defined: in characters.
#[must_use]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

// =============================================================================
// FIELD CHECKS
// =============================================================================

/// Accepts metadata with 1 to 100 characters.
pub fn check_metadata(metadata: &str) -> Result<(), RegistryError> {
    let length = char_len(metadata);
    if (1..=limits::METADATA_MAX_CHARS).contains(&length) {
        Ok(())
    } else {
        Err(RegistryError::InvalidMetadata { length })
    }
}

/// Accepts item types that parse into the closed set.
pub fn check_item_type(item_type: &str) -> Result<ItemType, RegistryError> {
    ItemType::parse(item_type).ok_or_else(|| RegistryError::InvalidItemType {
        supplied: item_type.to_string(),
    })
}

/// Accepts expiry heights at or after the current height.
pub fn check_expiry(expiry: Height, height: Height) -> Result<(), RegistryError> {
    if expiry >= height {
        Ok(())
    } else {
        Err(RegistryError::ExpiryInPast { expiry, height })
    }
}

/// Accepts serials with 1 to 50 characters.
pub fn check_serial(serial: &str) -> Result<(), RegistryError> {
    let length = char_len(serial);
    if (1..=limits::SERIAL_MAX_CHARS).contains(&length) {
        Ok(())
    } else {
        Err(RegistryError::InvalidSerial { length })
    }
}

/// Accepts a location equal to the current default, or any other value
/// with 1 to 50 characters. The equality arm wins even when the default
/// itself is outside that range.
pub fn check_location(location: &str, default_location: &str) -> Result<(), RegistryError> {
    if location == default_location {
        return Ok(());
    }
    let length = char_len(location);
    if (1..=limits::LOCATION_MAX_CHARS).contains(&length) {
        Ok(())
    } else {
        Err(RegistryError::InvalidLocation { length })
    }
}

/// Accepts categories with 1 to 30 characters.
pub fn check_category(category: &str) -> Result<(), RegistryError> {
    let length = char_len(category);
    if (1..=limits::CATEGORY_MAX_CHARS).contains(&length) {
        Ok(())
    } else {
        Err(RegistryError::InvalidCategory { length })
    }
}

// =============================================================================
// ORDERED PIPELINES
// =============================================================================

/// Applies every mint field check in commit order: metadata, item type,
/// expiry, serial, location, category. The first failure wins.
///
/// Returns the parsed item type so callers never re-parse the wire form.
pub fn check_mint_fields(
    request: &MintRequest,
    default_location: &str,
    height: Height,
) -> Result<ItemType, RegistryError> {
    check_metadata(&request.metadata)?;
    let item_type = check_item_type(&request.item_type)?;
    check_expiry(request.expiry, height)?;
    check_serial(&request.serial)?;
    check_location(&request.location, default_location)?;
    check_category(&request.category)?;
    Ok(item_type)
}

/// Applies every update field check in commit order: metadata, expiry,
/// location. The first failure wins.
pub fn check_update_fields(
    update: &UpdateRequest,
    default_location: &str,
    height: Height,
) -> Result<(), RegistryError> {
    check_metadata(&update.metadata)?;
    check_expiry(update.expiry, height)?;
    check_location(&update.location, default_location)?;
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
