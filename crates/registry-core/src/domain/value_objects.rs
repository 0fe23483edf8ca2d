//! # Value Objects
//!
//! Immutable domain primitives for the item registry.
//! These types represent concepts that are defined by their value, not identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ledger height, the registry's logical clock.
///
/// Heights only ever move forward; expiry checks and amendment timestamps
/// are expressed in this unit.
pub type Height = u64;

/// Fee amount in the ledger's smallest denomination.
pub type Amount = u128;

// =============================================================================
// IDENTITY (20 bytes)
// =============================================================================

/// A 20-byte account identity on the ledger.
///
/// Callers, issuing authorities, and fee recipients are all identified by
/// this type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Identity(pub [u8; 20]);

impl Identity {
    /// The zero identity (0x0000...0000).
    pub const ZERO: Self = Self([0u8; 20]);

    /// Creates an identity from a 20-byte array.
    #[must_use]
    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Creates an identity from a slice. Returns None if wrong length.
    #[must_use]
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.len() == 20 {
            let mut bytes = [0u8; 20];
            bytes.copy_from_slice(slice);
            Some(Self(bytes))
        } else {
            None
        }
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Returns true if this is the zero identity.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0[..4] {
            write!(f, "{byte:02x}")?;
        }
        write!(f, "...")?;
        for byte in &self.0[18..] {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl From<[u8; 20]> for Identity {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl From<Identity> for [u8; 20] {
    fn from(identity: Identity) -> Self {
        identity.0
    }
}

// =============================================================================
// ITEM ID
// =============================================================================

/// Registry-assigned item identifier.
///
/// Ids are dense: the first minted item receives id 0 and every later mint
/// receives the previous id plus one. An id is never reused, so it doubles
/// as the item's slot in the registry.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct ItemId(u64);

impl ItemId {
    /// Creates an item id from its numeric value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Returns the id as a registry slot index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemId({})", self.0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<ItemId> for u64 {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

// =============================================================================
// ITEM TYPE
// =============================================================================

/// Classification of a registered item.
///
/// The registry accepts a closed set of types. Mint requests carry the type
/// in wire form (a lowercase string) and are rejected when it does not parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemType {
    /// Travel passport issued to a person.
    Passport,
    /// Entry visa attached to a passport.
    Visa,
    /// Humanitarian aid kit (food, medical, shelter).
    AidKit,
    /// Any other registrable document.
    Document,
}

impl ItemType {
    /// Every type the registry accepts, in wire order.
    pub const ALL: [Self; 4] = [Self::Passport, Self::Visa, Self::AidKit, Self::Document];

    /// Parses the wire form of an item type.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "passport" => Some(Self::Passport),
            "visa" => Some(Self::Visa),
            "aid-kit" => Some(Self::AidKit),
            "document" => Some(Self::Document),
            _ => None,
        }
    }

    /// Returns the wire form of this type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Passport => "passport",
            Self::Visa => "visa",
            Self::AidKit => "aid-kit",
            Self::Document => "document",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// TESTS
// =============================================================================
