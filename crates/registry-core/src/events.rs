//! # Registry Events
//!
//! Observable side channel of the registry. Every committed mutation emits
//! exactly one event carrying the affected item id; failed operations emit
//! nothing. Events are not returned to callers and carry no payload beyond
//! the id, so hosts that need full records query by id.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ItemId;

// =============================================================================
// EVENT SCHEMA
// =============================================================================

/// One committed registry mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryEvent {
    /// A new item was minted under `id`.
    ItemMinted {
        /// The freshly assigned dense id.
        id: ItemId,
    },
    /// The item under `id` was amended.
    ItemUpdated {
        /// The amended item.
        id: ItemId,
    },
    /// The item under `id` was deactivated. Emitted on every successful
    /// call, including idempotent re-deactivations.
    ItemDeactivated {
        /// The deactivated item.
        id: ItemId,
    },
}

impl RegistryEvent {
    /// Returns the topic string this event publishes under.
    #[must_use]
    pub const fn topic(&self) -> &'static str {
        match self {
            Self::ItemMinted { .. } => topics::ITEM_MINTED,
            Self::ItemUpdated { .. } => topics::ITEM_UPDATED,
            Self::ItemDeactivated { .. } => topics::ITEM_DEACTIVATED,
        }
    }

    /// Returns the item the event is about.
    #[must_use]
    pub const fn item_id(&self) -> ItemId {
        match self {
            Self::ItemMinted { id }
            | Self::ItemUpdated { id }
            | Self::ItemDeactivated { id } => *id,
        }
    }
}

// =============================================================================
// TOPICS
// =============================================================================

/// Topic strings, one per event kind.
pub mod topics {
    /// A new item was minted.
    pub const ITEM_MINTED: &str = "item-minted";

    /// An item was amended.
    pub const ITEM_UPDATED: &str = "item-updated";

    /// An item was deactivated.
    pub const ITEM_DEACTIVATED: &str = "item-deactivated";
}

// =============================================================================
// TESTS
// =============================================================================
