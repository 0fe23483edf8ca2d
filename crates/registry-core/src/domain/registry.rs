//! # Item Registry
//!
//! Authoritative store of minted items plus the two secondary indexes
//! (serial uniqueness, per-type listing). Minting is split into a pure
//! check phase and an infallible commit phase so the fee transfer can sit
//! between them without ever leaving partial state behind.

use std::collections::HashMap;

use tracing::warn;

use crate::domain::config::RegistryConfig;
use crate::domain::entities::{
    ItemRecord, MintApproval, MintRequest, OperationContext, UpdateRequest,
};
use crate::domain::errors::RegistryError;
use crate::domain::validation::{self, limits};
use crate::domain::value_objects::{Height, ItemId, ItemType};

// =============================================================================
// ITEM REGISTRY
// =============================================================================

/// Authoritative item store with dense ids.
///
/// ## Invariants
/// - `items[n].id == n` for every slot; ids are dense and never reused
/// - `by_serial` covers every serial ever minted, active or not
/// - `by_type` lists at most [`limits::TYPE_INDEX_CAP`] ids per type,
///   oldest first
/// - `active_items` equals the number of records with `active == true`
#[derive(Clone, Debug, Default)]
pub struct ItemRegistry {
    /// Records indexed by id; the slot position is the id.
    items: Vec<ItemRecord>,
    /// Serial uniqueness index over every item ever minted.
    by_serial: HashMap<String, ItemId>,
    /// Per-type listing, oldest first.
    by_type: HashMap<ItemType, Vec<ItemId>>,
    /// Records not yet deactivated.
    active_items: u64,
    /// Oldest ids dropped from `by_type` lists so far.
    type_index_evictions: u64,
}

impl ItemRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // MINT (CHECK PHASE)
    // =========================================================================

    /// Runs every mint check without mutating anything.
    ///
    /// Check order: capacity, metadata, item type, expiry, serial shape,
    /// location, category, serial uniqueness, authority. The first failure
    /// aborts the mint with nothing written.
    ///
    /// On success the returned approval carries the fee, the authority,
    /// the parsed type, and the location to record (an empty location takes
    /// the configured default), so the commit phase never re-reads config.
    pub fn check_mint(
        &self,
        request: &MintRequest,
        config: &RegistryConfig,
        height: Height,
    ) -> Result<MintApproval, RegistryError> {
        if self.items.len() as u64 >= config.max_items() {
            return Err(RegistryError::MaxItemsExceeded {
                limit: config.max_items(),
            });
        }
        let item_type = validation::check_mint_fields(request, config.default_location(), height)?;
        if self.by_serial.contains_key(&request.serial) {
            return Err(RegistryError::ItemAlreadyExists {
                serial: request.serial.clone(),
            });
        }
        let authority = config.authority().ok_or(RegistryError::AuthorityNotSet)?;

        let location = if request.location.is_empty() {
            config.default_location().to_string()
        } else {
            request.location.clone()
        };

        Ok(MintApproval {
            fee: config.issuer_fee(),
            authority,
            item_type,
            location,
        })
    }

    // =========================================================================
    // MINT (COMMIT PHASE)
    // =========================================================================

    /// Commits an approved mint and returns the new dense id.
    ///
    /// Infallible: once the approval exists and the fee is paid, the item
    /// always appears. Evicts the oldest id from the type index when the
    /// per-type cap is hit.
    pub fn record_item(
        &mut self,
        request: MintRequest,
        approval: MintApproval,
        ctx: &OperationContext,
    ) -> ItemId {
        let id = ItemId::new(self.items.len() as u64);
        let MintApproval {
            item_type,
            location,
            ..
        } = approval;

        self.by_serial.insert(request.serial.clone(), id);

        let listed = self.by_type.entry(item_type).or_default();
        if listed.len() >= limits::TYPE_INDEX_CAP {
            let evicted = listed.remove(0);
            self.type_index_evictions += 1;
            warn!(
                item_type = %item_type,
                evicted = %evicted,
                "Type index at capacity; evicting oldest id"
            );
        }
        listed.push(id);

        self.items.push(ItemRecord {
            id,
            metadata: request.metadata,
            item_type,
            expiry: request.expiry,
            serial: request.serial,
            location,
            category: request.category,
            issued_at: ctx.height,
            issuer: ctx.caller,
            active: true,
        });
        self.active_items += 1;
        id
    }

    // =========================================================================
    // UPDATE / DEACTIVATE
    // =========================================================================

    /// Amends an item in place: metadata, expiry, location.
    ///
    /// Ownership, liveness, and field checks run in that order; nothing is
    /// written unless all pass. Type, serial, category, issue height, and
    /// issuer never change.
    pub fn update_item(
        &mut self,
        id: ItemId,
        update: &UpdateRequest,
        config: &RegistryConfig,
        ctx: &OperationContext,
    ) -> Result<(), RegistryError> {
        let item = self
            .items
            .get_mut(id.index())
            .ok_or(RegistryError::ItemNotFound { id })?;
        if item.issuer != ctx.caller {
            return Err(RegistryError::Unauthorized { caller: ctx.caller });
        }
        if !item.active {
            return Err(RegistryError::UpdateNotAllowed { id });
        }
        validation::check_update_fields(update, config.default_location(), ctx.height)?;

        item.metadata = update.metadata.clone();
        item.expiry = update.expiry;
        item.location = update.location.clone();
        Ok(())
    }

    /// Marks an item inactive.
    ///
    /// Idempotent: deactivating an already inactive item succeeds without
    /// changing anything. The transition is one-way; no operation brings an
    /// item back.
    pub fn deactivate_item(
        &mut self,
        id: ItemId,
        ctx: &OperationContext,
    ) -> Result<(), RegistryError> {
        let item = self
            .items
            .get_mut(id.index())
            .ok_or(RegistryError::ItemNotFound { id })?;
        if item.issuer != ctx.caller {
            return Err(RegistryError::Unauthorized { caller: ctx.caller });
        }
        if item.active {
            item.active = false;
            self.active_items -= 1;
        }
        Ok(())
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Looks up an item by id.
    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&ItemRecord> {
        self.items.get(id.index())
    }

    /// Lists ids minted under a type, oldest first. None if nothing was
    /// ever minted under it.
    #[must_use]
    pub fn items_by_type(&self, item_type: ItemType) -> Option<&[ItemId]> {
        self.by_type.get(&item_type).map(Vec::as_slice)
    }

    /// Returns true if a serial has ever been minted, active or not.
    #[must_use]
    pub fn is_serial_registered(&self, serial: &str) -> bool {
        self.by_serial.contains_key(serial)
    }

    /// Items minted over the registry's lifetime. Deactivation never
    /// lowers this.
    #[must_use]
    pub fn minted_count(&self) -> u64 {
        self.items.len() as u64
    }

    /// Items not yet deactivated.
    #[must_use]
    pub const fn active_count(&self) -> u64 {
        self.active_items
    }

    /// Oldest ids dropped from type indexes so far.
    #[must_use]
    pub const fn type_index_evictions(&self) -> u64 {
        self.type_index_evictions
    }

    /// Returns true if nothing has ever been minted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// TESTS
// =============================================================================
