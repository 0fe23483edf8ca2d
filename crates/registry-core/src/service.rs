//! # Registry Service
//!
//! Drives the domain through the outbound ports: owns the configuration,
//! the item registry, and the amendment log; charges the mint fee through
//! the injected ledger; publishes one event per committed mutation.
//!
//! The host applies operations one at a time in a total order, so mutating
//! entry points take `&mut self` and the service holds no locks.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::domain::{
    AmendmentLog, AmendmentRecord, Amount, Identity, ItemId, ItemRecord, ItemRegistry, ItemType,
    MintRequest, OperationContext, RegistryConfig, RegistryError, RegistryStatus, UpdateRequest,
};
use crate::events::RegistryEvent;
use crate::ports::{EventSink, RegistryApi, ValueTransfer};

// =============================================================================
// REGISTRY SERVICE
// =============================================================================

/// The registry service.
///
/// Generic over its driven ports so hosts can swap the ledger and the
/// event sink without touching registry logic. All state lives in plain
/// owned fields; the injected ports are shared handles.
pub struct RegistryService<L: ValueTransfer, E: EventSink> {
    /// Administrative settings; mutated only through setter operations.
    config: RegistryConfig,
    /// Authoritative item store and its indexes.
    registry: ItemRegistry,
    /// Latest amendment per item.
    amendments: AmendmentLog,
    /// Fee transfer capability of the host ledger.
    ledger: Arc<L>,
    /// Observable event side channel.
    events: Arc<E>,
}

impl<L: ValueTransfer, E: EventSink> RegistryService<L, E> {
    /// Creates a service over the given ports with an empty registry.
    pub fn new(config: RegistryConfig, ledger: Arc<L>, events: Arc<E>) -> Self {
        Self {
            config,
            registry: ItemRegistry::new(),
            amendments: AmendmentLog::new(),
            ledger,
            events,
        }
    }

    /// Read access to the current configuration.
    #[must_use]
    pub const fn config(&self) -> &RegistryConfig {
        &self.config
    }

    // =========================================================================
    // CONFIGURATION HANDLERS
    // =========================================================================

    /// Bootstraps the issuing authority.
    #[instrument(skip(self, ctx), fields(caller = %ctx.caller, height = ctx.height))]
    pub fn handle_set_authority(
        &mut self,
        ctx: &OperationContext,
        authority: Identity,
    ) -> Result<(), RegistryError> {
        self.config.set_authority(authority)?;
        info!(authority = %authority, "Issuing authority configured");
        Ok(())
    }

    /// Updates the per-mint fee.
    #[instrument(skip(self, ctx), fields(caller = %ctx.caller))]
    pub fn handle_set_issuer_fee(
        &mut self,
        ctx: &OperationContext,
        fee: Amount,
    ) -> Result<(), RegistryError> {
        self.config.set_issuer_fee(fee)?;
        info!(fee, "Issuer fee updated");
        Ok(())
    }

    /// Updates the lifetime mint capacity.
    #[instrument(skip(self, ctx), fields(caller = %ctx.caller))]
    pub fn handle_set_max_items(
        &mut self,
        ctx: &OperationContext,
        max_items: u64,
    ) -> Result<(), RegistryError> {
        self.config.set_max_items(max_items)?;
        info!(max_items, "Mint capacity updated");
        Ok(())
    }

    /// Updates the default location.
    #[instrument(skip(self, ctx, location), fields(caller = %ctx.caller))]
    pub fn handle_set_default_location(
        &mut self,
        ctx: &OperationContext,
        location: String,
    ) -> Result<(), RegistryError> {
        self.config.set_default_location(location)?;
        info!(
            location = %self.config.default_location(),
            "Default location updated"
        );
        Ok(())
    }

    // =========================================================================
    // ITEM HANDLERS
    // =========================================================================

    /// Mints a new item: check, charge, commit, emit.
    ///
    /// The fee transfer is the one external side effect, placed after every
    /// check and before any write. A refusal aborts the mint with no state
    /// committed; a success is always followed by the item appearing,
    /// because the commit phase cannot fail.
    #[instrument(
        skip(self, ctx, request),
        fields(caller = %ctx.caller, height = ctx.height, serial = %request.serial)
    )]
    pub fn handle_mint_item(
        &mut self,
        ctx: &OperationContext,
        request: MintRequest,
    ) -> Result<ItemId, RegistryError> {
        let approval = self.registry.check_mint(&request, &self.config, ctx.height)?;

        if let Err(err) = self
            .ledger
            .transfer(approval.fee, ctx.caller, approval.authority)
        {
            warn!(error = %err, fee = approval.fee, "Fee transfer refused; mint aborted");
            return Err(err.into());
        }

        let id = self.registry.record_item(request, approval, ctx);
        self.events.publish(RegistryEvent::ItemMinted { id });
        info!(id = %id, "Item minted");
        Ok(id)
    }

    /// Amends an item and records the amendment.
    #[instrument(
        skip(self, ctx, update),
        fields(caller = %ctx.caller, height = ctx.height, id = %id)
    )]
    pub fn handle_update_item(
        &mut self,
        ctx: &OperationContext,
        id: ItemId,
        update: UpdateRequest,
    ) -> Result<(), RegistryError> {
        self.registry.update_item(id, &update, &self.config, ctx)?;
        self.amendments.record(
            id,
            AmendmentRecord {
                metadata: update.metadata,
                expiry: update.expiry,
                location: update.location,
                updated_at: ctx.height,
                updated_by: ctx.caller,
            },
        );
        self.events.publish(RegistryEvent::ItemUpdated { id });
        info!("Item updated");
        Ok(())
    }

    /// Deactivates an item.
    ///
    /// Emits the event on every successful call, including the idempotent
    /// no-op on an already inactive item.
    #[instrument(
        skip(self, ctx),
        fields(caller = %ctx.caller, height = ctx.height, id = %id)
    )]
    pub fn handle_deactivate_item(
        &mut self,
        ctx: &OperationContext,
        id: ItemId,
    ) -> Result<(), RegistryError> {
        self.registry.deactivate_item(id, ctx)?;
        self.events.publish(RegistryEvent::ItemDeactivated { id });
        info!("Item deactivated");
        Ok(())
    }
}

// =============================================================================
// INBOUND API IMPLEMENTATION
// =============================================================================

impl<L: ValueTransfer, E: EventSink> RegistryApi for RegistryService<L, E> {
    fn set_authority(
        &mut self,
        ctx: &OperationContext,
        authority: Identity,
    ) -> Result<(), RegistryError> {
        self.handle_set_authority(ctx, authority)
    }

    fn set_issuer_fee(
        &mut self,
        ctx: &OperationContext,
        fee: Amount,
    ) -> Result<(), RegistryError> {
        self.handle_set_issuer_fee(ctx, fee)
    }

    fn set_max_items(
        &mut self,
        ctx: &OperationContext,
        max_items: u64,
    ) -> Result<(), RegistryError> {
        self.handle_set_max_items(ctx, max_items)
    }

    fn set_default_location(
        &mut self,
        ctx: &OperationContext,
        location: String,
    ) -> Result<(), RegistryError> {
        self.handle_set_default_location(ctx, location)
    }

    fn mint_item(
        &mut self,
        ctx: &OperationContext,
        request: MintRequest,
    ) -> Result<ItemId, RegistryError> {
        self.handle_mint_item(ctx, request)
    }

    fn update_item(
        &mut self,
        ctx: &OperationContext,
        id: ItemId,
        update: UpdateRequest,
    ) -> Result<(), RegistryError> {
        self.handle_update_item(ctx, id, update)
    }

    fn deactivate_item(
        &mut self,
        ctx: &OperationContext,
        id: ItemId,
    ) -> Result<(), RegistryError> {
        self.handle_deactivate_item(ctx, id)
    }

    fn get_item(&self, id: ItemId) -> Option<ItemRecord> {
        self.registry.item(id).cloned()
    }

    fn get_item_updates(&self, id: ItemId) -> Option<AmendmentRecord> {
        self.amendments.latest(id).cloned()
    }

    fn get_items_by_type(&self, item_type: ItemType) -> Option<Vec<ItemId>> {
        self.registry.items_by_type(item_type).map(<[ItemId]>::to_vec)
    }

    fn is_item_registered(&self, serial: &str) -> bool {
        self.registry.is_serial_registered(serial)
    }

    fn item_count(&self) -> u64 {
        self.registry.minted_count()
    }

    fn status(&self) -> RegistryStatus {
        RegistryStatus {
            items_minted: self.registry.minted_count(),
            items_active: self.registry.active_count(),
            max_items: self.config.max_items(),
            authority_set: self.config.authority().is_some(),
            type_index_evictions: self.registry.type_index_evictions(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
