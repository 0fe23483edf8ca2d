//! # Inbound Port - RegistryApi
//!
//! Primary driving port exposing the item registry to a host state machine.
//!
//! The host applies operations one at a time in a single total order, which
//! is why mutating methods take `&mut self`: exclusive access is the
//! concurrency model, not an implementation shortcut.

use crate::domain::{
    AmendmentRecord, Amount, Identity, ItemId, ItemRecord, ItemType, MintRequest,
    OperationContext, RegistryError, RegistryStatus, UpdateRequest,
};

/// Primary API for the item registry.
///
/// Every operation either commits all of its writes or none of them; the
/// first failing check aborts with a [`RegistryError`] and untouched state.
///
/// # Example
///
/// ```rust,ignore
/// use registry_core::ports::RegistryApi;
/// use registry_core::domain::{MintRequest, OperationContext};
///
/// fn issue_passport(registry: &mut impl RegistryApi, ctx: &OperationContext) {
///     let request = MintRequest {
///         metadata: "Passport of record".into(),
///         item_type: "passport".into(),
///         expiry: 10_000,
///         serial: "PA-0001".into(),
///         location: "Border post 7".into(),
///         category: "travel".into(),
///     };
///     match registry.mint_item(ctx, request) {
///         Ok(id) => println!("minted item {id}"),
///         Err(err) => eprintln!("rejected: {err}"),
///     }
/// }
/// ```
pub trait RegistryApi: Send + Sync {
    /// Sets the issuing authority. The bootstrap step; minting is blocked
    /// until it happens.
    ///
    /// # Errors
    /// - `AuthorityAlreadySet`: an authority was configured before
    fn set_authority(
        &mut self,
        ctx: &OperationContext,
        authority: Identity,
    ) -> Result<(), RegistryError>;

    /// Sets the fee charged to the caller on every successful mint.
    ///
    /// # Errors
    /// - `AuthorityNotSet`: the registry has not been bootstrapped
    fn set_issuer_fee(&mut self, ctx: &OperationContext, fee: Amount)
        -> Result<(), RegistryError>;

    /// Sets the lifetime mint capacity.
    ///
    /// # Errors
    /// - `AuthorityNotSet`: the registry has not been bootstrapped
    /// - `InvalidUpdate`: the capacity is zero
    fn set_max_items(
        &mut self,
        ctx: &OperationContext,
        max_items: u64,
    ) -> Result<(), RegistryError>;

    /// Sets the location recorded when a mint request leaves location empty.
    ///
    /// # Errors
    /// - `AuthorityNotSet`: the registry has not been bootstrapped
    /// - `InvalidLocation`: the value fails the location check
    fn set_default_location(
        &mut self,
        ctx: &OperationContext,
        location: String,
    ) -> Result<(), RegistryError>;

    /// Mints a new item and returns its dense id.
    ///
    /// Charges the configured fee from the caller to the authority after
    /// all checks pass and before any state is written. A failed transfer
    /// aborts the mint completely.
    ///
    /// # Errors
    /// - `MaxItemsExceeded`: the registry is at capacity
    /// - `InvalidMetadata` / `InvalidItemType` / `ExpiryInPast` /
    ///   `InvalidSerial` / `InvalidLocation` / `InvalidCategory`: a field
    ///   failed validation
    /// - `ItemAlreadyExists`: the serial was minted before
    /// - `AuthorityNotSet`: the registry has not been bootstrapped
    /// - `TransferFailed`: the ledger refused the fee transfer
    fn mint_item(
        &mut self,
        ctx: &OperationContext,
        request: MintRequest,
    ) -> Result<ItemId, RegistryError>;

    /// Amends an item's metadata, expiry, and location, and records the
    /// amendment.
    ///
    /// # Errors
    /// - `ItemNotFound`: no item exists under `id`
    /// - `Unauthorized`: the caller is not the item's issuer
    /// - `UpdateNotAllowed`: the item is deactivated
    /// - `InvalidMetadata` / `ExpiryInPast` / `InvalidLocation`: a field
    ///   failed validation
    fn update_item(
        &mut self,
        ctx: &OperationContext,
        id: ItemId,
        update: UpdateRequest,
    ) -> Result<(), RegistryError>;

    /// Deactivates an item. Deactivating an already inactive item succeeds
    /// as a no-op; there is no way back to active.
    ///
    /// # Errors
    /// - `ItemNotFound`: no item exists under `id`
    /// - `Unauthorized`: the caller is not the item's issuer
    fn deactivate_item(&mut self, ctx: &OperationContext, id: ItemId)
        -> Result<(), RegistryError>;

    /// Gets an item by id.
    fn get_item(&self, id: ItemId) -> Option<ItemRecord>;

    /// Gets the latest amendment applied to an item, if it was ever
    /// amended.
    fn get_item_updates(&self, id: ItemId) -> Option<AmendmentRecord>;

    /// Gets the ids minted under a type, oldest first. None if nothing was
    /// ever minted under it.
    fn get_items_by_type(&self, item_type: ItemType) -> Option<Vec<ItemId>>;

    /// Returns true if a serial has ever been minted, active or not.
    fn is_item_registered(&self, serial: &str) -> bool;

    /// Gets the number of items minted over the registry's lifetime.
    fn item_count(&self) -> u64;

    /// Gets a point-in-time status snapshot.
    fn status(&self) -> RegistryStatus;
}
