//! # Registry Core - Single-Authority Item Registry
//!
//! ## Purpose
//!
//! Keeps an authoritative record of uniquely serialled physical-world items
//! (passports, visas, aid kits, plain documents) on behalf of one issuing
//! authority. Items are minted for a fee settled on the host ledger, amended
//! by their issuer, and deactivated exactly once; records are never deleted.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | Serial numbers are unique forever | `domain/registry.rs` - `ItemRegistry::check_mint()` |
//! | Identifiers are dense (id = mint order) | `domain/registry.rs` - `ItemRegistry::record_item()` |
//! | Only the original issuer amends or deactivates | `domain/registry.rs` - `ItemRegistry::update_item()` |
//! | Deactivation is one-way and idempotent | `domain/registry.rs` - `ItemRegistry::deactivate_item()` |
//! | Fee settles after checks, before any write | `service.rs` - `RegistryService::handle_mint_item()` |
//!
//! ## Field Limits
//!
//! | Limit | Value | Purpose |
//! |-------|-------|---------|
//! | `METADATA_MAX_CHARS` | 100 | Bound per-item free text |
//! | `SERIAL_MAX_CHARS` | 50 | Bound serial numbers |
//! | `LOCATION_MAX_CHARS` | 50 | Bound location strings |
//! | `CATEGORY_MAX_CHARS` | 30 | Bound category tags |
//! | `TYPE_INDEX_CAP` | 100 | Bound the per-type id index |
//!
//! ## Outbound Dependencies
//!
//! | Capability | Trait | Purpose |
//! |------------|-------|---------|
//! | Host ledger | `ValueTransfer` | Settle the mint fee |
//! | Observability | `EventSink` | Announce committed mutations |
//!
//! ## Usage Example
//!
//! ```ignore
//! use registry_core::prelude::*;
//!
//! let mut service = RegistryService::new(RegistryConfig::new(), ledger, events);
//! service.set_authority(&ctx, authority)?;
//!
//! let id = service.mint_item(&ctx, request)?;
//! println!("minted item {id}");
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

// =============================================================================
// MODULES
// =============================================================================

pub mod adapters;
pub mod domain;
pub mod events;
pub mod ports;
pub mod service;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    // Value objects
    pub use crate::domain::value_objects::{Amount, Height, Identity, ItemId, ItemType};

    // Domain entities
    pub use crate::domain::entities::{
        AmendmentRecord, ItemRecord, MintApproval, MintRequest, OperationContext, RegistryStatus,
        UpdateRequest,
    };

    // Domain state
    pub use crate::domain::amendments::AmendmentLog;
    pub use crate::domain::config::RegistryConfig;
    pub use crate::domain::registry::ItemRegistry;

    // Validation
    pub use crate::domain::validation::{check_mint_fields, check_update_fields, limits};

    // Errors
    pub use crate::domain::errors::{LedgerError, RegistryError};

    // Ports
    pub use crate::ports::inbound::RegistryApi;
    pub use crate::ports::outbound::{EventSink, ValueTransfer};

    // Events
    pub use crate::events::{topics, RegistryEvent};

    // Adapters
    pub use crate::adapters::{InMemoryEventLog, InMemoryLedger, NullEventSink, TransferRecord};

    // Service
    pub use crate::service::RegistryService;
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// TESTS
// =============================================================================
