//! # Domain Layer
//!
//! Pure registry logic. No I/O, no clocks, no host runtime: every fact an
//! operation needs arrives as an explicit argument, which keeps the whole
//! layer testable without a ledger host.
//!
//! ## Components
//!
//! - `value_objects`: `Identity`, `ItemId`, `ItemType`, height/amount units
//! - `entities`: `ItemRecord`, `AmendmentRecord`, request payloads, context
//! - `config`: `RegistryConfig` with bootstrap-gated setters
//! - `validation`: pure field checks and the fixed-order pipelines
//! - `registry`: `ItemRegistry` store with serial and type indexes
//! - `amendments`: `AmendmentLog`, latest amendment per item
//! - `errors`: `RegistryError` and `LedgerError` enumerations

pub mod amendments;
pub mod config;
pub mod entities;
pub mod errors;
pub mod registry;
pub mod validation;
pub mod value_objects;

pub use amendments::*;
pub use config::*;
pub use entities::*;
pub use errors::*;
pub use registry::*;
pub use validation::*;
pub use value_objects::*;
