//! # Ports Layer
//!
//! Trait seams between the registry and the outside world.
//!
//! - **Driving port (inbound)**: [`RegistryApi`], the surface a host state
//!   machine calls one operation at a time.
//! - **Driven ports (outbound)**: [`ValueTransfer`] for moving the mint fee
//!   and [`EventSink`] for the observable event side channel.
//!
//! No concrete implementations live here.

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
