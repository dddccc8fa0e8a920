//! Concher core library: registry data model, persistence, errors.
//!
//! - [`types`]: newtypes and domain structs
//! - [`registry`]: in-memory [`Registry`] and its invariants
//! - [`store`]: load / save of the registry
//! - [`error`]: [`RegistryError`], [`StoreError`]

pub mod error;
pub mod registry;
pub mod store;
pub mod types;

pub use error::{RegistryError, StoreError};
pub use registry::{Registry, Resolved};
pub use types::{Context, ContextName, Location, LocationKind, LocationName};
