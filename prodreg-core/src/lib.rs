//! prodreg core library — domain types, registry store, errors.
//!
//! - [`types`] — [`ProductName`], [`ProductRecord`], [`Registry`]
//! - [`store`] — [`RegistryStore`] load / save and the atomic write primitive
//! - [`paths`] — well-known file locations
//! - [`error`] — [`RegistryError`]

pub mod error;
pub mod paths;
pub mod store;
pub mod types;

pub use error::RegistryError;
pub use store::{write_atomic, RegistryStore};
pub use types::{ProductName, ProductRecord, Registry};
