//! # prodreg-sync
//!
//! Merges candidate product records into the registry store.
//!
//! Call [`sync`] with a batch of records, or [`pipeline::run`] with a
//! [`SyncSource`] to read the batch out of product repositories first.

pub mod discover;
pub mod engine;
pub mod error;
pub mod pipeline;

pub use engine::{
    merge, normalize_batch, sync, sync_with, validate_batch, MergeOutcome, SyncReport,
};
pub use error::SyncError;
pub use pipeline::SyncSource;
