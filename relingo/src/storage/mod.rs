//! Storage layer for correction records.
//!
//! The store is a collaborator: the relay only needs point lookups,
//! predicate-filtered listings, and single-document atomic updates, all
//! expressed by the [`CorrectionStore`] trait. The bundled
//! [`MemoryCorrectionStore`] backs tests and embedded deployments; external
//! document stores plug in by implementing the trait.

mod errors;
mod filters;
pub mod memory;
mod traits;

pub use errors::{StorageError, StorageResult};
pub use filters::CorrectionFilter;
pub use memory::MemoryCorrectionStore;
pub use traits::CorrectionStore;

use std::sync::Arc;

/// Create the default embedded correction store.
pub fn create_store() -> Arc<dyn CorrectionStore> {
    Arc::new(MemoryCorrectionStore::new())
}
