//! Listing sources - where catalog snapshots come from.
//!
//! A [`ListingSource`] hands out immutable [`CatalogSnapshot`] values. In a
//! deployed marketplace this is backed by the listings API; in tests and demos
//! it is the [`InMemoryListingStore`] seeded from [`mock::sample_catalog`].
//!
//! ## Example
//!
//! ```ignore
//! use gem_catalog::{InMemoryListingStore, ListingSource, mock};
//!
//! let store = InMemoryListingStore::seeded(mock::sample_catalog(50))?;
//! let catalog = store.snapshot()?;
//! assert_eq!(catalog.len(), 50);
//! ```

mod in_memory;
pub mod mock;

use crate::error::SourceError;
use crate::listing::CatalogSnapshot;

/// Supplies catalog snapshots to the query pipeline.
pub trait ListingSource: Send + Sync {
    /// Produce the current catalog as a new snapshot value.
    fn snapshot(&self) -> Result<CatalogSnapshot, SourceError>;
}

impl ListingSource for CatalogSnapshot {
    fn snapshot(&self) -> Result<CatalogSnapshot, SourceError> {
        Ok(self.clone())
    }
}

pub use in_memory::InMemoryListingStore;
