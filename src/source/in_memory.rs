//! InMemoryListingStore - Vec-backed listing source for testing and development.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::ListingSource;
use crate::error::SourceError;
use crate::listing::{CatalogSnapshot, ListingRecord};

struct StoreState {
    records: Vec<ListingRecord>,
    version: u64,
}

/// In-memory listing store that keeps listings in insertion order.
///
/// Every mutation bumps the store version. Snapshots taken earlier are
/// unaffected. Clone-friendly via Arc.
#[derive(Clone)]
pub struct InMemoryListingStore {
    state: Arc<RwLock<StoreState>>,
}

impl Default for InMemoryListingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryListingStore {
    /// Create a new empty listing store.
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(StoreState {
                records: Vec::new(),
                version: 0,
            })),
        }
    }

    /// Create a store pre-populated with listings, rejecting duplicate ids.
    pub fn seeded(records: Vec<ListingRecord>) -> Result<Self, SourceError> {
        let store = Self::new();
        for record in records {
            store.insert(record)?;
        }
        Ok(store)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, StoreState>, SourceError> {
        self.state
            .read()
            .map_err(|_| SourceError::Storage("lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, StoreState>, SourceError> {
        self.state
            .write()
            .map_err(|_| SourceError::Storage("lock poisoned".into()))
    }

    /// Current store version. Zero until the first mutation.
    pub fn version(&self) -> Result<u64, SourceError> {
        Ok(self.read()?.version)
    }

    pub fn len(&self) -> Result<usize, SourceError> {
        Ok(self.read()?.records.len())
    }

    pub fn is_empty(&self) -> Result<bool, SourceError> {
        Ok(self.len()? == 0)
    }

    /// Get a listing by id. Returns None if not found.
    pub fn get(&self, id: &str) -> Result<Option<ListingRecord>, SourceError> {
        let state = self.read()?;
        Ok(state.records.iter().find(|r| r.id == id).cloned())
    }

    /// Append a new listing. Fails if the id already exists.
    pub fn insert(&self, record: ListingRecord) -> Result<u64, SourceError> {
        let mut state = self.write()?;
        if state.records.iter().any(|r| r.id == record.id) {
            return Err(SourceError::DuplicateId(record.id));
        }
        state.records.push(record);
        state.version += 1;
        Ok(state.version)
    }

    /// Replace a listing in place, or append it if the id is new.
    pub fn upsert(&self, record: ListingRecord) -> Result<u64, SourceError> {
        let mut state = self.write()?;
        let existing = state.records.iter().position(|r| r.id == record.id);
        match existing {
            Some(index) => state.records[index] = record,
            None => state.records.push(record),
        }
        state.version += 1;
        Ok(state.version)
    }

    /// Remove a listing by id, returning it.
    pub fn remove(&self, id: &str) -> Result<ListingRecord, SourceError> {
        let mut state = self.write()?;
        let index = state
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| SourceError::NotFound(id.to_string()))?;
        let removed = state.records.remove(index);
        state.version += 1;
        Ok(removed)
    }

    /// Find listings matching a predicate, in catalog order.
    pub fn find(
        &self,
        predicate: &dyn Fn(&ListingRecord) -> bool,
    ) -> Result<Vec<ListingRecord>, SourceError> {
        let state = self.read()?;
        Ok(state
            .records
            .iter()
            .filter(|r| predicate(*r))
            .cloned()
            .collect())
    }
}

impl ListingSource for InMemoryListingStore {
    fn snapshot(&self) -> Result<CatalogSnapshot, SourceError> {
        let state = self.read()?;
        tracing::debug!(
            version = state.version,
            records = state.records.len(),
            "catalog snapshot taken"
        );
        Ok(CatalogSnapshot::from_unique(
            state.records.clone(),
            state.version,
        ))
    }
}
