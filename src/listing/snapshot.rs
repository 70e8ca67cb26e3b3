//! CatalogSnapshot - an immutable, cheaply cloneable view of a catalog.

use std::collections::HashSet;
use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::ListingRecord;
use crate::error::SourceError;

/// An ordered, read-only sequence of listings with unique identifiers.
///
/// Snapshots are values: a source produces a new snapshot on every change and
/// never mutates one it already handed out. Clones share the same records.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSnapshot {
    records: Arc<[ListingRecord]>,
    version: u64,
}

/// Wire frame for the binary snapshot encoding.
#[derive(Serialize, Deserialize)]
struct SnapshotFrame {
    version: u64,
    records: Vec<ListingRecord>,
}

impl Default for CatalogSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}

impl CatalogSnapshot {
    /// Build a snapshot from records, rejecting duplicate identifiers.
    pub fn new(records: Vec<ListingRecord>) -> Result<Self, SourceError> {
        Self::with_version(records, 0)
    }

    /// Build a snapshot tagged with the source version it was taken at.
    pub fn with_version(records: Vec<ListingRecord>, version: u64) -> Result<Self, SourceError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(SourceError::DuplicateId(record.id.clone()));
            }
        }
        Ok(Self::from_unique(records, version))
    }

    /// Build a snapshot from records the caller already knows are unique.
    pub(crate) fn from_unique(records: Vec<ListingRecord>, version: u64) -> Self {
        Self {
            records: records.into(),
            version,
        }
    }

    pub fn empty() -> Self {
        Self::from_unique(Vec::new(), 0)
    }

    /// Source version this snapshot was taken at.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn records(&self) -> &[ListingRecord] {
        &self.records
    }

    /// Look up a listing by identifier.
    pub fn get(&self, id: &str) -> Option<&ListingRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Whether two snapshots share the same underlying records.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.records, &other.records)
    }

    /// Encode into the compact binary form used for caching and transfer.
    pub fn encode(&self) -> Result<Vec<u8>, SourceError> {
        let frame = SnapshotFrame {
            version: self.version,
            records: self.records.to_vec(),
        };
        bitcode::serialize(&frame).map_err(|e| SourceError::Codec(e.to_string()))
    }

    /// Decode a snapshot produced by [`CatalogSnapshot::encode`].
    pub fn decode(bytes: &[u8]) -> Result<Self, SourceError> {
        let frame: SnapshotFrame =
            bitcode::deserialize(bytes).map_err(|e| SourceError::Codec(e.to_string()))?;
        Self::with_version(frame.records, frame.version)
    }
}

impl Deref for CatalogSnapshot {
    type Target = [ListingRecord];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

impl TryFrom<Vec<ListingRecord>> for CatalogSnapshot {
    type Error = SourceError;

    fn try_from(records: Vec<ListingRecord>) -> Result<Self, Self::Error> {
        Self::new(records)
    }
}
