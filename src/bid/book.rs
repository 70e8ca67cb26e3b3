//! InMemoryBidBook - records accepted bids against a catalog snapshot.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{validate_bid, Bid, BidReceipt, BidSubmission};
use crate::error::BidError;
use crate::listing::CatalogSnapshot;

struct BookState {
    catalog: CatalogSnapshot,
    accepted: Vec<Bid>,
    highest: HashMap<String, f64>,
}

/// In-memory bid submission that validates bids against the floor rule.
///
/// Accepted bids are kept in submission order. Clone-friendly via Arc.
#[derive(Clone)]
pub struct InMemoryBidBook {
    state: Arc<RwLock<BookState>>,
}

impl InMemoryBidBook {
    pub fn new(catalog: CatalogSnapshot) -> Self {
        Self {
            state: Arc::new(RwLock::new(BookState {
                catalog,
                accepted: Vec::new(),
                highest: HashMap::new(),
            })),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BookState>, BidError> {
        self.state
            .read()
            .map_err(|_| BidError::Storage("lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BookState>, BidError> {
        self.state
            .write()
            .map_err(|_| BidError::Storage("lock poisoned".into()))
    }

    /// Switch to a newer catalog; existing bids are kept.
    pub fn replace_catalog(&self, catalog: CatalogSnapshot) -> Result<(), BidError> {
        self.write()?.catalog = catalog;
        Ok(())
    }

    pub fn highest_bid(&self, listing_id: &str) -> Result<Option<f64>, BidError> {
        Ok(self.read()?.highest.get(listing_id).copied())
    }

    /// Accepted bids for one listing, oldest first.
    pub fn bids_for(&self, listing_id: &str) -> Result<Vec<Bid>, BidError> {
        let state = self.read()?;
        Ok(state
            .accepted
            .iter()
            .filter(|bid| bid.listing_id == listing_id)
            .cloned()
            .collect())
    }

    /// All accepted bids, oldest first.
    pub fn all_bids(&self) -> Result<Vec<Bid>, BidError> {
        Ok(self.read()?.accepted.clone())
    }
}

impl BidSubmission for InMemoryBidBook {
    fn submit(&self, bid: Bid) -> Result<BidReceipt, BidError> {
        let mut state = self.write()?;

        let listing = state
            .catalog
            .get(&bid.listing_id)
            .ok_or_else(|| BidError::UnknownListing(bid.listing_id.clone()))?;
        let highest = state.highest.get(&bid.listing_id).copied();
        validate_bid(listing, highest, bid.amount)?;

        state.highest.insert(bid.listing_id.clone(), bid.amount);
        state.accepted.push(bid.clone());
        let sequence = state.accepted.len() as u64;

        tracing::info!(
            listing_id = %bid.listing_id,
            amount = bid.amount,
            sequence,
            "bid accepted"
        );

        Ok(BidReceipt {
            sequence,
            listing_id: bid.listing_id,
            amount: bid.amount,
        })
    }
}
