//! Bids - handing a chosen listing and an amount to bid submission.
//!
//! Only the floor rule lives here: a bid must be strictly greater than both
//! the listing's asking price and its current highest bid. Increment rules
//! belong to the marketplace front end.
//!
//! ## Example
//!
//! ```ignore
//! use gem_catalog::{Bid, BidSubmission, InMemoryBidBook};
//!
//! let book = InMemoryBidBook::new(catalog);
//! let receipt = book.submit(Bid::new("gem-1", 1250.0))?;
//! assert_eq!(book.highest_bid("gem-1")?, Some(1250.0));
//! ```

mod book;

use serde::{Deserialize, Serialize};

use crate::error::BidError;
use crate::listing::ListingRecord;

pub use book::InMemoryBidBook;

/// An offer on a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    pub listing_id: String,
    pub amount: f64,
}

impl Bid {
    pub fn new(listing_id: impl Into<String>, amount: f64) -> Self {
        Self {
            listing_id: listing_id.into(),
            amount,
        }
    }
}

/// Acknowledgement of an accepted bid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BidReceipt {
    /// Position of this bid in submission order, starting at 1.
    pub sequence: u64,
    pub listing_id: String,
    pub amount: f64,
}

/// Receives bids chosen from a result page.
pub trait BidSubmission: Send + Sync {
    fn submit(&self, bid: Bid) -> Result<BidReceipt, BidError>;
}

/// The amount a new bid has to exceed.
pub fn bid_floor(listing: &ListingRecord, highest_bid: Option<f64>) -> f64 {
    match highest_bid {
        Some(highest) => highest.max(listing.asking_price),
        None => listing.asking_price,
    }
}

/// Check `amount` against the floor for `listing`.
pub fn validate_bid(
    listing: &ListingRecord,
    highest_bid: Option<f64>,
    amount: f64,
) -> Result<(), BidError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(BidError::InvalidAmount(amount));
    }
    let minimum = bid_floor(listing, highest_bid);
    if amount <= minimum {
        return Err(BidError::TooLow {
            minimum,
            offered: amount,
        });
    }
    Ok(())
}
