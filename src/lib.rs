//! Catalog core for a gemstone marketplace.
//!
//! Listings arrive from a [`ListingSource`] as immutable [`CatalogSnapshot`]s.
//! The [`query`] pipeline filters, sorts and paginates a snapshot into a
//! [`ResultPage`]; [`CatalogView`] keeps that page in step with a user's
//! parameters, and [`BidSubmission`] takes a chosen listing and amount.

mod bid;
mod config;
mod error;
mod facets;
mod listing;
mod query;
mod source;
mod view;

pub use bid::{bid_floor, validate_bid, Bid, BidReceipt, BidSubmission, InMemoryBidBook};
pub use config::ViewConfig;
pub use error::{BidError, ConfigError, QueryError, SourceError, ViewError};
pub use facets::{facets, CatalogFacets};
pub use listing::{CatalogSnapshot, ListingRecord};
pub use query::{
    compare_names, filter_catalog, matches, page_count, paginate, query, sort_matches, PriceRange,
    QueryParameters, ResultPage, SortKey,
};
pub use source::{mock, InMemoryListingStore, ListingSource};
pub use view::{CatalogView, QueryTicket, QueryWorker, ResultSlot, ResultSummary, RESULTS_CHANGED};
