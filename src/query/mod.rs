//! Catalog query pipeline: filter, then sort, then paginate.
//!
//! [`query`] is a pure function of a catalog and a set of
//! [`QueryParameters`]. It holds no state between calls, so a view simply
//! calls it again whenever a parameter or the catalog changes.
//!
//! ## Example
//!
//! ```ignore
//! use gem_catalog::{query, QueryParameters, SortKey};
//!
//! let params = QueryParameters::default()
//!     .with_search("sapphire")
//!     .with_certified_only(true)
//!     .sorted_by(SortKey::PriceDesc);
//!
//! let page = query(&catalog, &params)?;
//! println!("{} of {} listings", page.visible_records.len(), page.matched_total);
//! ```

mod filter;
mod page;
mod params;
mod sort;

use crate::error::QueryError;
use crate::listing::ListingRecord;

pub use filter::{filter_catalog, matches};
pub use page::{page_count, paginate, ResultPage};
pub use params::{PriceRange, QueryParameters, SortKey};
pub use sort::{compare_names, sort_matches};

/// Run the full pipeline and build the visible result page.
///
/// Fails only when the pagination parameters are invalid; zero matches is an
/// ordinary empty page. Neither `catalog` nor `params` is modified.
pub fn query(catalog: &[ListingRecord], params: &QueryParameters) -> Result<ResultPage, QueryError> {
    params.validate()?;

    let matched = filter_catalog(catalog, params);
    let ordered = sort_matches(&matched, params.sort_key);
    let visible = paginate(&ordered, params.page_number, params.page_size)?;

    tracing::debug!(
        catalog = catalog.len(),
        matched = matched.len(),
        visible = visible.len(),
        page = params.page_number,
        sort = %params.sort_key,
        "catalog query"
    );

    Ok(ResultPage {
        matched_total: matched.len(),
        visible_records: visible.iter().map(|record| (*record).clone()).collect(),
        page_number: params.page_number,
        page_size: params.page_size,
    })
}
