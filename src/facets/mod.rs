//! Facets - the option sets filter widgets offer for a catalog.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::listing::ListingRecord;
use crate::query::PriceRange;

/// Distinct varieties and colors plus the price span of a catalog.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogFacets {
    pub varieties: BTreeSet<String>,
    pub colors: BTreeSet<String>,
    /// None for an empty catalog.
    pub price_bounds: Option<PriceRange>,
}

/// Collect facets over every listing in `catalog`, ignoring current filters.
pub fn facets(catalog: &[ListingRecord]) -> CatalogFacets {
    let mut out = CatalogFacets::default();

    for record in catalog {
        if !record.variety.is_empty() {
            out.varieties.insert(record.variety.clone());
        }
        if !record.color.is_empty() {
            out.colors.insert(record.color.clone());
        }
        out.price_bounds = Some(match out.price_bounds {
            None => PriceRange::new(record.asking_price, record.asking_price),
            Some(bounds) => PriceRange::new(
                bounds.min.min(record.asking_price),
                bounds.max.max(record.asking_price),
            ),
        });
    }

    out
}
