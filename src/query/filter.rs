//! Filtering stage: keep listings that pass every active filter.

use super::QueryParameters;
use crate::listing::ListingRecord;

/// Whether a single listing passes all filters in `params`.
pub fn matches(record: &ListingRecord, params: &QueryParameters) -> bool {
    Filter::new(params).accepts(record)
}

/// Select the listings that pass all filters, in catalog order.
///
/// The result borrows from `catalog`; nothing is cloned.
pub fn filter_catalog<'a>(
    catalog: &'a [ListingRecord],
    params: &QueryParameters,
) -> Vec<&'a ListingRecord> {
    let filter = Filter::new(params);
    catalog.iter().filter(|record| filter.accepts(record)).collect()
}

/// Filters are AND-composed; each one passes everything when inactive.
struct Filter<'p> {
    params: &'p QueryParameters,
    needle: Option<String>,
}

impl<'p> Filter<'p> {
    fn new(params: &'p QueryParameters) -> Self {
        let needle = (!params.search_text.is_empty()).then(|| params.search_text.to_lowercase());
        Self { params, needle }
    }

    fn accepts(&self, record: &ListingRecord) -> bool {
        self.search_hit(record)
            && self.params.price_range.contains(record.asking_price)
            && (self.params.type_filter.is_empty()
                || self.params.type_filter.contains(record.variety.as_str()))
            && (self.params.color_filter.is_empty()
                || self.params.color_filter.contains(record.color.as_str()))
            && (!self.params.certified_only || record.certified)
    }

    fn search_hit(&self, record: &ListingRecord) -> bool {
        match &self.needle {
            None => true,
            Some(needle) => record
                .searchable_fields()
                .any(|field| field.to_lowercase().contains(needle.as_str())),
        }
    }
}
