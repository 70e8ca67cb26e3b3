//! Pagination stage and the derived result page.

use serde::{Deserialize, Serialize};

use super::params::validate_page;
use crate::error::QueryError;
use crate::listing::ListingRecord;

/// Slice one 1-based page out of an ordered sequence.
///
/// A page past the end is empty, not an error. Page size or number of zero is
/// rejected with [`QueryError::InvalidParameter`].
pub fn paginate<T>(ordered: &[T], page_number: u32, page_size: u32) -> Result<&[T], QueryError> {
    validate_page(page_number, page_size)?;

    let size = page_size as usize;
    let start = (page_number as usize - 1).saturating_mul(size);
    if start >= ordered.len() {
        return Ok(&[]);
    }
    let end = start.saturating_add(size).min(ordered.len());
    Ok(&ordered[start..end])
}

/// Number of pages needed to show `total` items, `page_size` at a time.
pub fn page_count(total: usize, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    let pages = total.div_ceil(page_size as usize);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// The visible page of a catalog query plus the counts shown next to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultPage {
    /// Listings passing all filters, before pagination.
    pub matched_total: usize,
    /// At most `page_size` listings, in sort order.
    pub visible_records: Vec<ListingRecord>,
    pub page_number: u32,
    pub page_size: u32,
}

impl ResultPage {
    /// A page with no matches.
    pub fn empty(page_number: u32, page_size: u32) -> Self {
        Self {
            matched_total: 0,
            visible_records: Vec::new(),
            page_number,
            page_size,
        }
    }

    pub fn total_pages(&self) -> u32 {
        page_count(self.matched_total, self.page_size)
    }

    pub fn has_next(&self) -> bool {
        self.page_number < self.total_pages()
    }

    pub fn has_prev(&self) -> bool {
        self.page_number > 1
    }

    /// Whether this page shows nothing.
    pub fn is_empty(&self) -> bool {
        self.visible_records.is_empty()
    }

    pub fn visible_ids(&self) -> Vec<&str> {
        self.visible_records.iter().map(|r| r.id()).collect()
    }
}
