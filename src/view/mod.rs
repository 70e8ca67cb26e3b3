//! Views - keeping a result page in step with the user's parameters.
//!
//! The pipeline itself is stateless. This module holds what a listing page
//! needs around it: [`CatalogView`] re-issues the query whenever a parameter
//! changes and clamps the page number afterwards; [`ResultSlot`] and
//! [`QueryWorker`] move the computation off the caller's thread for very large
//! catalogs while guaranteeing the newest request's result wins.

mod catalog_view;
mod slot;
mod worker;

use serde::{Deserialize, Serialize};

use crate::query::ResultPage;

pub use catalog_view::{CatalogView, RESULTS_CHANGED};
pub use slot::{QueryTicket, ResultSlot};
pub use worker::QueryWorker;

/// Compact description of a result page, sent to change listeners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSummary {
    pub matched_total: usize,
    pub page_number: u32,
    pub total_pages: u32,
    pub visible_ids: Vec<String>,
}

impl From<&ResultPage> for ResultSummary {
    fn from(page: &ResultPage) -> Self {
        Self {
            matched_total: page.matched_total,
            page_number: page.page_number,
            total_pages: page.total_pages(),
            visible_ids: page.visible_records.iter().map(|r| r.id.clone()).collect(),
        }
    }
}
