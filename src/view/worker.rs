//! Background query worker for catalogs too large to query on the caller's thread.

use std::thread::{self, JoinHandle};

use super::slot::{QueryTicket, ResultSlot};
use crate::error::ViewError;
use crate::listing::CatalogSnapshot;
use crate::query::{query, QueryParameters};

/// A query running on its own thread, publishing into a [`ResultSlot`].
///
/// ## Example
///
/// ```ignore
/// use gem_catalog::{QueryWorker, ResultSlot};
///
/// let slot = ResultSlot::new();
/// let stale = QueryWorker::spawn(&slot, catalog.clone(), old_params);
/// let fresh = QueryWorker::spawn(&slot, catalog, new_params);
///
/// fresh.join()?;
/// stale.join()?; // never overwrites the fresh page
/// let page = slot.latest()?.unwrap();
/// ```
pub struct QueryWorker {
    ticket: QueryTicket,
    handle: JoinHandle<Result<bool, ViewError>>,
}

impl QueryWorker {
    /// Take a ticket now and run the query on a new thread.
    ///
    /// The ticket is issued before this returns, so request order is the
    /// order of `spawn` calls, not the order the threads finish in.
    pub fn spawn(slot: &ResultSlot, catalog: CatalogSnapshot, params: QueryParameters) -> Self {
        let ticket = slot.ticket();
        let slot = slot.clone();

        let handle = thread::spawn(move || -> Result<bool, ViewError> {
            let page = query(&catalog, &params)?;
            slot.publish(ticket, page)
        });

        Self { ticket, handle }
    }

    pub fn ticket(&self) -> QueryTicket {
        self.ticket
    }

    /// Wait for the query. `Ok(true)` if its page was published, `Ok(false)` if
    /// a newer request had already published.
    pub fn join(self) -> Result<bool, ViewError> {
        self.handle.join().map_err(|_| ViewError::WorkerPanicked)?
    }
}
