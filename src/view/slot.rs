//! ResultSlot - last-write-wins holder for results computed off the caller's thread.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::error::ViewError;
use crate::query::ResultPage;

/// Orders query requests. A higher ticket was issued later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QueryTicket(u64);

impl QueryTicket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

struct SlotInner {
    issued: AtomicU64,
    latest: RwLock<Option<(QueryTicket, ResultPage)>>,
}

/// Holds the freshest published [`ResultPage`].
///
/// Take a [`QueryTicket`] when a request is made and publish with it when the
/// result is ready. A result whose ticket is older than the stored one is
/// discarded, so a slow stale computation never overwrites a fresher page.
/// Clone-friendly via Arc.
#[derive(Clone)]
pub struct ResultSlot {
    inner: Arc<SlotInner>,
}

impl Default for ResultSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultSlot {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(SlotInner {
                issued: AtomicU64::new(0),
                latest: RwLock::new(None),
            }),
        }
    }

    /// Issue the next ticket. Tickets start at 1.
    pub fn ticket(&self) -> QueryTicket {
        QueryTicket(self.inner.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Store `page` unless a result from a newer ticket is already stored.
    ///
    /// Returns whether the page was stored.
    pub fn publish(&self, ticket: QueryTicket, page: ResultPage) -> Result<bool, ViewError> {
        let mut latest = self.inner.latest.write().map_err(|_| ViewError::Poisoned)?;

        if let Some((current, _)) = latest.as_ref() {
            if ticket <= *current {
                tracing::debug!(
                    ticket = ticket.value(),
                    current = current.value(),
                    "discarding stale query result"
                );
                return Ok(false);
            }
        }

        *latest = Some((ticket, page));
        Ok(true)
    }

    /// The freshest published page, if any.
    pub fn latest(&self) -> Result<Option<ResultPage>, ViewError> {
        let latest = self.inner.latest.read().map_err(|_| ViewError::Poisoned)?;
        Ok(latest.as_ref().map(|(_, page)| page.clone()))
    }

    /// Ticket of the freshest published page, if any.
    pub fn latest_ticket(&self) -> Result<Option<QueryTicket>, ViewError> {
        let latest = self.inner.latest.read().map_err(|_| ViewError::Poisoned)?;
        Ok(latest.as_ref().map(|(ticket, _)| *ticket))
    }
}
