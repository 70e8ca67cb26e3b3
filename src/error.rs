use thiserror::Error;

/// Errors raised by the query pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A pagination parameter is outside its contract (page size or page number of zero).
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
    /// A sort key wire name did not match any known key.
    #[error("unknown sort key: {0}")]
    UnknownSortKey(String),
}

impl QueryError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        QueryError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Errors raised by a listing source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// A listing with this identifier already exists in the catalog.
    #[error("duplicate listing id: {0}")]
    DuplicateId(String),
    /// No listing with this identifier exists.
    #[error("listing not found: {0}")]
    NotFound(String),
    /// Storage-level error.
    #[error("listing storage error: {0}")]
    Storage(String),
    /// Snapshot encoding or decoding failed.
    #[error("snapshot codec error: {0}")]
    Codec(String),
}

/// Errors raised while submitting a bid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BidError {
    #[error("no listing with id {0} accepts bids")]
    UnknownListing(String),
    /// The amount is not a finite positive number.
    #[error("bid amount {0} is not a positive finite number")]
    InvalidAmount(f64),
    /// The amount does not beat the current highest bid or asking price.
    #[error("bid of {offered} must be greater than {minimum}")]
    TooLow { minimum: f64, offered: f64 },
    #[error("bid storage error: {0}")]
    Storage(String),
}

/// Errors raised while loading view configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("failed to parse view config: {0}")]
    Parse(String),
    #[error("invalid view config: {0}")]
    Invalid(String),
}

/// Errors raised by catalog views and background query workers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("result slot lock poisoned")]
    Poisoned,
    #[error("query worker panicked")]
    WorkerPanicked,
}
