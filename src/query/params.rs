//! Query parameters - the user-selected filter, sort and pagination state.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ViewConfig;
use crate::error::QueryError;

/// Sort order applied to matched listings. Exactly one key, one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    PriceAsc,
    PriceDesc,
    WeightAsc,
    WeightDesc,
    NameAsc,
    NameDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::WeightAsc,
        SortKey::WeightDesc,
        SortKey::NameAsc,
        SortKey::NameDesc,
    ];

    /// Wire name, e.g. `"price_asc"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "price_asc",
            SortKey::PriceDesc => "price_desc",
            SortKey::WeightAsc => "weight_asc",
            SortKey::WeightDesc => "weight_desc",
            SortKey::NameAsc => "name_asc",
            SortKey::NameDesc => "name_desc",
        }
    }

    pub fn is_descending(&self) -> bool {
        matches!(
            self,
            SortKey::PriceDesc | SortKey::WeightDesc | SortKey::NameDesc
        )
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| QueryError::UnknownSortKey(s.to_string()))
    }
}

/// Closed price interval, inclusive on both ends.
///
/// The pipeline takes the bounds literally: an inverted range matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Every non-negative price.
    pub fn unbounded() -> Self {
        Self {
            min: 0.0,
            max: f64::MAX,
        }
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }

    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }

    /// The same range with its bounds in order, as a range slider would report it.
    pub fn normalized(self) -> Self {
        if self.is_inverted() {
            Self {
                min: self.max,
                max: self.min,
            }
        } else {
            self
        }
    }
}

/// Filter, sort and pagination state for one catalog view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryParameters {
    /// Case-insensitive substring matched against name, color, species and variety.
    pub search_text: String,
    pub price_range: PriceRange,
    /// Allowed varieties. Empty means no restriction.
    pub type_filter: BTreeSet<String>,
    /// Allowed colors. Empty means no restriction.
    pub color_filter: BTreeSet<String>,
    pub certified_only: bool,
    pub sort_key: SortKey,
    /// 1-based page number.
    pub page_number: u32,
    pub page_size: u32,
}

impl Default for QueryParameters {
    fn default() -> Self {
        Self::from_config(&ViewConfig::default())
    }
}

impl QueryParameters {
    /// Mount-time defaults for a view with the given configuration.
    pub fn from_config(config: &ViewConfig) -> Self {
        Self {
            search_text: String::new(),
            price_range: config.price_range,
            type_filter: BTreeSet::new(),
            color_filter: BTreeSet::new(),
            certified_only: false,
            sort_key: config.default_sort,
            page_number: 1,
            page_size: config.page_size,
        }
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_price_range(mut self, min: f64, max: f64) -> Self {
        self.price_range = PriceRange::new(min, max);
        self
    }

    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.type_filter = types.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.color_filter = colors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_certified_only(mut self, certified_only: bool) -> Self {
        self.certified_only = certified_only;
        self
    }

    pub fn sorted_by(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }

    pub fn page(mut self, page_number: u32) -> Self {
        self.page_number = page_number;
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Check the pagination contract: both page number and page size are positive.
    pub fn validate(&self) -> Result<(), QueryError> {
        validate_page(self.page_number, self.page_size)
    }

    /// Whether any filter narrows the catalog beyond the built-in defaults.
    pub fn has_filters(&self) -> bool {
        self.narrows(&Self::default())
    }

    /// Whether any filter differs from `baseline`, e.g. a view's mount-time
    /// parameters. Sort and paging are ignored.
    pub fn narrows(&self, baseline: &QueryParameters) -> bool {
        self.search_text != baseline.search_text
            || self.price_range != baseline.price_range
            || self.type_filter != baseline.type_filter
            || self.color_filter != baseline.color_filter
            || self.certified_only != baseline.certified_only
    }

    /// Copy the filters of `baseline`, leaving sort and paging alone.
    pub(crate) fn reset_filters(&mut self, baseline: &QueryParameters) {
        self.search_text.clone_from(&baseline.search_text);
        self.price_range = baseline.price_range;
        self.type_filter.clone_from(&baseline.type_filter);
        self.color_filter.clone_from(&baseline.color_filter);
        self.certified_only = baseline.certified_only;
    }
}

pub(crate) fn validate_page(page_number: u32, page_size: u32) -> Result<(), QueryError> {
    if page_size == 0 {
        return Err(QueryError::invalid("page_size", "must be at least 1"));
    }
    if page_number == 0 {
        return Err(QueryError::invalid("page_number", "pages are numbered from 1"));
    }
    Ok(())
}
