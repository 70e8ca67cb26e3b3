//! View configuration - the constants a catalog view mounts with.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::query::{PriceRange, SortKey};

const DEFAULT_PAGE_SIZE: u32 = 12;

/// Per-view constants: page size, initial sort and initial price range.
///
/// ```ignore
/// let config = ViewConfig::from_json(r#"{ "page_size": 24, "default_sort": "name_asc" }"#)?;
/// let params = QueryParameters::from_config(&config);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub page_size: u32,
    pub default_sort: SortKey,
    pub price_range: PriceRange,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            default_sort: SortKey::default(),
            price_range: PriceRange::unbounded(),
        }
    }
}

impl ViewConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ViewConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Invalid("page_size must be at least 1".into()));
        }
        if self.price_range.is_inverted() {
            return Err(ConfigError::Invalid(format!(
                "price_range min {} exceeds max {}",
                self.price_range.min, self.price_range.max
            )));
        }
        Ok(())
    }
}
