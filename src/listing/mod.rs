//! Listings - the immutable records a catalog is made of.
//!
//! A [`ListingRecord`] is owned by the listing source that produced it. The query
//! pipeline only ever reads records through a [`CatalogSnapshot`].
//!
//! ## Example
//!
//! ```ignore
//! use gem_catalog::{CatalogSnapshot, ListingRecord};
//!
//! let sapphire = ListingRecord::new("1", "Blue Sapphire", 1000.0, 2.0)
//!     .with_color("Blue")
//!     .with_variety("Sapphire")
//!     .with_certified(true);
//!
//! let catalog = CatalogSnapshot::new(vec![sapphire])?;
//! assert_eq!(catalog.len(), 1);
//! ```

mod snapshot;

use serde::{Deserialize, Serialize};

pub use snapshot::CatalogSnapshot;

/// A gemstone listing as supplied by a listing source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingRecord {
    /// Opaque identifier, unique within a catalog snapshot.
    pub id: String,
    pub display_name: String,
    /// Non-negative, currency-agnostic amount.
    pub asking_price: f64,
    pub certified: bool,
    /// Positive mass in carats.
    pub mass_carats: f64,
    pub color: String,
    pub variety: String,
    #[serde(default)]
    pub species: Option<String>,
}

impl ListingRecord {
    /// Create an uncertified listing with empty color and variety labels.
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        asking_price: f64,
        mass_carats: f64,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            asking_price,
            certified: false,
            mass_carats,
            color: String::new(),
            variety: String::new(),
            species: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_variety(mut self, variety: impl Into<String>) -> Self {
        self.variety = variety.into();
        self
    }

    pub fn with_species(mut self, species: impl Into<String>) -> Self {
        self.species = Some(species.into());
        self
    }

    pub fn with_certified(mut self, certified: bool) -> Self {
        self.certified = certified;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The text fields free-text search looks at, skipping an absent species.
    pub fn searchable_fields(&self) -> impl Iterator<Item = &str> {
        [
            Some(self.display_name.as_str()),
            Some(self.color.as_str()),
            self.species.as_deref(),
            Some(self.variety.as_str()),
        ]
        .into_iter()
        .flatten()
    }
}
