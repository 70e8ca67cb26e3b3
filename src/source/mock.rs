//! Deterministic mock catalog used by demos and tests.

use crate::listing::ListingRecord;

struct Stone {
    variety: &'static str,
    color: &'static str,
    species: Option<&'static str>,
    price_per_carat: f64,
}

const STONES: &[Stone] = &[
    Stone { variety: "Sapphire", color: "Blue", species: Some("Corundum"), price_per_carat: 900.0 },
    Stone { variety: "Ruby", color: "Red", species: Some("Corundum"), price_per_carat: 1800.0 },
    Stone { variety: "Emerald", color: "Green", species: Some("Beryl"), price_per_carat: 1200.0 },
    Stone { variety: "Aquamarine", color: "Blue", species: Some("Beryl"), price_per_carat: 350.0 },
    Stone { variety: "Diamond", color: "Colorless", species: None, price_per_carat: 4200.0 },
    Stone { variety: "Tanzanite", color: "Violet", species: Some("Zoisite"), price_per_carat: 600.0 },
    Stone { variety: "Spinel", color: "Pink", species: Some("Spinel"), price_per_carat: 500.0 },
    Stone { variety: "Topaz", color: "Yellow", species: Some("Topaz"), price_per_carat: 120.0 },
    Stone { variety: "Garnet", color: "Red", species: Some("Garnet"), price_per_carat: 80.0 },
    Stone { variety: "Opal", color: "White", species: None, price_per_carat: 250.0 },
];

const ORIGINS: &[&str] = &["Ceylon", "Burmese", "Colombian", "Madagascar", "Brazilian", "Tanzanian"];

/// Generate `count` listings with ids `gem-1` through `gem-<count>`.
///
/// The same `count` always yields the same catalog.
pub fn sample_catalog(count: usize) -> Vec<ListingRecord> {
    (0..count).map(sample_listing).collect()
}

fn sample_listing(index: usize) -> ListingRecord {
    let stone = &STONES[index % STONES.len()];
    let origin = ORIGINS[(index / STONES.len()) % ORIGINS.len()];

    // 0.50ct to 4.95ct in 0.05ct steps.
    let carats = 0.5 + ((index * 37) % 90) as f64 * 0.05;
    let price = (stone.price_per_carat * carats).round();

    let mut record = ListingRecord::new(
        format!("gem-{}", index + 1),
        format!("{} {}", origin, stone.variety),
        price,
        carats,
    )
    .with_color(stone.color)
    .with_variety(stone.variety)
    .with_certified(index % 3 != 2);

    if let Some(species) = stone.species {
        record = record.with_species(species);
    }
    record
}
