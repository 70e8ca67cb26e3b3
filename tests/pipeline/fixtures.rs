use gem_catalog::{CatalogSnapshot, ListingRecord};

/// The two-listing catalog used by the reference scenarios.
pub fn sapphire_and_ruby() -> CatalogSnapshot {
    CatalogSnapshot::new(vec![
        ListingRecord::new("1", "Blue Sapphire", 1000.0, 2.0)
            .with_color("Blue")
            .with_variety("Sapphire")
            .with_certified(true),
        ListingRecord::new("2", "Ruby", 3000.0, 1.5)
            .with_color("Red")
            .with_variety("Ruby")
            .with_certified(false),
    ])
    .unwrap()
}

/// `count` listings named "Item 1".."Item <count>", all at the same price,
/// stored in reverse name order.
pub fn numbered_items(count: usize) -> CatalogSnapshot {
    let records = (1..=count)
        .rev()
        .map(|i| ListingRecord::new(format!("item-{}", i), format!("Item {}", i), 250.0, 1.0))
        .collect();
    CatalogSnapshot::new(records).unwrap()
}
