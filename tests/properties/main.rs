//! Property tests for the catalog query pipeline.

use std::collections::HashSet;

use gem_catalog::{
    filter_catalog, matches, page_count, paginate, query, sort_matches, ListingRecord,
    QueryParameters, SortKey,
};
use proptest::prelude::*;

const NAMES: &[&str] = &["Opal", "opal", "Émeraude", "Emerald", "Item 2", "Item 10", "Zircon", "Ruby"];
const COLORS: &[&str] = &["Blue", "Red", "Green", "White"];
const VARIETIES: &[&str] = &["Sapphire", "Ruby", "Emerald", "Opal"];
const SPECIES: &[&str] = &["Corundum", "Beryl"];

fn arb_catalog() -> impl Strategy<Value = Vec<ListingRecord>> {
    let record = (
        0..NAMES.len(),
        0..COLORS.len(),
        0..VARIETIES.len(),
        prop::option::of(0..SPECIES.len()),
        0u32..20,
        1u32..10,
        any::<bool>(),
    );

    prop::collection::vec(record, 0..40).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, color, variety, species, price, carats, certified))| {
                let mut record = ListingRecord::new(
                    format!("id-{}", i),
                    NAMES[name],
                    // Coarse prices and weights so ties are common.
                    f64::from(price) * 100.0,
                    f64::from(carats) * 0.5,
                )
                .with_color(COLORS[color])
                .with_variety(VARIETIES[variety])
                .with_certified(certified);
                if let Some(species) = species {
                    record = record.with_species(SPECIES[species]);
                }
                record
            })
            .collect()
    })
}

fn arb_sort_key() -> impl Strategy<Value = SortKey> {
    prop::sample::select(SortKey::ALL.to_vec())
}

fn arb_params() -> impl Strategy<Value = QueryParameters> {
    (
        prop::sample::select(vec!["", "o", "RUB", "sapph", "item", "beryl", "é"]),
        0u32..2000,
        0u32..2000,
        prop::sample::subsequence(VARIETIES.to_vec(), 0..=2),
        prop::sample::subsequence(COLORS.to_vec(), 0..=2),
        any::<bool>(),
        arb_sort_key(),
        1u32..6,
        1u32..8,
    )
        .prop_map(|(search, lo, hi, types, colors, certified, sort, page, size)| {
            QueryParameters::default()
                .with_search(search)
                .with_price_range(f64::from(lo), f64::from(hi))
                .with_types(types)
                .with_colors(colors)
                .with_certified_only(certified)
                .sorted_by(sort)
                .page(page)
                .with_page_size(size)
        })
}

/// Each filter restated directly from the record's fields, one verdict per filter.
fn filter_verdicts(record: &ListingRecord, params: &QueryParameters) -> [bool; 5] {
    let needle = params.search_text.to_lowercase();
    let mut fields = vec![&record.display_name, &record.color, &record.variety];
    if let Some(species) = &record.species {
        fields.push(species);
    }
    let search = needle.is_empty() || fields.iter().any(|f| f.to_lowercase().contains(&needle));
    let price = params.price_range.min <= record.asking_price
        && record.asking_price <= params.price_range.max;
    let variety = params.type_filter.is_empty() || params.type_filter.contains(&record.variety);
    let color = params.color_filter.is_empty() || params.color_filter.contains(&record.color);
    let certified = !params.certified_only || record.certified;
    [search, price, variety, color, certified]
}

fn primary_equal(a: &ListingRecord, b: &ListingRecord, key: SortKey) -> bool {
    match key {
        SortKey::PriceAsc | SortKey::PriceDesc => a.asking_price == b.asking_price,
        SortKey::WeightAsc | SortKey::WeightDesc => a.mass_carats == b.mass_carats,
        SortKey::NameAsc | SortKey::NameDesc => a.display_name == b.display_name,
    }
}

proptest! {
    #[test]
    fn filter_subset_law(catalog in arb_catalog(), params in arb_params()) {
        let matched = filter_catalog(&catalog, &params);
        let matched_ids: HashSet<_> = matched.iter().map(|r| r.id.as_str()).collect();

        for record in &matched {
            let verdicts = filter_verdicts(record, &params);
            prop_assert!(verdicts.iter().all(|pass| *pass), "{} kept with {:?}", record.id, verdicts);
        }

        for record in catalog.iter().filter(|r| !matched_ids.contains(r.id.as_str())) {
            let verdicts = filter_verdicts(record, &params);
            prop_assert!(verdicts.iter().any(|pass| !pass), "{} dropped with {:?}", record.id, verdicts);
            prop_assert!(!matches(record, &params));
        }

        // Catalog order is kept.
        let expected: Vec<_> = catalog
            .iter()
            .filter(|r| filter_verdicts(r, &params).iter().all(|pass| *pass))
            .map(|r| r.id.as_str())
            .collect();
        let actual: Vec<_> = matched.iter().map(|r| r.id.as_str()).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn sort_is_stable(catalog in arb_catalog(), key in arb_sort_key()) {
        let matched: Vec<_> = catalog.iter().collect();
        let ordered = sort_matches(&matched, key);
        let position = |record: &ListingRecord| catalog.iter().position(|r| r.id == record.id);

        prop_assert_eq!(ordered.len(), matched.len());
        for pair in ordered.windows(2) {
            if primary_equal(pair[0], pair[1], key) {
                prop_assert!(position(pair[0]) < position(pair[1]));
            }
        }
    }

    #[test]
    fn pages_reassemble_the_ordered_set(catalog in arb_catalog(), size in 1u32..9, key in arb_sort_key()) {
        let matched: Vec<_> = catalog.iter().collect();
        let ordered = sort_matches(&matched, key);

        let mut reassembled = Vec::new();
        for page in 1..=page_count(ordered.len(), size) {
            reassembled.extend_from_slice(paginate(&ordered, page, size).unwrap());
        }

        let expected: Vec<_> = ordered.iter().map(|r| r.id.as_str()).collect();
        let actual: Vec<_> = reassembled.iter().map(|r| r.id.as_str()).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn query_is_idempotent(catalog in arb_catalog(), params in arb_params()) {
        prop_assert_eq!(query(&catalog, &params).unwrap(), query(&catalog, &params).unwrap());
    }

    #[test]
    fn adding_a_constraint_never_widens(catalog in arb_catalog(), params in arb_params(), extra in 0usize..5) {
        let relaxed = query(&catalog, &params).unwrap().matched_total;

        let narrowed = match extra {
            0 => params.clone().with_certified_only(true),
            1 => {
                let mut p = params.clone();
                p.type_filter = if p.type_filter.is_empty() {
                    ["Ruby".to_string()].into()
                } else {
                    p.type_filter.iter().take(1).cloned().collect()
                };
                p
            }
            2 => {
                let mut p = params.clone();
                p.color_filter = if p.color_filter.is_empty() {
                    ["Blue".to_string()].into()
                } else {
                    p.color_filter.iter().take(1).cloned().collect()
                };
                p
            }
            3 => {
                let range = params.price_range;
                params.clone().with_price_range(range.min + 100.0, range.max - 100.0)
            }
            _ => {
                let text = format!("{}o", params.search_text);
                params.clone().with_search(text)
            }
        };

        prop_assert!(query(&catalog, &narrowed).unwrap().matched_total <= relaxed);
    }
}
