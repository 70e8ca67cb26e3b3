//! Integration tests for catalog views and background queries.

use gem_catalog::{
    mock, query, CatalogView, InMemoryListingStore, ListingSource, QueryParameters, QueryWorker,
    ResultSlot, SortKey, ViewConfig,
};

fn store() -> InMemoryListingStore {
    InMemoryListingStore::seeded(mock::sample_catalog(120)).unwrap()
}

#[test]
fn view_matches_direct_query_after_each_change() {
    let store = store();
    let config = ViewConfig::from_json(r#"{ "page_size": 8, "default_sort": "name_asc" }"#).unwrap();
    let mut view = CatalogView::new(store.snapshot().unwrap(), &config);

    view.set_search_text("an");
    view.toggle_color("Blue");
    view.set_sort(SortKey::WeightDesc);
    view.next_page();

    let expected = query(view.catalog(), view.params()).unwrap();
    assert_eq!(view.page(), &expected);
    assert_eq!(view.params().page_size, 8);
}

#[test]
fn narrowing_filters_never_strand_the_user() {
    let mut view = CatalogView::new(store().snapshot().unwrap(), &ViewConfig::default());
    view.set_page(5);
    assert_eq!(view.page().page_number, 5);

    view.set_certified_only(true);
    view.toggle_type("Diamond");
    let page = view.page();
    assert_eq!(page.page_number, 1);
    assert!(page.page_number <= page.total_pages().max(1));
    assert!(page.visible_records.iter().all(|r| r.certified && r.variety == "Diamond"));
}

#[test]
fn paging_walks_the_whole_result() {
    let mut view = CatalogView::new(store().snapshot().unwrap(), &ViewConfig::default());
    view.toggle_type("Ruby");

    let total = view.page().matched_total;
    let mut seen = view.page().visible_ids().len();
    while view.page().has_next() {
        seen += view.next_page().visible_records.len();
    }
    assert_eq!(seen, total);

    // Next on the last page stays on the last page.
    let last = view.page().page_number;
    assert_eq!(view.next_page().page_number, last);
}

#[test]
fn store_refresh_keeps_parameters() {
    let store = store();
    let mut view = CatalogView::new(store.snapshot().unwrap(), &ViewConfig::default());
    view.toggle_type("Opal");
    let before = view.page().matched_total;

    store.remove("gem-10").unwrap();
    let page = view.refresh_from(&store).unwrap();
    assert_eq!(page.matched_total, before - 1);
    assert!(view.params().type_filter.contains("Opal"));
}

#[test]
fn background_queries_resolve_to_latest_request() {
    let catalog = store().snapshot().unwrap();
    let slot = ResultSlot::new();

    let workers: Vec<_> = SortKey::ALL
        .into_iter()
        .map(|key| {
            let params = QueryParameters::default().sorted_by(key);
            QueryWorker::spawn(&slot, catalog.clone(), params)
        })
        .collect();
    let last_ticket = workers.last().map(|w| w.ticket());

    for worker in workers {
        worker.join().unwrap();
    }

    let expected = query(&catalog, &QueryParameters::default().sorted_by(SortKey::NameDesc)).unwrap();
    assert_eq!(slot.latest_ticket().unwrap(), last_ticket);
    assert_eq!(slot.latest().unwrap(), Some(expected));
}
