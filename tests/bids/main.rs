//! Integration tests for bid submission from a result page.

use gem_catalog::{
    mock, query, Bid, BidError, BidSubmission, CatalogSnapshot, InMemoryBidBook,
    QueryParameters, SortKey,
};

fn catalog() -> CatalogSnapshot {
    CatalogSnapshot::new(mock::sample_catalog(30)).unwrap()
}

#[test]
fn bid_on_a_listing_chosen_from_the_page() {
    let catalog = catalog();
    let book = InMemoryBidBook::new(catalog.clone());

    let params = QueryParameters::default().sorted_by(SortKey::PriceDesc).with_page_size(1);
    let page = query(&catalog, &params).unwrap();
    let chosen = &page.visible_records[0];

    let receipt = book
        .submit(Bid::new(chosen.id.clone(), chosen.asking_price + 50.0))
        .unwrap();
    assert_eq!(receipt.listing_id, chosen.id);
    assert_eq!(book.highest_bid(&chosen.id).unwrap(), Some(chosen.asking_price + 50.0));
}

#[test]
fn competing_bids_must_climb() {
    let catalog = catalog();
    let listing = catalog[0].clone();
    let book = InMemoryBidBook::new(catalog);

    let first = listing.asking_price + 10.0;
    book.submit(Bid::new(listing.id.clone(), first)).unwrap();

    let err = book.submit(Bid::new(listing.id.clone(), first)).unwrap_err();
    assert_eq!(
        err,
        BidError::TooLow {
            minimum: first,
            offered: first
        }
    );

    book.submit(Bid::new(listing.id.clone(), first + 1.0)).unwrap();
    let history: Vec<_> = book
        .bids_for(&listing.id)
        .unwrap()
        .into_iter()
        .map(|b| b.amount)
        .collect();
    assert_eq!(history, vec![first, first + 1.0]);
}

#[test]
fn shared_book_accepts_bids_from_many_threads() {
    let catalog = catalog();
    let listing = catalog[3].clone();
    let book = InMemoryBidBook::new(catalog);

    let handles: Vec<_> = (1..=8u32)
        .map(|i| {
            let book = book.clone();
            let id = listing.id.clone();
            let amount = listing.asking_price + f64::from(i) * 10.0;
            std::thread::spawn(move || book.submit(Bid::new(id, amount)).is_ok())
        })
        .collect();

    let accepted = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|ok| *ok)
        .count();

    let amounts: Vec<_> = book.bids_for(&listing.id).unwrap().iter().map(|b| b.amount).collect();
    assert_eq!(amounts.len(), accepted);
    assert!(amounts.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(book.highest_bid(&listing.id).unwrap(), Some(listing.asking_price + 80.0));
}
