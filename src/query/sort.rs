//! Sorting stage: order matched listings by a single key.
//!
//! All orderings are stable, so listings that compare equal keep their
//! catalog order. Descending keys reverse the comparison, not the output,
//! which keeps ties in catalog order too.

use std::cmp::Ordering;

use deunicode::deunicode_char;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::SortKey;
use crate::listing::ListingRecord;

/// Return a new ordered sequence; `matched` is left untouched.
pub fn sort_matches<'a>(matched: &[&'a ListingRecord], key: SortKey) -> Vec<&'a ListingRecord> {
    match key {
        SortKey::PriceAsc => sorted_by(matched, |a, b| a.asking_price.total_cmp(&b.asking_price)),
        SortKey::PriceDesc => sorted_by(matched, |a, b| b.asking_price.total_cmp(&a.asking_price)),
        SortKey::WeightAsc => sorted_by(matched, |a, b| a.mass_carats.total_cmp(&b.mass_carats)),
        SortKey::WeightDesc => sorted_by(matched, |a, b| b.mass_carats.total_cmp(&a.mass_carats)),
        SortKey::NameAsc => sorted_by_name(matched, false),
        SortKey::NameDesc => sorted_by_name(matched, true),
    }
}

fn sorted_by<'a, F>(matched: &[&'a ListingRecord], compare: F) -> Vec<&'a ListingRecord>
where
    F: Fn(&ListingRecord, &ListingRecord) -> Ordering,
{
    let mut ordered = matched.to_vec();
    ordered.sort_by(|a, b| compare(a, b));
    ordered
}

fn sorted_by_name<'a>(matched: &[&'a ListingRecord], descending: bool) -> Vec<&'a ListingRecord> {
    // One collation key per record.
    let mut keyed: Vec<(NameKey, &'a ListingRecord)> = matched
        .iter()
        .map(|record| (NameKey::new(&record.display_name), *record))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| if descending { b.cmp(a) } else { a.cmp(b) });
    keyed.into_iter().map(|(_, record)| record).collect()
}

/// Compare two display names the way the catalog orders them.
///
/// Case and diacritics are folded ("É" sorts with "E", "Ø" with "O"), runs of ASCII digits
/// compare by numeric value ("Item 2" before "Item 10"), and only names that
/// are otherwise equal fall back to a raw code point comparison.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    NameKey::new(a).cmp(&NameKey::new(b))
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct NameKey {
    segments: Vec<Segment>,
    raw: String,
}

impl NameKey {
    fn new(name: &str) -> Self {
        let mut segments = Vec::new();
        let mut text = String::new();
        let mut digits = String::new();

        for c in fold(name).chars() {
            if c.is_ascii_digit() {
                if !text.is_empty() {
                    segments.push(Segment::Text(std::mem::take(&mut text)));
                }
                digits.push(c);
            } else {
                if !digits.is_empty() {
                    segments.push(Segment::number(std::mem::take(&mut digits)));
                }
                text.push(c);
            }
        }
        if !text.is_empty() {
            segments.push(Segment::Text(text));
        }
        if !digits.is_empty() {
            segments.push(Segment::number(digits));
        }

        Self {
            segments,
            raw: name.to_string(),
        }
    }
}

/// Decompose, drop combining marks, transliterate what is left to ASCII, lowercase.
///
/// Letters without a decomposition (Ø, Æ, Ł, ß, ...) map to their base
/// letters here, so they sort among A-Z rather than after it.
fn fold(name: &str) -> String {
    let mut folded = String::with_capacity(name.len());
    for c in name.nfd().filter(|c| !is_combining_mark(*c)) {
        if c.is_ascii() {
            folded.push(c);
            continue;
        }
        match deunicode_char(c) {
            Some(ascii) => folded.push_str(ascii),
            None => folded.push(c),
        }
    }
    folded.to_lowercase()
}

#[derive(Debug, PartialEq, Eq)]
enum Segment {
    /// ASCII digits with leading zeros stripped.
    Number(String),
    Text(String),
}

impl Segment {
    fn number(digits: String) -> Self {
        let trimmed = digits.trim_start_matches('0');
        Segment::Number(trimmed.to_string())
    }
}

impl Ord for Segment {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Segment::Number(a), Segment::Number(b)) => {
                a.len().cmp(&b.len()).then_with(|| a.cmp(b))
            }
            (Segment::Text(a), Segment::Text(b)) => a.cmp(b),
            // Digits sort ahead of letters.
            (Segment::Number(_), Segment::Text(_)) => Ordering::Less,
            (Segment::Text(_), Segment::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Segment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
