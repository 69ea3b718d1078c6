//! Building and inspecting bucket state

use super::{BucketMap, CardSet};
use crate::card::{CardId, Flashcard};

/// Empty buckets `0..=retired_bucket`
///
/// [`super::update`] never promotes past the highest key it sees, so a new
/// deck needs its retired bucket to exist before any card can reach it.
pub fn seed_buckets(retired_bucket: u32) -> BucketMap {
    (0..=retired_bucket).map(|b| (b, CardSet::new())).collect()
}

/// Copy of `buckets` with new cards placed in bucket 0
///
/// Cards that already sit in some bucket are left where they are.
pub fn add_cards(buckets: &BucketMap, cards: impl IntoIterator<Item = Flashcard>) -> BucketMap {
    let mut updated = buckets.clone();
    let fresh: Vec<Flashcard> = cards
        .into_iter()
        .filter(|card| locate(buckets, &card.id()).is_none())
        .collect();

    if !fresh.is_empty() {
        updated.entry(0).or_default().extend(fresh);
    }
    updated
}

/// Find a card and its bucket by id
pub fn locate<'a>(buckets: &'a BucketMap, id: &CardId) -> Option<(u32, &'a Flashcard)> {
    buckets
        .iter()
        .find_map(|(&bucket, set)| set.iter().find(|c| c.id() == *id).map(|c| (bucket, c)))
}
