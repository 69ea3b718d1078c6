//! Property Tests
//!
//! Scheduler invariants checked over generated bucket states.

use std::collections::BTreeMap;

use leitner_core::{
    bucket_range, locate, practice, to_bucket_sets, update, BucketMap, CardSet, Difficulty,
    Flashcard,
};
use proptest::prelude::*;

/// Build a bucket map from bucket -> card count, with fresh cards
fn build(layout: &BTreeMap<u32, usize>) -> (Vec<Flashcard>, BucketMap) {
    let mut cards = Vec::new();
    let mut buckets = BucketMap::new();
    for (&bucket, &count) in layout {
        let set: CardSet = (0..count)
            .map(|i| {
                let card = Flashcard::new(format!("Q{bucket}-{i}"), "A", "", vec![]);
                cards.push(card.clone());
                card
            })
            .collect();
        buckets.insert(bucket, set);
    }
    (cards, buckets)
}

fn layout() -> impl Strategy<Value = BTreeMap<u32, usize>> {
    prop::collection::btree_map(0u32..8, 0usize..4, 0..6)
}

fn difficulty() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
        Just(Difficulty::Wrong),
        Just(Difficulty::Hard),
        Just(Difficulty::Easy)
    ]
}

proptest! {
    #[test]
    fn prop_dense_length_matches_highest_key(layout in layout()) {
        let (_, buckets) = build(&layout);
        let dense = to_bucket_sets(&buckets);
        let expected = buckets.keys().next_back().map(|&k| k as usize + 1).unwrap_or(0);
        prop_assert_eq!(dense.len(), expected);
        for (bucket, set) in &buckets {
            prop_assert_eq!(&dense[*bucket as usize], set);
        }
    }

    #[test]
    fn prop_range_absent_iff_no_cards(layout in layout()) {
        let (cards, buckets) = build(&layout);
        let range = bucket_range(&to_bucket_sets(&buckets));
        prop_assert_eq!(range.is_none(), cards.is_empty());
        if let Some(range) = range {
            prop_assert!(range.min_bucket <= range.max_bucket);
            prop_assert!(!buckets[&range.min_bucket].is_empty());
            prop_assert!(!buckets[&range.max_bucket].is_empty());
        }
    }

    #[test]
    fn prop_retired_bucket_never_practiced(layout in layout(), day in 0u32..10_000) {
        let (_, buckets) = build(&layout);
        let dense = to_bucket_sets(&buckets);
        let due = practice(&dense, day);
        if let Some(retired) = dense.last() {
            prop_assert!(retired.iter().all(|card| !due.contains(card)));
        } else {
            prop_assert!(due.is_empty());
        }
    }

    #[test]
    fn prop_bucket_zero_practiced_every_day(layout in layout(), day in 0u32..10_000) {
        let (_, buckets) = build(&layout);
        let dense = to_bucket_sets(&buckets);
        let due = practice(&dense, day);
        if dense.len() > 1 {
            prop_assert!(dense[0].iter().all(|card| due.contains(card)));
        }
    }

    #[test]
    fn prop_update_keeps_card_in_exactly_one_bucket(
        layout in layout(),
        pick in any::<prop::sample::Index>(),
        difficulty in difficulty(),
    ) {
        let (cards, buckets) = build(&layout);
        prop_assume!(!cards.is_empty());
        let card = &cards[pick.index(cards.len())];
        let before = buckets.clone();
        let (current, _) = locate(&buckets, &card.id()).unwrap();
        let max_bucket = *buckets.keys().next_back().unwrap();

        let updated = update(&buckets, card, difficulty).unwrap();

        let holders = updated.values().filter(|set| set.contains(card)).count();
        prop_assert_eq!(holders, 1);

        let total_before: usize = buckets.values().map(|s| s.len()).sum();
        let total_after: usize = updated.values().map(|s| s.len()).sum();
        prop_assert_eq!(total_before, total_after);

        let (destination, _) = locate(&updated, &card.id()).unwrap();
        let expected = match difficulty {
            Difficulty::Wrong => 0,
            Difficulty::Hard => current.saturating_sub(1),
            Difficulty::Easy => (current + 1).min(max_bucket),
        };
        prop_assert_eq!(destination, expected);
        prop_assert_eq!(buckets, before);
    }

    #[test]
    fn prop_update_rejects_foreign_card(layout in layout(), difficulty in difficulty()) {
        let (_, buckets) = build(&layout);
        let stranger = Flashcard::new("Q0-0", "A", "", vec![]);
        prop_assert!(update(&buckets, &stranger, difficulty).is_err());
    }
}
