//! Core Modified-Leitner operations

use tracing::{debug, warn};

use super::{BucketMap, BucketRange, BucketSets, CardSet, Difficulty};
use crate::card::Flashcard;
use crate::error::{Result, SchedulerError};

/// Convert the sparse form into the dense form
///
/// The result has one set per bucket from 0 to the highest key; missing keys
/// become empty sets. An empty mapping gives an empty vector. The sets are
/// copies, so the input is never aliased.
pub fn to_bucket_sets(buckets: &BucketMap) -> BucketSets {
    let Some((&max_bucket, _)) = buckets.last_key_value() else {
        return Vec::new();
    };

    (0..=max_bucket)
        .map(|bucket| buckets.get(&bucket).cloned().unwrap_or_default())
        .collect()
}

/// Lowest and highest non-empty bucket
///
/// `None` when every bucket is empty, including when there are no buckets.
pub fn bucket_range(buckets: &[CardSet]) -> Option<BucketRange> {
    let min = buckets.iter().position(|set| !set.is_empty())?;
    // The lowest occupied bucket bounds the search from below
    let max = min
        + buckets[min..]
            .iter()
            .rposition(|set| !set.is_empty())
            .unwrap_or(0);

    Some(BucketRange {
        min_bucket: min as u32,
        max_bucket: max as u32,
    })
}

/// Whether bucket `bucket` is practiced on `day`
///
/// True iff `(day + 1) mod 2^bucket == 0`. Retirement is not considered
/// here; see [`practice`].
pub fn is_due(bucket: usize, day: u32) -> bool {
    // 2^i divides n exactly when n has at least i trailing zero bits
    let n = u64::from(day) + 1;
    n.trailing_zeros() as usize >= bucket
}

/// Cards to practice on `day`
///
/// The last bucket is retired and never selected. Every other bucket `i`
/// contributes all of its cards when it is due.
pub fn practice(buckets: &[CardSet], day: u32) -> CardSet {
    let retired = buckets.len().saturating_sub(1);

    buckets[..retired]
        .iter()
        .enumerate()
        .filter(|(bucket, _)| is_due(*bucket, day))
        .flat_map(|(_, cards)| cards.iter().cloned())
        .collect()
}

/// Move a card after a review
///
/// | difficulty | destination                    |
/// |------------|--------------------------------|
/// | Wrong      | 0                              |
/// | Hard       | `max(0, current - 1)`          |
/// | Easy       | `min(current + 1, max bucket)` |
///
/// The ceiling is the highest key of the input whether or not that bucket
/// holds cards. The source bucket stays in the result even when it ends up
/// empty. Fails with [`SchedulerError::CardNotFound`] if no bucket holds the
/// card; the input is never modified.
pub fn update(buckets: &BucketMap, card: &Flashcard, difficulty: Difficulty) -> Result<BucketMap> {
    let mut updated = buckets.clone();

    let Some((current, stored)) = updated
        .iter_mut()
        .find_map(|(&bucket, set)| set.take(card).map(|stored| (bucket, stored)))
    else {
        warn!(card = %card.id(), "Review for a card that is in no bucket");
        return Err(SchedulerError::CardNotFound(card.id()));
    };

    // Non-empty: the card was found in one of its buckets
    let max_bucket = buckets.keys().next_back().copied().unwrap_or(current);

    let destination = match difficulty {
        Difficulty::Wrong => 0,
        Difficulty::Hard => current.saturating_sub(1),
        Difficulty::Easy => current.saturating_add(1).min(max_bucket),
    };

    debug!(
        card = %card.id(),
        %difficulty,
        from = current,
        to = destination,
        "Moved card"
    );

    updated.entry(destination).or_default().insert(stored);
    Ok(updated)
}

// ============================================================================
// TESTS
// ============================================================================
