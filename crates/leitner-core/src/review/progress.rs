//! Learning progress statistics

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use super::ReviewRecord;
use crate::card::CardId;
use crate::leitner::{bucket_range, to_bucket_sets, BucketMap, BucketRange, Difficulty};

/// Maximum number of cards listed in [`ProgressReport::struggling_cards`]
pub const STRUGGLING_LIMIT: usize = 5;

/// Aggregate view of a learner's buckets and history
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressReport {
    /// Cards across all buckets
    pub total_cards: usize,
    /// Card count per bucket, index = bucket number
    pub bucket_counts: Vec<usize>,
    /// Cards in the highest (retired) bucket
    pub retired_cards: usize,
    /// Occupied bucket range, `None` for an empty deck
    pub range: Option<BucketRange>,
    /// Reviews in the history
    pub total_reviews: usize,
    pub wrong_count: usize,
    pub hard_count: usize,
    pub easy_count: usize,
    /// Share of reviews rated Hard or Easy, `None` without history
    pub success_rate: Option<f64>,
    /// Distinct days with at least one review
    pub days_practiced: usize,
    /// Most recent day with a review
    pub last_review_day: Option<u32>,
    /// Cards with the most Wrong ratings, worst first
    pub struggling_cards: Vec<CardId>,
    /// Retired share of all cards (0.0 - 1.0)
    pub mastery: f64,
}

/// Compute progress statistics
///
/// History entries for cards that are no longer in any bucket still count
/// toward the review totals.
pub fn compute_progress(buckets: &BucketMap, history: &[ReviewRecord]) -> ProgressReport {
    let dense = to_bucket_sets(buckets);
    let bucket_counts: Vec<usize> = dense.iter().map(|set| set.len()).collect();
    let total_cards: usize = bucket_counts.iter().sum();
    let retired_cards = bucket_counts.last().copied().unwrap_or(0);

    let count = |d: Difficulty| history.iter().filter(|r| r.difficulty == d).count();
    let wrong_count = count(Difficulty::Wrong);
    let hard_count = count(Difficulty::Hard);
    let easy_count = count(Difficulty::Easy);

    let success_rate = if history.is_empty() {
        None
    } else {
        Some((hard_count + easy_count) as f64 / history.len() as f64)
    };

    let days: BTreeSet<u32> = history.iter().map(|r| r.day).collect();

    let mastery = if total_cards > 0 {
        retired_cards as f64 / total_cards as f64
    } else {
        0.0
    };

    ProgressReport {
        total_cards,
        retired_cards,
        range: bucket_range(&dense),
        bucket_counts,
        total_reviews: history.len(),
        wrong_count,
        hard_count,
        easy_count,
        success_rate,
        days_practiced: days.len(),
        last_review_day: days.last().copied(),
        struggling_cards: struggling_cards(history),
        mastery,
    }
}

fn struggling_cards(history: &[ReviewRecord]) -> Vec<CardId> {
    let mut wrong: HashMap<CardId, usize> = HashMap::new();
    for record in history.iter().filter(|r| r.difficulty == Difficulty::Wrong) {
        *wrong.entry(record.card_id).or_insert(0) += 1;
    }

    let mut ranked: Vec<(CardId, usize)> = wrong.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked
        .into_iter()
        .take(STRUGGLING_LIMIT)
        .map(|(id, _)| id)
        .collect()
}
