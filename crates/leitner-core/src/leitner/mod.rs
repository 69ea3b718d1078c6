//! Modified-Leitner Scheduling Module
//!
//! Cards live in numbered buckets. Bucket 0 holds the least mastered cards,
//! higher buckets hold better known ones, and the highest bucket in play is
//! "retired": its cards are never scheduled.
//!
//! ## Representations
//! - Sparse ([`BucketMap`]): bucket number -> card set, gaps allowed
//! - Dense ([`BucketSets`]): one set per bucket from 0 to the highest key
//!
//! ## Schedule
//! Bucket `i` is practiced every `2^i`-th day. Day 0 is the first day and
//! counts as day 1 for the divisibility test, so bucket 1 first comes up on
//! day 1, bucket 2 on day 3, bucket 3 on day 7.
//!
//! Every operation takes bucket state by reference and returns a fresh value.

mod algorithm;
mod seed;

pub use algorithm::{bucket_range, is_due, practice, to_bucket_sets, update};
pub use seed::{add_cards, locate, seed_buckets};

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::card::Flashcard;

/// Cards sharing one bucket
pub type CardSet = HashSet<Flashcard>;

/// Sparse bucket state: bucket number -> cards
pub type BucketMap = BTreeMap<u32, CardSet>;

/// Dense bucket state: index `i` holds bucket `i`
pub type BucketSets = Vec<CardSet>;

// ============================================================================
// DIFFICULTY
// ============================================================================

/// How the learner rated a review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Answered incorrectly - back to bucket 0
    Wrong,
    /// Answered with effort - one bucket down
    Hard,
    /// Answered easily - one bucket up
    Easy,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Wrong => "wrong",
            Difficulty::Hard => "hard",
            Difficulty::Easy => "easy",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wrong" | "w" | "0" => Ok(Difficulty::Wrong),
            "hard" | "h" | "1" => Ok(Difficulty::Hard),
            "easy" | "e" | "2" => Ok(Difficulty::Easy),
            _ => Err(format!("Unknown difficulty: {}", s)),
        }
    }
}

// ============================================================================
// BUCKET RANGE
// ============================================================================

/// Lowest and highest occupied bucket, a rough measure of progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketRange {
    pub min_bucket: u32,
    pub max_bucket: u32,
}

impl BucketRange {
    /// Number of buckets spanned, inclusive
    ///
    /// `u64` so that the full range `0..=u32::MAX` fits.
    pub fn span(&self) -> u64 {
        u64::from(self.max_bucket) - u64::from(self.min_bucket) + 1
    }
}
