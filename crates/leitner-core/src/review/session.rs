//! Practice Session
//!
//! Drives one day of practice: select the due cards, record a rating for
//! each, and hand back the new bucket state together with the history
//! entries produced along the way.
//!
//! The session owns its copy of the bucket state. Nothing is shared with the
//! caller until [`PracticeSession::finish`].

use std::collections::HashSet;

use tracing::{debug, info};

use super::ReviewRecord;
use crate::card::{CardId, Flashcard};
use crate::error::{Result, SchedulerError};
use crate::leitner::{locate, practice, to_bucket_sets, update, BucketMap, CardSet, Difficulty};

/// A day of practice in progress
#[derive(Debug, Clone)]
pub struct PracticeSession {
    day: u32,
    buckets: BucketMap,
    due: CardSet,
    reviewed: HashSet<CardId>,
    history: Vec<ReviewRecord>,
}

/// Result of a finished session
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    /// Bucket state after all recorded reviews
    pub buckets: BucketMap,
    /// One entry per recorded review, in order
    pub history: Vec<ReviewRecord>,
    /// Cards rated during the session
    pub reviewed: usize,
    /// Due cards that were never rated
    pub skipped: usize,
}

impl PracticeSession {
    /// Start practicing `day` over the given bucket state
    pub fn start(buckets: BucketMap, day: u32) -> Self {
        let due = practice(&to_bucket_sets(&buckets), day);
        info!(day, due = due.len(), "Practice session started");

        Self {
            day,
            buckets,
            due,
            reviewed: HashSet::new(),
            history: Vec::new(),
        }
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Current bucket state, including reviews recorded so far
    pub fn buckets(&self) -> &BucketMap {
        &self.buckets
    }

    /// Due cards still waiting for a rating, ordered by question then id
    pub fn due(&self) -> Vec<&Flashcard> {
        let mut pending: Vec<&Flashcard> = self
            .due
            .iter()
            .filter(|card| !self.reviewed.contains(&card.id()))
            .collect();
        pending.sort_by(|a, b| a.front().cmp(b.front()).then(a.id().cmp(&b.id())));
        pending
    }

    /// Number of cards selected for this day
    pub fn due_count(&self) -> usize {
        self.due.len()
    }

    pub fn is_complete(&self) -> bool {
        self.reviewed.len() == self.due.len()
    }

    /// Record a rating and move the card
    ///
    /// Returns the bucket the card landed in. On error the session is left
    /// exactly as it was.
    pub fn record(&mut self, card: &Flashcard, difficulty: Difficulty) -> Result<u32> {
        if !self.due.contains(card) {
            return Err(SchedulerError::CardNotDue {
                card: card.id(),
                day: self.day,
            });
        }
        if self.reviewed.contains(&card.id()) {
            return Err(SchedulerError::AlreadyReviewed(card.id()));
        }

        let updated = update(&self.buckets, card, difficulty)?;
        let (destination, _) =
            locate(&updated, &card.id()).ok_or(SchedulerError::CardNotFound(card.id()))?;

        self.buckets = updated;
        self.reviewed.insert(card.id());
        self.history
            .push(ReviewRecord::new(card.id(), self.day, difficulty));

        debug!(card = %card.id(), %difficulty, bucket = destination, "Recorded review");
        Ok(destination)
    }

    /// Close the session
    pub fn finish(self) -> SessionOutcome {
        let reviewed = self.reviewed.len();
        let skipped = self.due.len() - reviewed;
        info!(day = self.day, reviewed, skipped, "Practice session finished");

        SessionOutcome {
            buckets: self.buckets,
            history: self.history,
            reviewed,
            skipped,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
