//! Review Module
//!
//! Everything that happens around a single review:
//! - [`ReviewRecord`]: one line of the learner's history log
//! - [`PracticeSession`]: drives one day's practice over owned bucket state
//! - [`compute_progress`]: aggregate statistics over buckets and history

mod progress;
mod session;

pub use progress::{compute_progress, ProgressReport, STRUGGLING_LIMIT};
pub use session::{PracticeSession, SessionOutcome};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::card::CardId;
use crate::leitner::Difficulty;

/// A single review in the learner's history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    /// Reviewed card
    pub card_id: CardId,
    /// Scheduling day the review belongs to
    pub day: u32,
    /// Learner's rating
    pub difficulty: Difficulty,
    /// Wall-clock time of the review
    pub reviewed_at: DateTime<Utc>,
}

impl ReviewRecord {
    /// Record a review happening now
    pub fn new(card_id: CardId, day: u32, difficulty: Difficulty) -> Self {
        Self {
            card_id,
            day,
            difficulty,
            reviewed_at: Utc::now(),
        }
    }

    /// Hard and Easy both count as recalled
    pub fn is_success(&self) -> bool {
        self.difficulty != Difficulty::Wrong
    }
}
