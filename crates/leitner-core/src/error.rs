//! Scheduler errors

use crate::card::CardId;

/// Errors raised by the scheduler
///
/// Empty bucket states are never errors; only misuse of the API is.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchedulerError {
    /// The reviewed card is not in any bucket
    #[error("Card not found in any bucket: {0}")]
    CardNotFound(CardId),
    /// The card was not selected for practice on this day
    #[error("Card {card} is not due on day {day}")]
    CardNotDue {
        /// Card that was recorded
        card: CardId,
        /// Session day
        day: u32,
    },
    /// The card was already recorded in this session
    #[error("Card already reviewed in this session: {0}")]
    AlreadyReviewed(CardId),
}

/// Scheduler result type
pub type Result<T> = std::result::Result<T, SchedulerError>;
