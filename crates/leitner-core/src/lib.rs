//! # Leitner Core
//!
//! Modified-Leitner spaced repetition for flashcards:
//!
//! - **Buckets**: cards move between numbered proficiency buckets
//! - **Two representations**: sparse map and dense vector, freely convertible
//! - **Exponential schedule**: bucket `i` comes up every `2^i`-th day
//! - **Retirement**: the highest bucket is never scheduled
//! - **Hints**: derived from the answer when a card has none
//! - **Progress**: aggregate statistics over buckets and review history
//!
//! All operations are pure and synchronous. Bucket state is passed in and a
//! fresh value is returned; nothing here holds state between calls.
//!
//! ## Quick Start
//!
//! ```rust
//! use leitner_core::{add_cards, practice, seed_buckets, to_bucket_sets, update};
//! use leitner_core::{Difficulty, Flashcard};
//!
//! let card = Flashcard::new("Capital of Georgia?", "Tbilisi", "", vec![]);
//! let buckets = add_cards(&seed_buckets(4), vec![card.clone()]);
//!
//! // Bucket 0 is practiced every day
//! let due = practice(&to_bucket_sets(&buckets), 0);
//! assert!(due.contains(&card));
//!
//! // An easy answer promotes the card one bucket
//! let buckets = update(&buckets, &card, Difficulty::Easy)?;
//! assert!(buckets[&1].contains(&card));
//! # Ok::<(), leitner_core::SchedulerError>(())
//! ```

#![warn(rustdoc::missing_crate_level_docs)]

// ============================================================================
// MODULES
// ============================================================================

pub mod card;
pub mod error;
pub mod leitner;
pub mod review;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Cards
pub use card::{hint, CardId, Flashcard, NO_HINT_MARKER};

// Errors
pub use error::{Result, SchedulerError};

// Modified-Leitner algorithm
pub use leitner::{
    add_cards,
    bucket_range,
    is_due,
    locate,
    practice,
    seed_buckets,
    // Core operations
    to_bucket_sets,
    update,
    BucketMap,
    BucketRange,
    BucketSets,
    CardSet,
    Difficulty,
};

// Reviews and progress
pub use review::{
    compute_progress, PracticeSession, ProgressReport, ReviewRecord, SessionOutcome,
};

// ============================================================================
// VERSION INFO
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Retired bucket used when a new deck is seeded without configuration
pub const DEFAULT_RETIRED_BUCKET: u32 = 4;

// ============================================================================
// PRELUDE
// ============================================================================

/// Convenient imports for common usage
pub mod prelude {
    pub use crate::{
        compute_progress, practice, to_bucket_sets, update, BucketMap, CardSet, Difficulty,
        Flashcard, PracticeSession, Result, ReviewRecord, SchedulerError,
    };
}
