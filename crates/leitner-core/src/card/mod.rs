//! Flashcard - The unit that moves between buckets
//!
//! A card is immutable once created. Its identity is an opaque [`CardId`]
//! assigned at construction, so two cards with identical text are still
//! distinct cards and never merge inside a bucket set.

mod hint;

pub use hint::{hint, NO_HINT_MARKER, PREVIEW_CHARS};

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// CARD IDENTITY
// ============================================================================

/// Opaque card identity (UUID v4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(Uuid);

impl CardId {
    /// Generate a fresh identity
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// The underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// First 8 hex digits, enough to tell cards apart on screen
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl Default for CardId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CardId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(CardId)
            .map_err(|e| format!("Invalid card id '{}': {}", s, e))
    }
}

// ============================================================================
// FLASHCARD
// ============================================================================

/// A flashcard: question, answer, optional hint and tags
///
/// Equality and hashing look at the [`CardId`] only. Cloning a card keeps
/// its identity; constructing a new card with the same text does not.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    id: CardId,
    front: String,
    back: String,
    #[serde(default)]
    hint: String,
    #[serde(default)]
    tags: Vec<String>,
}

impl Flashcard {
    /// Create a card with a fresh identity
    pub fn new(
        front: impl Into<String>,
        back: impl Into<String>,
        hint: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        Self::with_id(CardId::new(), front, back, hint, tags)
    }

    /// Create a card with a known identity (e.g. when loading a deck)
    pub fn with_id(
        id: CardId,
        front: impl Into<String>,
        back: impl Into<String>,
        hint: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            id,
            front: front.into(),
            back: back.into(),
            hint: hint.into(),
            tags,
        }
    }

    pub fn id(&self) -> CardId {
        self.id
    }

    /// Question text
    pub fn front(&self) -> &str {
        &self.front
    }

    /// Answer text
    pub fn back(&self) -> &str {
        &self.back
    }

    /// Author-supplied hint, possibly empty
    pub fn hint(&self) -> &str {
        &self.hint
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Hint to show the learner, derived when the card has none
    pub fn hint_text(&self) -> String {
        hint(self)
    }

    /// Check whether the card carries a tag (case-insensitive)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

impl PartialEq for Flashcard {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Flashcard {}

impl Hash for Flashcard {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

// ============================================================================
// TESTS
// ============================================================================
