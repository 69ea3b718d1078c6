//! Deck file
//!
//! A JSON snapshot of one learner's state: the current day, the sparse
//! bucket map and the review history. The core library never touches the
//! file system; this is the only place that does.

use std::path::Path;

use anyhow::Context;
use leitner_core::{
    add_cards, compute_progress, locate, practice, seed_buckets, to_bucket_sets, update,
    BucketMap, Difficulty, Flashcard, ProgressReport, ReviewRecord, SchedulerError,
    SessionOutcome,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Deck snapshot as stored on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    /// Next day to practice
    #[serde(default)]
    pub day: u32,
    pub buckets: BucketMap,
    #[serde(default)]
    pub history: Vec<ReviewRecord>,
}

impl Deck {
    /// Empty deck with buckets `0..=retired_bucket`
    pub fn new(retired_bucket: u32) -> Self {
        Self {
            day: 0,
            buckets: seed_buckets(retired_bucket),
            history: Vec::new(),
        }
    }

    /// Read a deck file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read deck {}", path.display()))?;
        let deck: Deck = serde_json::from_str(&content)
            .with_context(|| format!("Invalid deck file {}", path.display()))?;
        debug!(path = %path.display(), day = deck.day, "Loaded deck");
        Ok(deck)
    }

    /// Read a deck file, or seed a new deck when none exists yet
    pub fn load_or_new(path: &Path, retired_bucket: u32) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            info!(path = %path.display(), retired_bucket, "Creating new deck");
            Ok(Self::new(retired_bucket))
        }
    }

    /// Write the deck, creating parent directories as needed
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write deck {}", path.display()))?;
        debug!(path = %path.display(), "Saved deck");
        Ok(())
    }

    /// Every card in the deck, ordered by question
    pub fn cards(&self) -> Vec<(u32, &Flashcard)> {
        let mut cards: Vec<(u32, &Flashcard)> = self
            .buckets
            .iter()
            .flat_map(|(&bucket, set)| set.iter().map(move |card| (bucket, card)))
            .collect();
        cards.sort_by(|a, b| a.1.front().cmp(b.1.front()).then(a.1.id().cmp(&b.1.id())));
        cards
    }

    /// Find a card by a prefix of its id (hyphens optional)
    pub fn find_card(&self, prefix: &str) -> anyhow::Result<Flashcard> {
        let needle = prefix.trim().replace('-', "").to_lowercase();
        if needle.is_empty() {
            anyhow::bail!("Card id prefix must not be empty");
        }

        let matches: Vec<&Flashcard> = self
            .cards()
            .into_iter()
            .map(|(_, card)| card)
            .filter(|card| card.id().as_uuid().simple().to_string().starts_with(&needle))
            .collect();

        match matches.as_slice() {
            [card] => Ok((*card).clone()),
            [] => anyhow::bail!("No card matches id '{}'", prefix),
            _ => anyhow::bail!("Id '{}' matches {} cards, use a longer prefix", prefix, matches.len()),
        }
    }

    /// Add new cards to bucket 0
    pub fn import(&mut self, cards: Vec<Flashcard>) -> usize {
        let before: usize = self.buckets.values().map(|s| s.len()).sum();
        self.buckets = add_cards(&self.buckets, cards);
        let after: usize = self.buckets.values().map(|s| s.len()).sum();
        after - before
    }

    /// Cards due on `day`, optionally limited to one tag, ordered by question
    pub fn due_cards(&self, day: u32, tag: Option<&str>) -> Vec<(u32, &Flashcard)> {
        let due = practice(&to_bucket_sets(&self.buckets), day);
        self.cards()
            .into_iter()
            .filter(|(_, card)| due.contains(*card))
            .filter(|(_, card)| tag.is_none_or(|tag| card.has_tag(tag)))
            .collect()
    }

    /// Review one card outside a session
    ///
    /// Moves the card, appends a history entry for `day` (default: the
    /// deck's current day) and returns the card with its new bucket.
    pub fn review(
        &mut self,
        prefix: &str,
        difficulty: Difficulty,
        day: Option<u32>,
    ) -> anyhow::Result<(Flashcard, u32)> {
        let card = self.find_card(prefix)?;
        let day = day.unwrap_or(self.day);

        let buckets = update(&self.buckets, &card, difficulty)?;
        let (bucket, _) =
            locate(&buckets, &card.id()).ok_or(SchedulerError::CardNotFound(card.id()))?;

        self.buckets = buckets;
        self.history.push(ReviewRecord::new(card.id(), day, difficulty));
        debug!(card = %card.id(), %difficulty, bucket, day, "Reviewed card");
        Ok((card, bucket))
    }

    /// Progress summary over the current buckets and history
    pub fn progress(&self) -> ProgressReport {
        compute_progress(&self.buckets, &self.history)
    }

    /// Move to the next day without practicing
    pub fn advance_day(&mut self) -> u32 {
        self.day = self.day.saturating_add(1);
        self.day
    }

    /// Take over the result of a practice session and move to the next day
    pub fn apply_session(&mut self, outcome: SessionOutcome) {
        self.buckets = outcome.buckets;
        self.history.extend(outcome.history);
        self.advance_day();
    }
}

/// Parse cards from tab-separated text
///
/// One card per line: `front<TAB>back[<TAB>hint[<TAB>tag,tag]]`. Blank lines
/// and lines starting with `#` are skipped.
pub fn parse_tsv(content: &str) -> anyhow::Result<Vec<Flashcard>> {
    let mut cards = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        let (front, back) = match fields.as_slice() {
            [front, back, ..] if !front.trim().is_empty() => (front.trim(), *back),
            _ => anyhow::bail!("Line {}: expected 'front<TAB>back'", index + 1),
        };
        let hint = fields.get(2).copied().unwrap_or("");
        let tags: Vec<String> = fields
            .get(3)
            .map(|raw| {
                raw.split(',')
                    .map(|t| t.trim().to_string())
                    .filter(|t| !t.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        cards.push(Flashcard::new(front, back, hint, tags));
    }

    Ok(cards)
}
