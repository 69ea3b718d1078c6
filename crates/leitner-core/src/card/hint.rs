//! Hint derivation

use super::Flashcard;

/// Shown when a card has neither a hint nor a usable answer
pub const NO_HINT_MARKER: &str = "no hint available";

/// Maximum number of answer characters revealed by a derived hint
pub const PREVIEW_CHARS: usize = 5;

/// Hint for a card
///
/// Returns the card's own hint when it has one. Otherwise reveals the first
/// few characters of the trimmed answer. Deterministic for a given card.
pub fn hint(card: &Flashcard) -> String {
    if !card.hint().is_empty() {
        return card.hint().to_string();
    }

    let answer = card.back().trim();
    if answer.is_empty() {
        return NO_HINT_MARKER.to_string();
    }

    let preview: String = answer.chars().take(PREVIEW_CHARS).collect();
    format!("Starts with '{}'", preview)
}
