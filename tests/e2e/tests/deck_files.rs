//! Deck File Tests
//!
//! Import, practice and reload a deck through the CLI support library.

use leitner_cli::{parse_tsv, Deck};
use leitner_core::{compute_progress, Difficulty, PracticeSession};
use tempfile::TempDir;

const CARDS: &str = "\
# capitals
Capital of Georgia?\tTbilisi\t\tgeo
Capital of France?\tParis
Largest planet?\tJupiter\tgas giant\tspace,planets
";

#[test]
fn test_import_practice_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("deck.json");

    let mut deck = Deck::load_or_new(&path, 4).unwrap();
    assert_eq!(deck.import(parse_tsv(CARDS).unwrap()), 3);
    deck.save(&path).unwrap();

    // Day 0: everything is in bucket 0
    let mut deck = Deck::load(&path).unwrap();
    let mut session = PracticeSession::start(deck.buckets.clone(), deck.day);
    assert_eq!(session.due_count(), 3);

    let due: Vec<_> = session.due().into_iter().cloned().collect();
    for card in &due {
        let difficulty = if card.front().contains("France") {
            Difficulty::Wrong
        } else {
            Difficulty::Easy
        };
        session.record(card, difficulty).unwrap();
    }
    deck.apply_session(session.finish());
    deck.save(&path).unwrap();

    let reloaded = Deck::load(&path).unwrap();
    assert_eq!(reloaded.day, 1);
    assert_eq!(reloaded.history.len(), 3);
    assert_eq!(reloaded.buckets[&0].len(), 1);
    assert_eq!(reloaded.buckets[&1].len(), 2);

    let report = compute_progress(&reloaded.buckets, &reloaded.history);
    assert_eq!(report.total_cards, 3);
    assert_eq!(report.wrong_count, 1);
    assert_eq!(report.bucket_counts, vec![1, 2, 0, 0, 0]);
}

#[test]
fn test_reimport_identity_survives_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("deck.json");

    let mut deck = Deck::new(3);
    deck.import(parse_tsv(CARDS).unwrap());
    deck.save(&path).unwrap();

    let reloaded = Deck::load(&path).unwrap();
    let original_ids: Vec<_> = deck.cards().iter().map(|(_, c)| c.id()).collect();
    let reloaded_ids: Vec<_> = reloaded.cards().iter().map(|(_, c)| c.id()).collect();
    assert_eq!(original_ids, reloaded_ids);

    // Importing the same text again creates new, distinct cards
    let mut reloaded = reloaded;
    assert_eq!(reloaded.import(parse_tsv(CARDS).unwrap()), 3);
    assert_eq!(reloaded.cards().len(), 6);
}
