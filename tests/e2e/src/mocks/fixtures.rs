//! Test Data Factory
//!
//! Provides utilities for generating test data:
//! - Flashcards with predictable text
//! - Bucket maps in sparse and dense form
//! - Pre-built scenarios matching common review situations

use std::collections::HashMap;

use leitner_core::{seed_buckets, BucketMap, CardSet, Flashcard};

/// Factory for creating test data
///
/// # Example
///
/// ```rust,ignore
/// let cards = TestDeckFactory::cards(10);
/// let buckets = TestDeckFactory::spread(&cards, 4);
/// let scenario = TestDeckFactory::three_bucket_scenario();
/// ```
pub struct TestDeckFactory;

/// Scenario containing related test data
#[derive(Debug)]
pub struct TestScenario {
    /// Bucket state under test
    pub buckets: BucketMap,
    /// Cards by name for assertions
    pub cards: HashMap<&'static str, Flashcard>,
    /// Description of the scenario
    pub description: String,
}

impl TestScenario {
    /// Card by name
    pub fn card(&self, name: &str) -> &Flashcard {
        &self.cards[name]
    }
}

impl TestDeckFactory {
    // ========================================================================
    // CARDS
    // ========================================================================

    /// A single card with question `Q{n}` and answer `A{n}`
    pub fn card(n: usize) -> Flashcard {
        Flashcard::new(format!("Q{n}"), format!("A{n}"), "", vec![])
    }

    /// `count` distinct cards
    pub fn cards(count: usize) -> Vec<Flashcard> {
        (0..count).map(Self::card).collect()
    }

    /// Card set from a slice
    pub fn set(cards: &[Flashcard]) -> CardSet {
        cards.iter().cloned().collect()
    }

    // ========================================================================
    // BUCKET STATES
    // ========================================================================

    /// Round-robin cards over buckets `0..=retired_bucket`
    pub fn spread(cards: &[Flashcard], retired_bucket: u32) -> BucketMap {
        let mut buckets = seed_buckets(retired_bucket);
        for (i, card) in cards.iter().enumerate() {
            let bucket = (i as u32) % (retired_bucket + 1);
            buckets.entry(bucket).or_default().insert(card.clone());
        }
        buckets
    }

    /// All cards in bucket 0 of a seeded deck
    pub fn fresh_deck(cards: &[Flashcard], retired_bucket: u32) -> BucketMap {
        leitner_core::add_cards(&seed_buckets(retired_bucket), cards.to_vec())
    }

    // ========================================================================
    // SCENARIOS
    // ========================================================================

    /// `{0: {A}, 1: {C}, 2: {D}}`
    pub fn three_bucket_scenario() -> TestScenario {
        let a = Flashcard::new("What is 2+2?", "4", "", vec![]);
        let c = Flashcard::new("Capital of Georgia?", "Tbilisi", "", vec![]);
        let d = Flashcard::new("Largest planet?", "Jupiter", "", vec![]);

        let mut buckets = BucketMap::new();
        buckets.insert(0, Self::set(std::slice::from_ref(&a)));
        buckets.insert(1, Self::set(std::slice::from_ref(&c)));
        buckets.insert(2, Self::set(std::slice::from_ref(&d)));

        TestScenario {
            buckets,
            cards: HashMap::from([("A", a), ("C", c), ("D", d)]),
            description: "One card in each of buckets 0, 1 and 2".to_string(),
        }
    }

    /// `{0: {A}, 2: {C}}` with a gap at bucket 1
    pub fn gapped_scenario() -> TestScenario {
        let a = Flashcard::new("Q-A", "A-A", "", vec![]);
        let c = Flashcard::new("Q-C", "A-C", "", vec![]);

        let mut buckets = BucketMap::new();
        buckets.insert(0, Self::set(std::slice::from_ref(&a)));
        buckets.insert(2, Self::set(std::slice::from_ref(&c)));

        TestScenario {
            buckets,
            cards: HashMap::from([("A", a), ("C", c)]),
            description: "Buckets 0 and 2 populated, bucket 1 absent".to_string(),
        }
    }
}
