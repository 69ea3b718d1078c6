//! CLI configuration
//!
//! Each setting resolves from the command line first, then the environment,
//! then a default.

use std::path::PathBuf;

use directories::ProjectDirs;
use leitner_core::DEFAULT_RETIRED_BUCKET;

/// Deck file location
pub const DECK_ENV: &str = "LEITNER_DECK";

/// Highest bucket created when a new deck is seeded
pub const RETIRED_BUCKET_ENV: &str = "LEITNER_RETIRED_BUCKET";

/// Resolved settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub deck_path: PathBuf,
    pub retired_bucket: u32,
}

impl Config {
    /// Resolve against the process environment
    pub fn resolve(deck: Option<PathBuf>, retired_bucket: Option<u32>) -> anyhow::Result<Self> {
        Self::resolve_with(deck, retired_bucket, |key| std::env::var(key).ok())
    }

    /// Resolve against an arbitrary variable lookup
    pub fn resolve_with(
        deck: Option<PathBuf>,
        retired_bucket: Option<u32>,
        env: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<Self> {
        let deck_path = match deck.or_else(|| env(DECK_ENV).map(PathBuf::from)) {
            Some(path) => path,
            None => default_deck_path()?,
        };

        let retired_bucket = match retired_bucket {
            Some(bucket) => bucket,
            None => match env(RETIRED_BUCKET_ENV) {
                Some(raw) => raw.trim().parse().map_err(|e| {
                    anyhow::anyhow!("{} must be a bucket number, got '{}': {}", RETIRED_BUCKET_ENV, raw, e)
                })?,
                None => DEFAULT_RETIRED_BUCKET,
            },
        };

        if retired_bucket == 0 {
            anyhow::bail!("Retired bucket must be at least 1, otherwise no card is ever practiced");
        }

        Ok(Self {
            deck_path,
            retired_bucket,
        })
    }
}

/// Get the default deck path
fn default_deck_path() -> anyhow::Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "leitner", "leitner")
        .ok_or_else(|| anyhow::anyhow!("Could not determine project directories"))?;
    Ok(proj_dirs.data_dir().join("deck.json"))
}
