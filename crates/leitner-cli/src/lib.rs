//! Leitner CLI support library
//!
//! Deck file handling, configuration and the interactive practice loop used
//! by the `leitner` binary.

pub mod config;
pub mod deck;
pub mod interactive;

pub use config::Config;
pub use deck::{parse_tsv, Deck};
