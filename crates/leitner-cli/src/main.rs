//! Leitner CLI
//!
//! Command-line flashcard trainer on top of the Modified-Leitner scheduler.

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;
use leitner_core::{Difficulty, PracticeSession};
use leitner_cli::{interactive, parse_tsv, Config, Deck};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Leitner - Spaced Repetition Flashcards
#[derive(Parser)]
#[command(name = "leitner")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Flashcard trainer using the Modified-Leitner schedule")]
#[command(long_about = "Cards live in numbered buckets. Bucket i is practiced every 2^i-th day and the\nhighest bucket is retired. Easy answers move a card up, hard ones down, wrong\nones back to bucket 0.")]
struct Cli {
    /// Deck file (default: $LEITNER_DECK or the platform data directory)
    #[arg(long, global = true)]
    deck: Option<PathBuf>,

    /// Highest bucket of a newly created deck (default: $LEITNER_RETIRED_BUCKET or 4)
    #[arg(long, global = true)]
    retired_bucket: Option<u32>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add cards from a tab-separated file (front, back, hint, tags)
    Import {
        /// Path to the TSV file
        file: PathBuf,
    },

    /// List the cards due on a day
    Due {
        /// Day to check (default: the deck's current day)
        #[arg(long)]
        day: Option<u32>,
        /// Only list cards carrying this tag
        #[arg(long)]
        tag: Option<String>,
    },

    /// Record a single review
    Review {
        /// Card id or unique id prefix
        card: String,
        /// wrong, hard or easy
        difficulty: Difficulty,
        /// Day the review belongs to (default: the deck's current day)
        #[arg(long)]
        day: Option<u32>,
    },

    /// Practice today's cards interactively
    Practice {
        /// Day to practice (default: the deck's current day)
        #[arg(long)]
        day: Option<u32>,
    },

    /// Show learning progress
    Stats,

    /// Move the deck to the next day without practicing
    NextDay,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never mix with card output
    let logs = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .with_target(false);
    if cli.log_json {
        logs.json().init();
    } else {
        logs.init();
    }

    info!("Leitner v{} starting", leitner_core::VERSION);

    let config = Config::resolve(cli.deck, cli.retired_bucket)?;
    info!(deck = %config.deck_path.display(), "Using deck");

    match cli.command {
        Commands::Import { file } => run_import(&config, file),
        Commands::Due { day, tag } => run_due(&config, day, tag.as_deref()),
        Commands::Review {
            card,
            difficulty,
            day,
        } => run_review(&config, card, difficulty, day),
        Commands::Practice { day } => run_practice(&config, day),
        Commands::Stats => run_stats(&config),
        Commands::NextDay => run_next_day(&config),
    }
}

/// Run import command
fn run_import(config: &Config, file: PathBuf) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&file)?;
    let cards = parse_tsv(&content)?;

    let mut deck = Deck::load_or_new(&config.deck_path, config.retired_bucket)?;
    let added = deck.import(cards);
    deck.save(&config.deck_path)?;

    println!(
        "{} {} cards into {}",
        "Imported".green().bold(),
        added,
        config.deck_path.display()
    );
    Ok(())
}

/// Run due command
fn run_due(config: &Config, day: Option<u32>, tag: Option<&str>) -> anyhow::Result<()> {
    let deck = Deck::load(&config.deck_path)?;
    let day = day.unwrap_or(deck.day);

    let due = deck.due_cards(day, tag);
    match tag {
        Some(tag) => println!("{}", format!("=== Due on day {} [{}] ===", day, tag).cyan().bold()),
        None => println!("{}", format!("=== Due on day {} ===", day).cyan().bold()),
    }
    println!();

    if due.is_empty() {
        println!("{}", "Nothing to practice.".dimmed());
        return Ok(());
    }

    for &(bucket, card) in &due {
        println!(
            "  {} {} {}",
            card.id().short().dimmed(),
            format!("[b{}]", bucket).yellow(),
            card.front()
        );
        println!("           {}", card.hint_text().dimmed());
    }
    println!();
    println!("{}: {}", "Total".white().bold(), due.len());
    Ok(())
}

/// Run review command
fn run_review(
    config: &Config,
    card: String,
    difficulty: Difficulty,
    day: Option<u32>,
) -> anyhow::Result<()> {
    let mut deck = Deck::load(&config.deck_path)?;
    let (card, bucket) = deck.review(&card, difficulty, day)?;
    deck.save(&config.deck_path)?;

    println!(
        "{} {} -> bucket {}",
        difficulty.to_string().to_uppercase().bold(),
        card.front(),
        bucket
    );
    Ok(())
}

/// Run interactive practice
fn run_practice(config: &Config, day: Option<u32>) -> anyhow::Result<()> {
    let mut deck = Deck::load(&config.deck_path)?;
    let day = day.unwrap_or(deck.day);

    let mut session = PracticeSession::start(deck.buckets.clone(), day);
    println!(
        "{}",
        format!("=== Practice day {}: {} cards ===", day, session.due_count())
            .cyan()
            .bold()
    );

    let stdin = io::stdin();
    interactive::run_session(&mut session, stdin.lock(), io::stdout())?;

    let outcome = session.finish();
    println!();
    println!(
        "{}",
        format!(
            "Session complete: {} reviewed, {} skipped",
            outcome.reviewed, outcome.skipped
        )
        .green()
    );

    deck.day = day;
    deck.apply_session(outcome);
    deck.save(&config.deck_path)?;
    println!("{}: {}", "Next day".white().bold(), deck.day);
    Ok(())
}

/// Run stats command
fn run_stats(config: &Config) -> anyhow::Result<()> {
    let deck = Deck::load(&config.deck_path)?;
    let report = deck.progress();

    println!("{}", "=== Leitner Progress ===".cyan().bold());
    println!();
    println!("{}: {}", "Current Day".white().bold(), deck.day);
    println!("{}: {}", "Total Cards".white().bold(), report.total_cards);
    println!("{}: {}", "Retired".white().bold(), report.retired_cards);
    println!("{}: {:.1}%", "Mastery".white().bold(), report.mastery * 100.0);
    match report.range {
        Some(range) => println!(
            "{}: {} - {} (span {})",
            "Occupied Buckets".white().bold(),
            range.min_bucket,
            range.max_bucket,
            range.span()
        ),
        None => println!("{}: {}", "Occupied Buckets".white().bold(), "none".dimmed()),
    }

    println!();
    println!("{}", "=== Bucket Distribution ===".yellow().bold());
    let last = report.bucket_counts.len().saturating_sub(1);
    for (bucket, &count) in report.bucket_counts.iter().enumerate() {
        let label = if bucket == last {
            format!("Bucket {} (retired)", bucket)
        } else {
            format!("Bucket {}", bucket)
        };
        let color = if bucket == last { "green" } else { "yellow" };
        print_distribution_bar(&label, count, report.total_cards, color);
    }

    println!();
    println!("{}", "=== Reviews ===".magenta().bold());
    println!("{}: {}", "Total Reviews".white().bold(), report.total_reviews);
    println!("{}: {}", "Days Practiced".white().bold(), report.days_practiced);
    print_distribution_bar("Easy", report.easy_count, report.total_reviews, "green");
    print_distribution_bar("Hard", report.hard_count, report.total_reviews, "yellow");
    print_distribution_bar("Wrong", report.wrong_count, report.total_reviews, "red");
    if let Some(rate) = report.success_rate {
        println!("{}: {:.1}%", "Success Rate".white().bold(), rate * 100.0);
    }

    if !report.struggling_cards.is_empty() {
        println!();
        println!("{}", "Struggling cards:".red().bold());
        for id in &report.struggling_cards {
            let front = leitner_core::locate(&deck.buckets, id)
                .map(|(_, card)| card.front().to_string())
                .unwrap_or_else(|| "(removed)".to_string());
            println!("  {} {} {}", "!".red().bold(), id.short().dimmed(), front);
        }
    }

    Ok(())
}

/// Run next-day command
fn run_next_day(config: &Config) -> anyhow::Result<()> {
    let mut deck = Deck::load(&config.deck_path)?;
    let day = deck.advance_day();
    deck.save(&config.deck_path)?;
    println!("{}: {}", "Current Day".white().bold(), day);
    Ok(())
}

/// Print a distribution bar
fn print_distribution_bar(label: &str, count: usize, total: usize, color: &str) {
    let percentage = if total > 0 {
        (count as f64 / total as f64) * 100.0
    } else {
        0.0
    };

    let bar_width: usize = 30;
    let filled = ((percentage / 100.0) * bar_width as f64) as usize;
    let empty = bar_width.saturating_sub(filled);

    let bar = format!("{}{}", "#".repeat(filled), "-".repeat(empty));
    let colored_bar = match color {
        "green" => bar.green(),
        "yellow" => bar.yellow(),
        "red" => bar.red(),
        _ => bar.white(),
    };

    println!(
        "  {:20} [{:30}] {:>4} ({:>5.1}%)",
        label, colored_bar, count, percentage
    );
}
