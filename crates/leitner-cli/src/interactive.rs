//! Interactive practice loop
//!
//! Reads answers line by line so it can run against stdin or a test buffer.

use std::io::{BufRead, Write};

use colored::Colorize;
use leitner_core::{Difficulty, Flashcard, PracticeSession};

/// What the learner chose to do with a card
enum Step {
    Rated(Difficulty),
    Quit,
}

/// Walk the learner through every due card
///
/// Stops early on `q` or end of input; unrated cards count as skipped.
pub fn run_session<R: BufRead, W: Write>(
    session: &mut PracticeSession,
    mut input: R,
    mut out: W,
) -> anyhow::Result<()> {
    let pending: Vec<Flashcard> = session.due().into_iter().cloned().collect();
    let total = pending.len();

    for (i, card) in pending.iter().enumerate() {
        writeln!(out)?;
        writeln!(out, "[{}/{}] {}", i + 1, total, card.front().white().bold())?;

        match ask(card, &mut input, &mut out)? {
            Step::Rated(difficulty) => {
                let bucket = session.record(card, difficulty)?;
                writeln!(out, "  {} bucket {}", "->".cyan(), bucket)?;
            }
            Step::Quit => break,
        }
    }

    Ok(())
}

fn ask<R: BufRead, W: Write>(card: &Flashcard, input: &mut R, out: &mut W) -> anyhow::Result<Step> {
    write!(out, "  [enter] show answer, [h] hint, [q] quit: ")?;
    out.flush()?;

    let Some(line) = read_line(input)? else {
        return Ok(Step::Quit);
    };
    match line.as_str() {
        "q" => return Ok(Step::Quit),
        "h" => {
            writeln!(out, "  {}: {}", "Hint".yellow(), card.hint_text())?;
            write!(out, "  [enter] show answer: ")?;
            out.flush()?;
            if read_line(input)?.is_none() {
                return Ok(Step::Quit);
            }
        }
        _ => {}
    }

    writeln!(out, "  {}: {}", "Answer".green(), card.back())?;

    loop {
        write!(out, "  Rate [w]rong, [h]ard, [e]asy: ")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(Step::Quit);
        };
        match line.parse::<Difficulty>() {
            Ok(difficulty) => return Ok(Step::Rated(difficulty)),
            Err(_) if line == "q" => return Ok(Step::Quit),
            Err(e) => writeln!(out, "  {}", e.red())?,
        }
    }
}

/// Next trimmed, lowercased line; `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> anyhow::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}
