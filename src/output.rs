//! Report rendering and the run driver.
//!
//! Everything the binary prints on stdout is produced here against a
//! plain `io::Write`, so the whole pipeline runs in tests without
//! spawning a process.

use std::io::Write;

use thiserror::Error;

use crate::config::RunConfig;
use crate::dictionary::{Dictionary, Passphrase};
use crate::entropy::{EntropyError, EntropySource};
use crate::roll::DicewareNumber;

/// Errors that can occur while generating the report.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("entropy source failed: {0}")]
    Entropy(#[from] EntropyError),
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Counters describing a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Numbers generated.
    pub rolls: u64,
    /// Lookups that produced a word.
    pub words_matched: u64,
}

/// Formats one report line for a generated number.
///
/// Returns the line (without trailing newline) and the matched word,
/// if the dictionary was consulted and had one.
pub fn render_roll<'d>(
    index: u64,
    number: DicewareNumber,
    dictionary: Option<&'d Dictionary>,
) -> (String, Option<&'d str>) {
    let mut line = format!("Diceware number {index}: {number}");
    let mut matched = None;

    if let Some(dictionary) = dictionary {
        match dictionary.lookup(number) {
            Some(word) => {
                line.push_str(" - ");
                line.push_str(word);
                matched = Some(word);
            }
            None => {
                line.push_str(&format!(
                    " - (word not found in dictionary for number {number})"
                ));
            }
        }
    }

    (line, matched)
}

/// Generates `config.rolls` numbers and writes the report to `out`.
///
/// Matched words accumulate into a passphrase; the passphrase block
/// (a blank line, then the joined words) is written only when it was
/// requested and at least one lookup succeeded. Lines already written
/// stay written if a later roll fails.
pub fn run<W: Write>(
    config: &RunConfig,
    source: &mut dyn EntropySource,
    dictionary: Option<&Dictionary>,
    out: &mut W,
) -> Result<RunSummary, RunError> {
    let mut passphrase = Passphrase::new();

    for index in 1..=config.rolls {
        let number = DicewareNumber::generate(source)?;
        let (line, matched) = render_roll(index, number, dictionary);
        writeln!(out, "{line}")?;
        if let Some(word) = matched {
            passphrase.push(word);
        }
        tracing::trace!(index, matched = matched.is_some(), "number generated");
    }

    if config.passphrase && !passphrase.is_empty() {
        writeln!(out)?;
        writeln!(
            out,
            "Complete passphrase: {}",
            passphrase.join(&config.separator)
        )?;
    }
    out.flush()?;

    let summary = RunSummary {
        rolls: config.rolls,
        words_matched: passphrase.word_count() as u64,
    };
    tracing::debug!(
        rolls = summary.rolls,
        matched = summary.words_matched,
        "run complete"
    );
    Ok(summary)
}
