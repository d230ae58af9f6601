//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{ConfigError, FileConfig, RunConfig, DEFAULT_ROLLS, DEFAULT_SEPARATOR};
use crate::entropy::SourceKind;

/// Dicepass — Diceware passphrase numbers from cryptographic entropy.
#[derive(Debug, Parser)]
#[command(name = "dicepass", version, about)]
pub struct Cli {
    /// Number of Diceware numbers to generate (default 10).
    #[arg(short = 'r', long, allow_negative_numbers = true)]
    pub rolls: Option<i64>,

    /// Dictionary file mapping Diceware numbers to words.
    #[arg(short = 'd', long)]
    pub dictionary: Option<PathBuf>,

    /// Print the words of all found numbers as a passphrase.
    #[arg(short = 'p', long)]
    pub passphrase: bool,

    /// Separator between passphrase words (default single space).
    #[arg(short = 's', long)]
    pub separator: Option<String>,

    /// Entropy backend to draw random bytes from.
    #[arg(long, value_enum)]
    pub source: Option<SourceKind>,

    /// TOML file supplying defaults for any of the above.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Merges flags, the optional config file, and built-in defaults.
    ///
    /// A flag given on the command line always wins over the file;
    /// the rolls count is validated after merging, so an out-of-range
    /// value is rejected no matter where it came from.
    pub fn resolve(self) -> Result<RunConfig, ConfigError> {
        let file = match &self.config {
            Some(path) => FileConfig::from_file(path)?,
            None => FileConfig::default(),
        };

        let rolls = match self.rolls.or(file.rolls) {
            Some(rolls) if rolls < 1 => return Err(ConfigError::InvalidRolls(rolls)),
            Some(rolls) => rolls as u64,
            None => DEFAULT_ROLLS,
        };

        Ok(RunConfig {
            rolls,
            dictionary: self.dictionary.or(file.dictionary),
            passphrase: self.passphrase || file.passphrase.unwrap_or(false),
            separator: self
                .separator
                .or(file.separator)
                .unwrap_or_else(|| DEFAULT_SEPARATOR.to_string()),
            source: self.source.or(file.source).unwrap_or_default(),
        })
    }
}
