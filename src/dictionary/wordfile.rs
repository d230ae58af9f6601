//! Tab-separated word file loading and lookup.

use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use crate::roll::DicewareNumber;

/// Errors that can occur while loading a word file.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to open word file: {0}")]
    Open(io::Error),
    #[error("failed to read word file: {0}")]
    Read(io::Error),
}

/// An in-memory Diceware word list keyed by number.
///
/// Each line of the source file holds a numeric key and a word
/// separated by a tab. Lines that do not fit that shape are skipped;
/// a key that appears twice keeps its last word.
#[derive(Clone, PartialEq, Eq)]
pub struct Dictionary {
    entries: HashMap<u32, String>,
}

impl Dictionary {
    /// Loads a word file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let file = File::open(path.as_ref()).map_err(DictionaryError::Open)?;
        let dictionary = Self::parse(BufReader::new(file))?;
        tracing::debug!(
            path = %path.as_ref().display(),
            entries = dictionary.len(),
            "word file loaded"
        );
        Ok(dictionary)
    }

    /// Parses word-file lines from any buffered reader.
    ///
    /// Parsing the same input always yields the same dictionary.
    pub fn parse<R: BufRead>(reader: R) -> Result<Self, DictionaryError> {
        let mut entries = HashMap::new();
        let mut skipped = 0usize;

        for line in reader.lines() {
            let line = line.map_err(DictionaryError::Read)?;
            let mut fields = line.split('\t');
            let (key, word) = match (fields.next(), fields.next()) {
                (Some(key), Some(word)) => (key, word),
                _ => {
                    skipped += 1;
                    continue;
                }
            };
            match key.trim().parse::<u32>() {
                Ok(key) => {
                    entries.insert(key, word.to_string());
                }
                Err(_) => skipped += 1,
            }
        }

        if skipped > 0 {
            tracing::debug!(skipped, "ignored malformed word file lines");
        }
        Ok(Self { entries })
    }

    /// Looks up the word for a Diceware number.
    pub fn lookup(&self, number: DicewareNumber) -> Option<&str> {
        self.entries.get(&number.value()).map(String::as_str)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no lines parsed into entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dictionary")
            .field("entries", &self.entries.len())
            .finish()
    }
}
