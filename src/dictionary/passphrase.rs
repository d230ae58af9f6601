//! Passphrase accumulation.

/// Words collected from successful dictionary lookups, in roll order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Passphrase {
    words: Vec<String>,
}

impl Passphrase {
    /// Creates an empty passphrase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a word.
    pub fn push(&mut self, word: impl Into<String>) {
        self.words.push(word.into());
    }

    /// Returns the number of collected words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no lookups succeeded.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Joins the words with the given separator.
    pub fn join(&self, separator: &str) -> String {
        self.words.join(separator)
    }
}
