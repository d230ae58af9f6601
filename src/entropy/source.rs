//! Entropy source abstraction.
//!
//! This module provides a trait-based abstraction over random-byte
//! backends, allowing the OS generator, TPM hardware, and scripted
//! test sources to be used interchangeably by the sampler.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while drawing entropy.
#[derive(Debug, Error)]
pub enum EntropyError {
    /// The backend could not be opened.
    #[error("entropy source unavailable: {0}")]
    Unavailable(String),
    /// A read from an open backend failed.
    #[error("failed to read from entropy source: {0}")]
    Read(String),
    /// A scripted source ran out of bytes.
    #[error("mock entropy source exhausted after {0} bytes")]
    Exhausted(usize),
}

/// Trait for sources of uniformly random bytes.
///
/// This abstraction allows swapping between the OS generator, TPM
/// hardware, and scripted implementations for testing. Implementations
/// must return bytes that are independently and uniformly distributed
/// over 0..=255; everything downstream depends on that.
pub trait EntropySource {
    /// Fills `buf` with random bytes.
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), EntropyError>;

    /// Draws a single random byte.
    fn byte(&mut self) -> Result<u8, EntropyError> {
        let mut buf = [0u8; 1];
        self.fill(&mut buf)?;
        Ok(buf[0])
    }

    /// Short backend identifier for diagnostics.
    fn name(&self) -> &'static str;
}

/// Selectable entropy backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Platform cryptographic random generator.
    #[default]
    Os,
    /// Hardware TPM 2.0 random-number interface.
    Tpm,
}

impl SourceKind {
    /// Returns the lowercase name used in flags and config files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Os => "os",
            Self::Tpm => "tpm",
        }
    }
}

/// Scripted entropy source for tests and examples.
///
/// Returns bytes from a fixed script in order and fails with
/// [`EntropyError::Exhausted`] once the script runs out. NOT random -
/// only for exercising code that consumes entropy.
#[derive(Debug, Clone)]
pub struct MockSource {
    script: Vec<u8>,
    position: usize,
}

impl MockSource {
    /// Creates a source that will replay `script` byte by byte.
    pub fn new(script: impl Into<Vec<u8>>) -> Self {
        Self {
            script: script.into(),
            position: 0,
        }
    }

    /// Returns how many scripted bytes have been consumed.
    pub fn consumed(&self) -> usize {
        self.position
    }

    /// Returns how many scripted bytes are left.
    pub fn remaining(&self) -> usize {
        self.script.len() - self.position
    }
}

impl EntropySource for MockSource {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), EntropyError> {
        for slot in buf.iter_mut() {
            *slot = *self
                .script
                .get(self.position)
                .ok_or(EntropyError::Exhausted(self.position))?;
            self.position += 1;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
