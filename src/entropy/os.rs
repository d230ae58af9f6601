//! Operating-system entropy backend.
//!
//! Draws from the platform cryptographic random generator via
//! `rand_core::OsRng` (getrandom under the hood).

use super::source::{EntropyError, EntropySource};
use rand_core::{OsRng, RngCore};

/// Entropy source backed by the OS cryptographic random generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy {
    rng: OsRng,
}

impl OsEntropy {
    /// Creates a source backed by the platform generator.
    pub fn new() -> Self {
        Self::default()
    }
}

impl EntropySource for OsEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), EntropyError> {
        self.rng
            .try_fill_bytes(buf)
            .map_err(|e| EntropyError::Read(e.to_string()))
    }

    fn name(&self) -> &'static str {
        "os"
    }
}
