//! Entropy backends and the source abstraction.
//!
//! This module treats randomness as a scoped resource: a backend is
//! opened once at startup, passed explicitly to every sampling call,
//! and released when it goes out of scope. The sampler only ever sees
//! the [`EntropySource`] trait, never a concrete backend.

mod os;
mod source;
#[cfg(feature = "tpm")]
mod tpm;

pub use os::OsEntropy;
pub use source::{EntropyError, EntropySource, MockSource, SourceKind};
#[cfg(feature = "tpm")]
pub use tpm::TpmEntropy;

/// Opens the entropy backend selected by configuration.
///
/// Selecting `tpm` in a build without the `tpm` cargo feature fails
/// with [`EntropyError::Unavailable`].
pub fn open(kind: SourceKind) -> Result<Box<dyn EntropySource>, EntropyError> {
    tracing::debug!(backend = kind.as_str(), "opening entropy source");

    match kind {
        SourceKind::Os => Ok(Box::new(OsEntropy::new())),
        #[cfg(feature = "tpm")]
        SourceKind::Tpm => Ok(Box::new(TpmEntropy::open()?)),
        #[cfg(not(feature = "tpm"))]
        SourceKind::Tpm => Err(EntropyError::Unavailable(
            "TPM support not compiled in (rebuild with --features tpm)".into(),
        )),
    }
}
