//! Dicepass Library
//!
//! Generates Diceware passphrase numbers from a cryptographically
//! secure entropy source, optionally mapping each number to a word
//! from a user-supplied wordlist.
//!
//! # Architecture
//!
//! The system follows an explicit data flow:
//!
//! ```text
//! entropy → roll → output
//! (bytes)  (numbers)  ↑
//!            dictionary (words)
//! ```
//!
//! # Design Principles
//!
//! - **Unbiased by construction**: die rolls use rejection sampling,
//!   never a bare modulo over the byte range
//! - **One entropy abstraction**: OS CSPRNG and TPM hardware sit behind
//!   the same trait, selected once at startup
//! - **stdout is the report**: diagnostics and logs go to stderr only
//! - **No conditioning**: backends are trusted CSPRNGs; statistical
//!   checks live in the test suite, not at runtime
//!
//! # Example
//!
//! ```
//! use dicepass::entropy::MockSource;
//! use dicepass::roll::DicewareNumber;
//!
//! // Bytes 2,0,3,0,4 become die faces 3,1,4,1,5.
//! let mut source = MockSource::new([2, 0, 3, 0, 4]);
//! let number = DicewareNumber::generate(&mut source).unwrap();
//! assert_eq!(number.to_string(), "31415");
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod dictionary;
pub mod entropy;
pub mod output;
pub mod roll;

// Re-export commonly used types at crate root
pub use cli::Cli;
pub use config::{ConfigError, FileConfig, RunConfig};
pub use dictionary::{Dictionary, DictionaryError, Passphrase};
pub use entropy::{EntropyError, EntropySource, MockSource, OsEntropy, SourceKind};
pub use output::{RunError, RunSummary};
pub use roll::{sample_below, DicewareNumber};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
