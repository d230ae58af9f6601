//! Word list handling.
//!
//! [`Dictionary`] maps Diceware numbers to words loaded from a
//! tab-separated file; [`Passphrase`] collects the words matched
//! during a run.

mod passphrase;
mod wordfile;

pub use passphrase::Passphrase;
pub use wordfile::{Dictionary, DictionaryError};
