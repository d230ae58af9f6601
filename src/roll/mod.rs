//! Die rolling and Diceware number assembly.
//!
//! [`sample_below`] is the only path from raw entropy bytes to die
//! faces; [`DicewareNumber::generate`] composes five of its draws into
//! one lookup key. Both operate on any [`crate::entropy::EntropySource`].

mod number;
mod sampler;

pub use number::{DicewareNumber, DICE_PER_NUMBER, DICE_SIDES};
pub use sampler::sample_below;
