//! Diceware numbers: five die rolls read as one five-digit value.

use std::fmt;

use crate::entropy::{EntropyError, EntropySource};
use crate::roll::sampler::sample_below;

/// Faces on a Diceware die.
pub const DICE_SIDES: u8 = 6;

/// Rolls per Diceware number.
pub const DICE_PER_NUMBER: usize = 5;

/// A five-digit Diceware number with every digit in 1..=6.
///
/// The first roll is the most significant digit, so values range from
/// 11111 to 66666. Formatting always produces five digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DicewareNumber(u32);

impl DicewareNumber {
    /// Rolls five dice from `source` and assembles the number.
    ///
    /// Each roll draws uniformly from `[0, 6)` via rejection sampling,
    /// shifts to the die range `1..=6`, and shifts into the next
    /// decimal position.
    pub fn generate<S>(source: &mut S) -> Result<Self, EntropyError>
    where
        S: EntropySource + ?Sized,
    {
        let mut value = 0u32;
        for _ in 0..DICE_PER_NUMBER {
            let digit = sample_below(source, DICE_SIDES)? + 1;
            value = value * 10 + u32::from(digit);
        }
        Ok(Self(value))
    }

    /// Returns the numeric value, e.g. `31415`.
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the five die faces, most significant first.
    pub fn digits(self) -> [u8; DICE_PER_NUMBER] {
        let mut digits = [0u8; DICE_PER_NUMBER];
        let mut rest = self.0;
        for slot in digits.iter_mut().rev() {
            *slot = (rest % 10) as u8;
            rest /= 10;
        }
        digits
    }

    /// Builds a number directly from its value, bypassing the dice.
    #[cfg(test)]
    pub(crate) fn from_value_for_testing(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for DicewareNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:05}", self.0)
    }
}
