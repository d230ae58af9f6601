//! Unbiased die-roll sampling.
//!
//! Maps uniformly random bytes to a smaller range without modulo bias.
//! A plain `byte % max` skews toward low values whenever `max` does not
//! divide 256; this sampler discards the skewing high bytes instead.

use crate::entropy::{EntropyError, EntropySource};

/// Draws a value uniformly distributed over `[0, max)`.
///
/// Rejection sampling: only bytes below the largest multiple of `max`
/// that fits in the byte range are accepted, so every residue class is
/// represented by the same number of byte values. Rejected draws are
/// retried; for small `max` the expected cost stays close to one byte
/// per call (with `max = 6` only 4 of 256 byte values are rejected).
///
/// # Panics
///
/// Panics if `max` is zero.
///
/// # Example
///
/// ```
/// use dicepass::entropy::MockSource;
/// use dicepass::roll::sample_below;
///
/// // 253 falls in the rejected range for max = 6; 15 is accepted.
/// let mut source = MockSource::new([253, 15]);
/// assert_eq!(sample_below(&mut source, 6).unwrap(), 3);
/// ```
pub fn sample_below<S>(source: &mut S, max: u8) -> Result<u8, EntropyError>
where
    S: EntropySource + ?Sized,
{
    assert!(max > 0, "sample_below requires a positive bound");

    // Largest multiple of max that fits in 0..=255, computed in u16
    // because it is 256 itself whenever max divides 256.
    let limit = 256u16 - (256u16 % u16::from(max));

    loop {
        let byte = source.byte()?;
        if u16::from(byte) < limit {
            return Ok(byte % max);
        }
        tracing::trace!(rejected = byte, limit, "discarding biased draw");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::MockSource;
    use proptest::prelude::*;
    use rand_chacha::rand_core::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    /// Deterministic high-volume source for distribution tests.
    struct ChaChaSource(ChaCha20Rng);

    impl ChaChaSource {
        fn seeded(seed: u8) -> Self {
            Self(ChaCha20Rng::from_seed([seed; 32]))
        }
    }

    impl EntropySource for ChaChaSource {
        fn fill(&mut self, buf: &mut [u8]) -> Result<(), EntropyError> {
            use rand_chacha::rand_core::RngCore;
            self.0.fill_bytes(buf);
            Ok(())
        }

        fn name(&self) -> &'static str {
            "chacha-test"
        }
    }

    #[test]
    fn test_accepted_byte_maps_by_remainder() {
        // 251 < 252, the limit for max = 6, so it is used directly.
        let mut source = MockSource::new([251]);
        assert_eq!(sample_below(&mut source, 6).unwrap(), 251 % 6);
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn test_biased_high_bytes_are_retried() {
        // 252..=255 all sit above the limit for max = 6 and must be
        // discarded; the first in-range byte decides the result.
        let mut source = MockSource::new([252, 253, 254, 255, 9]);
        assert_eq!(sample_below(&mut source, 6).unwrap(), 3);
        assert_eq!(source.consumed(), 5);
    }

    #[test]
    fn test_exhaustive_bound_and_rejection() {
        // For every bound and every byte value: an in-range byte is
        // consumed as-is, an out-of-range byte is discarded and the
        // next draw is used instead.
        for max in 1u16..=255 {
            let limit = 256 - (256 % max);
            for byte in 0u16..=255 {
                let max = max as u8;
                let byte = byte as u8;

                if u16::from(byte) < limit {
                    let mut source = MockSource::new([byte]);
                    let value = sample_below(&mut source, max).unwrap();
                    assert_eq!(value, byte % max);
                    assert!(value < max);
                    assert_eq!(source.consumed(), 1);
                } else {
                    let mut source = MockSource::new([byte, 0]);
                    let value = sample_below(&mut source, max).unwrap();
                    assert_eq!(value, 0, "rejected byte {byte} must not be used");
                    assert_eq!(source.consumed(), 2);
                }
            }
        }
    }

    #[test]
    fn test_power_of_two_bounds_reject_nothing() {
        // 256 % max == 0 for max in {1,2,4,...,128}: every byte is in
        // range and exactly one draw happens.
        for max in [1u8, 2, 4, 8, 16, 32, 64, 128] {
            let mut source = MockSource::new([255]);
            assert_eq!(sample_below(&mut source, max).unwrap(), 255 % max);
            assert_eq!(source.consumed(), 1);
        }
    }

    #[test]
    fn test_source_failure_propagates() {
        let mut source = MockSource::new([]);
        assert!(matches!(
            sample_below(&mut source, 6),
            Err(EntropyError::Exhausted(0))
        ));
    }

    #[test]
    fn test_failure_during_retry_propagates() {
        // The only scripted byte is rejected; the retry then fails.
        let mut source = MockSource::new([255]);
        assert!(matches!(
            sample_below(&mut source, 6),
            Err(EntropyError::Exhausted(1))
        ));
    }

    #[test]
    #[should_panic(expected = "positive bound")]
    fn test_zero_bound_panics() {
        let mut source = MockSource::new([0]);
        let _ = sample_below(&mut source, 0);
    }

    #[test]
    fn test_die_roll_distribution_is_uniform() {
        // Chi-square goodness of fit over one million deterministic
        // draws. With 5 degrees of freedom a statistic above 30 has
        // probability ~1.5e-5 for a uniform sampler, while the naive
        // `byte % 6` bias would push the expectation above 100 at this
        // sample size.
        let mut source = ChaChaSource::seeded(7);
        let mut counts = [0u64; 6];
        let trials = 1_000_000u64;

        for _ in 0..trials {
            counts[sample_below(&mut source, 6).unwrap() as usize] += 1;
        }

        let expected = trials as f64 / 6.0;
        let chi_square: f64 = counts
            .iter()
            .map(|&c| {
                let d = c as f64 - expected;
                d * d / expected
            })
            .sum();

        assert!(
            chi_square < 30.0,
            "chi-square {chi_square:.2} too high, counts {counts:?}"
        );
    }

    #[test]
    fn test_every_face_reachable() {
        let mut source = ChaChaSource::seeded(11);
        let mut seen = [false; 6];

        for _ in 0..1_000 {
            seen[sample_below(&mut source, 6).unwrap() as usize] = true;
        }

        assert!(seen.iter().all(|&s| s), "faces seen: {seen:?}");
    }

    proptest! {
        #[test]
        fn prop_result_always_below_bound(
            max in 1u8..=255,
            script in proptest::collection::vec(any::<u8>(), 1..64),
        ) {
            let mut source = MockSource::new(script);
            if let Ok(value) = sample_below(&mut source, max) {
                prop_assert!(value < max);
            }
        }

        #[test]
        fn prop_exhaustion_only_after_full_rejection(
            max in 1u8..=255,
            script in proptest::collection::vec(any::<u8>(), 0..16),
        ) {
            // If the sampler errors, every scripted byte must have been
            // drawn and rejected; an accepted byte always produces Ok.
            let limit = 256u16 - (256u16 % u16::from(max));
            let all_rejected = script.iter().all(|&b| u16::from(b) >= limit);

            let mut source = MockSource::new(script);
            let result = sample_below(&mut source, max);
            prop_assert_eq!(result.is_err(), all_rejected);
        }
    }
}
