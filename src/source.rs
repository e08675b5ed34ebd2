//! Sources of uniform randomness for level promotion.

use crate::skiplist::PROMOTION_PROBABILITY;
use rand::{Rng, SeedableRng, XorShiftRng};

/// A generator of uniformly distributed values in `[0, 1)`.
///
/// `SkipList` draws one value after splicing a node into each level and promotes the node to the
/// next level while the draw is below the promotion probability. Swapping the source makes the
/// resulting level structure reproducible.
pub trait UniformSource {
    /// Returns the next value in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;
}

impl<F> UniformSource for F
where
    F: FnMut() -> f64,
{
    fn next_uniform(&mut self) -> f64 {
        self()
    }
}

/// The default source, backed by a fast non-cryptographic `XorShiftRng`.
pub struct XorShiftSource {
    rng: XorShiftRng,
}

impl XorShiftSource {
    /// Constructs a source seeded from the thread-local generator.
    pub fn new() -> Self {
        XorShiftSource {
            rng: rand::weak_rng(),
        }
    }

    /// Constructs a source that always yields the same stream for the same seed.
    ///
    /// # Examples
    /// ```
    /// use sorted_skiplist::{UniformSource, XorShiftSource};
    ///
    /// let mut a = XorShiftSource::from_seed([1, 1, 1, 1]);
    /// let mut b = XorShiftSource::from_seed([1, 1, 1, 1]);
    /// assert_eq!(a.next_uniform(), b.next_uniform());
    /// ```
    pub fn from_seed(seed: [u32; 4]) -> Self {
        XorShiftSource {
            rng: XorShiftRng::from_seed(seed),
        }
    }
}

impl Default for XorShiftSource {
    fn default() -> Self {
        Self::new()
    }
}

impl UniformSource for XorShiftSource {
    fn next_uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// A source that cycles through a fixed list of values.
///
/// # Examples
/// ```
/// use sorted_skiplist::{SequenceSource, UniformSource};
///
/// let mut source = SequenceSource::new(vec![0.25, 0.75]);
/// assert_eq!(source.next_uniform(), 0.25);
/// assert_eq!(source.next_uniform(), 0.75);
/// assert_eq!(source.next_uniform(), 0.25);
/// ```
pub struct SequenceSource {
    values: Vec<f64>,
    position: usize,
}

impl SequenceSource {
    /// Constructs a new `SequenceSource` over `values`.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty, if any value lies outside `[0, 1)`, or if no value reaches
    /// `PROMOTION_PROBABILITY`. A sequence that never stops promotion would grow a node forever.
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "sequence must contain at least one value");
        assert!(
            values.iter().all(|value| *value >= 0.0 && *value < 1.0),
            "sequence values must lie in [0, 1)",
        );
        assert!(
            values.iter().any(|value| *value >= PROMOTION_PROBABILITY),
            "sequence must contain a value of at least {}",
            PROMOTION_PROBABILITY,
        );
        SequenceSource { values, position: 0 }
    }
}

impl UniformSource for SequenceSource {
    fn next_uniform(&mut self) -> f64 {
        let value = self.values[self.position];
        self.position = (self.position + 1) % self.values.len();
        value
    }
}

#[cfg(test)]
mod tests {
    use super::{SequenceSource, UniformSource, XorShiftSource};
    use crate::skiplist::PROMOTION_PROBABILITY;

    #[test]
    #[should_panic]
    fn test_empty_sequence() {
        SequenceSource::new(Vec::new());
    }

    #[test]
    #[should_panic]
    fn test_sequence_out_of_range() {
        SequenceSource::new(vec![0.5, 1.0]);
    }

    #[test]
    #[should_panic]
    fn test_sequence_always_promotes() {
        SequenceSource::new(vec![0.1, 0.2]);
    }

    #[test]
    fn test_sequence_stops_at_promotion_probability() {
        let mut source = SequenceSource::new(vec![0.1, PROMOTION_PROBABILITY]);
        assert_eq!(source.next_uniform(), 0.1);
        assert_eq!(source.next_uniform(), PROMOTION_PROBABILITY);
    }

    #[test]
    fn test_sequence_cycles() {
        let mut source = SequenceSource::new(vec![0.1, 0.2, 0.7]);
        let drawn: Vec<f64> = (0..7).map(|_| source.next_uniform()).collect();
        assert_eq!(drawn, vec![0.1, 0.2, 0.7, 0.1, 0.2, 0.7, 0.1]);
    }

    #[test]
    fn test_xorshift_range() {
        let mut source = XorShiftSource::from_seed([1, 1, 1, 1]);
        for _ in 0..10_000 {
            let value = source.next_uniform();
            assert!(value >= 0.0 && value < 1.0);
        }
    }

    #[test]
    fn test_closure_source() {
        let mut calls = 0;
        let mut source = || {
            calls += 1;
            0.5
        };
        assert_eq!(source.next_uniform(), 0.5);
        assert_eq!(source.next_uniform(), 0.5);
        drop(source);
        assert_eq!(calls, 2);
    }
}
