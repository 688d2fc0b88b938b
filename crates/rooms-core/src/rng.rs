//! Random integer sources for layout generation
//!
//! Uses a seeded ChaCha RNG so a seed and a configuration fully determine a layout.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of uniformly distributed integers.
///
/// This is the only randomness the generator consumes, so hosts can plug in
/// their own engine's RNG.
pub trait IntegerSource {
    /// Uniform integer in `lo..=hi`. Returns `lo` when `hi <= lo`.
    fn integer_in_range(&mut self, lo: i32, hi: i32) -> i32;
}

impl<T: IntegerSource + ?Sized> IntegerSource for &mut T {
    fn integer_in_range(&mut self, lo: i32, hi: i32) -> i32 {
        (**self).integer_in_range(lo, hi)
    }
}

/// Layout random number generator
///
/// Wraps ChaCha8Rng for reproducible layouts.
/// Note: RNG state is not serialized - only the seed is, and deserializing
/// restarts the stream from that seed.
#[derive(Debug, Clone)]
pub struct LayoutRng {
    rng: ChaCha8Rng,
    seed: u64,
}

// Custom serialization - only serialize seed, recreate RNG on deserialize
impl Serialize for LayoutRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.seed.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for LayoutRng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let seed = u64::deserialize(deserializer)?;
        Ok(LayoutRng::new(seed))
    }
}

impl LayoutRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    #[cfg(feature = "std")]
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl IntegerSource for LayoutRng {
    fn integer_in_range(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }
}

#[cfg(feature = "std")]
impl Default for LayoutRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

/// Adapter that turns any `rand` generator into an [`IntegerSource`].
#[derive(Debug, Clone)]
pub struct RandSource<R>(pub R);

impl<R: RngCore> IntegerSource for RandSource<R> {
    fn integer_in_range(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.0.gen_range(lo..=hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_in_range_bounds() {
        let mut rng = LayoutRng::new(42);
        for _ in 0..1000 {
            let n = rng.integer_in_range(3, 5);
            assert!((3..=5).contains(&n));
        }
    }

    #[test]
    fn test_integer_in_range_hits_both_ends() {
        let mut rng = LayoutRng::new(7);
        let rolls: Vec<i32> = (0..500).map(|_| rng.integer_in_range(0, 2)).collect();
        assert!(rolls.contains(&0));
        assert!(rolls.contains(&2));
    }

    #[test]
    fn test_degenerate_range() {
        let mut rng = LayoutRng::new(42);
        assert_eq!(rng.integer_in_range(4, 4), 4);
        assert_eq!(rng.integer_in_range(9, 2), 9);
    }

    #[test]
    fn test_reproducibility() {
        let mut rng1 = LayoutRng::new(42);
        let mut rng2 = LayoutRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.integer_in_range(0, 100), rng2.integer_in_range(0, 100));
        }
    }

    #[test]
    fn test_serializes_as_seed() {
        let rng = LayoutRng::new(1234);
        let json = serde_json::to_string(&rng).unwrap();
        assert_eq!(json, "1234");

        let mut restored: LayoutRng = serde_json::from_str(&json).unwrap();
        let mut fresh = LayoutRng::new(1234);
        assert_eq!(restored.seed(), 1234);
        assert_eq!(
            restored.integer_in_range(0, 1000),
            fresh.integer_in_range(0, 1000)
        );
    }

    #[test]
    fn test_rand_source_adapter() {
        let mut source = RandSource(ChaCha8Rng::seed_from_u64(3));
        for _ in 0..100 {
            let n = source.integer_in_range(-2, 2);
            assert!((-2..=2).contains(&n));
        }
    }
}
