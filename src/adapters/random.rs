use crate::domain::ports::RandomSource;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Thread-local OS-seeded generator, used when no seed is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_unit(&mut self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Reproducible sequence for `--seed` runs and tests.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: ChaCha8Rng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Always yields the same sample; pins the score variance in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom {
    value: f64,
}

impl FixedRandom {
    /// `value` is clamped into `[0, 1)`.
    pub fn new(value: f64) -> Self {
        Self {
            value: value.clamp(0.0, 1.0 - f64::EPSILON),
        }
    }

    /// Zero variance: `(0.5 - 0.5) * 10`.
    pub fn midpoint() -> Self {
        Self::new(0.5)
    }
}

impl RandomSource for FixedRandom {
    fn next_unit(&mut self) -> f64 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_random_is_reproducible() {
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);
        for _ in 0..16 {
            assert_eq!(a.next_unit(), b.next_unit());
        }
    }

    #[test]
    fn test_samples_stay_in_unit_interval() {
        let mut seeded = SeededRandom::new(7);
        let mut thread = ThreadRandom;
        for _ in 0..1000 {
            let s = seeded.next_unit();
            let t = thread.next_unit();
            assert!((0.0..1.0).contains(&s));
            assert!((0.0..1.0).contains(&t));
        }
    }

    #[test]
    fn test_fixed_random_clamps() {
        assert_eq!(FixedRandom::new(-3.0).next_unit(), 0.0);
        assert!(FixedRandom::new(1.0).next_unit() < 1.0);
        assert_eq!(FixedRandom::midpoint().next_unit(), 0.5);
    }
}
