//! Uniform random sources.
//!
//! The samplers never own global random state: they draw from whatever
//! [`UniformSource`] the caller hands them.  Plain closures work, which is
//! the easiest way to feed pre-drawn values; for real randomness wrap a
//! seeded Mersenne Twister or any `rand` generator.

use prob_core::Real;
use rand::Rng;
use rand_mt::Mt19937GenRand64;

/// A source of uniform deviates in `[0, 1)`.
pub trait UniformSource {
    /// Draw the next value.  Implementations must stay inside `[0, 1)`;
    /// samplers reject anything else.
    fn next_uniform(&mut self) -> Real;
}

impl<F> UniformSource for F
where
    F: FnMut() -> Real,
{
    fn next_uniform(&mut self) -> Real {
        self()
    }
}

/// A uniform pseudo-random number generator based on the Mersenne Twister
/// MT19937-64 algorithm.
pub struct MersenneTwisterUniformRng {
    rng: Mt19937GenRand64,
}

impl MersenneTwisterUniformRng {
    /// Create a new generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mt19937GenRand64::new(seed),
        }
    }

    /// Generate the next uniform deviate in `[0, 1)`.
    pub fn next_real(&mut self) -> Real {
        // top 53 bits, so the result never rounds up to 1.0
        (self.rng.next_u64() >> 11) as Real * (1.0 / (1u64 << 53) as Real)
    }
}

impl UniformSource for MersenneTwisterUniformRng {
    fn next_uniform(&mut self) -> Real {
        self.next_real()
    }
}

/// Adapter turning any [`rand::Rng`] into a [`UniformSource`].
#[derive(Debug, Clone)]
pub struct RandUniform<R> {
    rng: R,
}

impl<R: Rng> RandUniform<R> {
    /// Wrap `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Recover the wrapped generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> UniformSource for RandUniform<R> {
    fn next_uniform(&mut self) -> Real {
        self.rng.gen::<Real>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn mt_range() {
        let mut rng = MersenneTwisterUniformRng::new(42);
        for _ in 0..1_000 {
            let x = rng.next_uniform();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn mt_is_reproducible() {
        let mut a = MersenneTwisterUniformRng::new(7);
        let mut b = MersenneTwisterUniformRng::new(7);
        for _ in 0..100 {
            assert_eq!(a.next_uniform(), b.next_uniform());
        }
    }

    #[test]
    fn mt_mean_near_half() {
        let mut rng = MersenneTwisterUniformRng::new(2024);
        let mean = (0..10_000).map(|_| rng.next_uniform()).sum::<Real>() / 10_000.0;
        assert!((mean - 0.5).abs() < 0.02, "mean {mean} out of expected range");
    }

    #[test]
    fn rand_adapter_range() {
        let mut src = RandUniform::new(StdRng::seed_from_u64(1));
        for _ in 0..1_000 {
            let x = src.next_uniform();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn closures_are_sources() {
        let mut draws = [0.25, 0.75].into_iter();
        let mut src = move || draws.next().unwrap_or(0.0);
        assert_eq!(src.next_uniform(), 0.25);
        assert_eq!(src.next_uniform(), 0.75);
        assert_eq!(src.next_uniform(), 0.0);
    }
}
