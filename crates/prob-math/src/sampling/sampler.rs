use prob_core::{errors::Result, Budget, Natural, Probability, Real};

use super::{
    exceeds_threshold, sample_chi_squared, sample_exponential, sample_normal, sample_uniform,
};
use crate::random_numbers::UniformSource;

/// A uniform source paired with the [`Budget`] used for every
/// integral-backed draw.
///
/// ```
/// use prob_core::Budget;
/// use prob_math::{random_numbers::MersenneTwisterUniformRng, sampling::Sampler};
///
/// let mut sampler = Sampler::new(MersenneTwisterUniformRng::new(42), Budget::default()).unwrap();
/// let growth = sampler.normal(0.2, 0.1).unwrap();
/// assert!((-0.1..=0.5).contains(&growth));
/// ```
pub struct Sampler<U> {
    source: U,
    budget: Budget,
}

impl<U: UniformSource> Sampler<U> {
    /// Pair `source` with `budget`, validating the budget.
    pub fn new(source: U, budget: Budget) -> Result<Self> {
        budget.validate()?;
        tracing::debug!(
            max_iterations = budget.max_iterations(),
            resolution = budget.resolution(),
            "sampler created"
        );
        Ok(Self { source, budget })
    }

    /// The budget in use.
    pub fn budget(&self) -> Budget {
        self.budget
    }

    /// Mutable access to the underlying source.
    pub fn source_mut(&mut self) -> &mut U {
        &mut self.source
    }

    /// Recover the underlying source.
    pub fn into_source(self) -> U {
        self.source
    }

    /// One Normal variate; see [`sample_normal`].
    pub fn normal(&mut self, mean: Real, variance: Real) -> Result<Real> {
        sample_normal(
            mean,
            variance,
            self.budget.max_iterations(),
            self.budget.resolution(),
            &mut self.source,
        )
    }

    /// One Exponential variate; see [`sample_exponential`].
    pub fn exponential(&mut self, rate: Real) -> Result<Real> {
        sample_exponential(rate, &mut self.source)
    }

    /// One Chi-squared variate; see [`sample_chi_squared`].
    pub fn chi_squared(&mut self, degrees_of_freedom: Natural) -> Result<Real> {
        sample_chi_squared(
            degrees_of_freedom,
            self.budget.max_iterations(),
            self.budget.resolution(),
            &mut self.source,
        )
    }

    /// One Uniform variate on `[min, max)`.
    pub fn uniform(&mut self, min: Real, max: Real) -> Result<Real> {
        sample_uniform(min, max, &mut self.source)
    }

    /// Threshold test; see [`exceeds_threshold`].
    pub fn exceeds(&mut self, threshold: Probability) -> Result<bool> {
        exceeds_threshold(threshold, &mut self.source)
    }
}
