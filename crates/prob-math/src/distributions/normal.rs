//! Normal (Gaussian) distribution parameterised by mean and **variance**.
//!
//! The density is closed-form; the cumulative probability is the midpoint
//! integral of the density between two caller-chosen bounds.

use prob_core::{ensure, errors::Result, Real, Size};
use std::f64::consts::PI;

use crate::integrals::integrate;

pub(crate) fn check_params(mean: Real, variance: Real) -> Result<()> {
    ensure!(mean.is_finite(), "normal: mean must be finite, got {mean}");
    ensure!(
        variance > 0.0 && variance.is_finite(),
        "normal: variance must be positive and finite, got {variance}"
    );
    Ok(())
}

#[inline]
fn density(mean: Real, variance: Real, x: Real) -> Real {
    let d = x - mean;
    (-d * d / (2.0 * variance)).exp() / (2.0 * PI * variance).sqrt()
}

/// `exp(−(x − μ)² / 2σ²) / √(2πσ²)` where `σ² = variance`.
pub fn normal_pdf(mean: Real, variance: Real, value: Real) -> Result<Real> {
    check_params(mean, variance)?;
    Ok(density(mean, variance, value))
}

/// Probability mass between `start` and `end`, integrating the density with
/// `resolution` midpoint rectangles.
///
/// Passing a `start` several standard deviations below the mean gives an
/// approximation of the usual CDF at `end`.
pub fn normal_cdf(
    mean: Real,
    variance: Real,
    start: Real,
    end: Real,
    resolution: Size,
) -> Result<Real> {
    check_params(mean, variance)?;
    ensure!(
        start.is_finite() && end.is_finite(),
        "normal_cdf: integration bounds must be finite, got [{start}, {end}]"
    );
    integrate(|x| density(mean, variance, x), start, end, resolution)
}
