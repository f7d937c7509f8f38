//! Inverse-transform sampling.
//!
//! Each sampler draws `u` from the caller's [`UniformSource`] and maps it
//! through the inverse CDF of the target distribution.  The Exponential
//! inverse is closed-form; Normal and Chi-squared invert their
//! integral-based CDFs by bisection, so their accuracy is bounded by the
//! iteration and resolution budgets passed in.
//!
//! The `*_from_probability` functions perform the same mapping for an
//! already-drawn `u`, which makes every sampler reproducible.

mod sampler;

pub use sampler::Sampler;

use prob_core::{ensure, errors::Result, Natural, Probability, Real, Size};

use crate::distributions::{
    chi_square::normaliser,
    chi_squared_cdf,
    exponential::{check_rate, exponential_from_probability},
    normal::check_params,
    normal_cdf,
    uniform::{check_range, uniform_from_probability},
};
use crate::random_numbers::UniformSource;
use crate::solvers1d::bisect;

fn check_budget(max_iterations: Size, resolution: Size) -> Result<()> {
    ensure!(
        max_iterations >= 1,
        "max_iterations must be >= 1, got {max_iterations}"
    );
    ensure!(resolution >= 1, "resolution must be >= 1, got {resolution}");
    Ok(())
}

fn check_probability(u: Probability) -> Result<()> {
    ensure!(
        (0.0..1.0).contains(&u),
        "uniform draw must be in [0, 1), got {u}"
    );
    Ok(())
}

/// Draw one value from `rng`, rejecting anything outside `[0, 1)`.
pub fn draw<U: UniformSource + ?Sized>(rng: &mut U) -> Result<Probability> {
    let u = rng.next_uniform();
    check_probability(u)?;
    Ok(u)
}

/// Bracket `[mean − 3·variance, mean + 3·variance]` searched by the Normal
/// inversion.
pub fn normal_bracket(mean: Real, variance: Real) -> (Real, Real) {
    (mean - 3.0 * variance, mean + 3.0 * variance)
}

/// Bracket `[0, 10 + 10·⌊df/10⌋]` searched by the Chi-squared inversion.
pub fn chi_squared_bracket(degrees_of_freedom: Natural) -> (Real, Real) {
    (0.0, 10.0 + 10.0 * Real::from(degrees_of_freedom / 10))
}

// ── Normal ────────────────────────────────────────────────────────────────────

/// The `x` in [`normal_bracket`] with
/// `normal_cdf(mean, variance, low, x, resolution) ≈ u`.
pub fn normal_from_probability(
    mean: Real,
    variance: Real,
    max_iterations: Size,
    resolution: Size,
    u: Probability,
) -> Result<Real> {
    check_params(mean, variance)?;
    check_budget(max_iterations, resolution)?;
    check_probability(u)?;
    let (low, high) = normal_bracket(mean, variance);
    let inv = bisect(
        |x| normal_cdf(mean, variance, low, x, resolution),
        u,
        low,
        high,
        max_iterations,
    )?;
    Ok(inv.root)
}

/// One Normal variate by inverse-transform sampling.
pub fn sample_normal<U: UniformSource + ?Sized>(
    mean: Real,
    variance: Real,
    max_iterations: Size,
    resolution: Size,
    rng: &mut U,
) -> Result<Real> {
    check_params(mean, variance)?;
    check_budget(max_iterations, resolution)?;
    normal_from_probability(mean, variance, max_iterations, resolution, draw(rng)?)
}

// ── Exponential ───────────────────────────────────────────────────────────────

/// One Exponential variate, `−ln(1 − u)/rate`.
pub fn sample_exponential<U: UniformSource + ?Sized>(rate: Real, rng: &mut U) -> Result<Real> {
    check_rate(rate)?;
    exponential_from_probability(rate, draw(rng)?)
}

// ── Chi-squared ───────────────────────────────────────────────────────────────

/// The `x` in [`chi_squared_bracket`] with
/// `chi_squared_cdf(df, x, resolution) ≈ u`.
pub fn chi_squared_from_probability(
    degrees_of_freedom: Natural,
    max_iterations: Size,
    resolution: Size,
    u: Probability,
) -> Result<Real> {
    normaliser(degrees_of_freedom)?;
    check_budget(max_iterations, resolution)?;
    check_probability(u)?;
    let (low, high) = chi_squared_bracket(degrees_of_freedom);
    let inv = bisect(
        |x| chi_squared_cdf(degrees_of_freedom, x, resolution),
        u,
        low,
        high,
        max_iterations,
    )?;
    Ok(inv.root)
}

/// One Chi-squared variate by inverse-transform sampling.
pub fn sample_chi_squared<U: UniformSource + ?Sized>(
    degrees_of_freedom: Natural,
    max_iterations: Size,
    resolution: Size,
    rng: &mut U,
) -> Result<Real> {
    normaliser(degrees_of_freedom)?;
    check_budget(max_iterations, resolution)?;
    chi_squared_from_probability(degrees_of_freedom, max_iterations, resolution, draw(rng)?)
}

// ── Uniform ───────────────────────────────────────────────────────────────────

/// One Uniform variate on `[min, max)`.
pub fn sample_uniform<U: UniformSource + ?Sized>(
    min: Real,
    max: Real,
    rng: &mut U,
) -> Result<Real> {
    check_range(min, max)?;
    uniform_from_probability(min, max, draw(rng)?)
}

/// Threshold test: draw `u` and report whether `u >= threshold`.
///
/// With `threshold = 0.8` the test succeeds one time in five.
pub fn exceeds_threshold<U: UniformSource + ?Sized>(
    threshold: Probability,
    rng: &mut U,
) -> Result<bool> {
    ensure!(
        (0.0..=1.0).contains(&threshold),
        "threshold must be in [0, 1], got {threshold}"
    );
    Ok(draw(rng)? >= threshold)
}
