//! Continuous uniform distribution on `[min, max]`.

use prob_core::{ensure, errors::Result, Probability, Real};

pub(crate) fn check_range(min: Real, max: Real) -> Result<()> {
    ensure!(
        min.is_finite() && max.is_finite(),
        "uniform: bounds must be finite, got [{min}, {max}]"
    );
    ensure!(max > min, "uniform: max ({max}) must be > min ({min})");
    Ok(())
}

/// Density `1/(max − min)` on the closed range `[min, max]`, 0 elsewhere.
pub fn uniform_pdf(min: Real, max: Real, value: Real) -> Result<Real> {
    check_range(min, max)?;
    if min <= value && value <= max {
        Ok(1.0 / (max - min))
    } else {
        Ok(0.0)
    }
}

/// `P(X ≤ value)`: 0 below `min`, 1 from `max` on, linear in between.
pub fn uniform_cdf(min: Real, max: Real, value: Real) -> Result<Real> {
    check_range(min, max)?;
    if value < min {
        Ok(0.0)
    } else if value >= max {
        Ok(1.0)
    } else {
        Ok((value - min) / (max - min))
    }
}

/// Inverse of [`uniform_cdf`]: the value whose cumulative probability is `u`.
pub fn uniform_from_probability(min: Real, max: Real, u: Probability) -> Result<Real> {
    check_range(min, max)?;
    ensure!(
        (0.0..=1.0).contains(&u),
        "uniform: probability must be in [0, 1], got {u}"
    );
    Ok(min + u * (max - min))
}
