//! Exponential distribution with rate `λ`.

use prob_core::{ensure, errors::Result, Probability, Real};

pub(crate) fn check_rate(rate: Real) -> Result<()> {
    ensure!(
        rate > 0.0 && rate.is_finite(),
        "exponential: rate must be positive and finite, got {rate}"
    );
    Ok(())
}

/// `λ·e^(−λx)` for `x ≥ 0`, 0 for negative `x`.
pub fn exponential_pdf(rate: Real, value: Real) -> Result<Real> {
    check_rate(rate)?;
    if value < 0.0 {
        return Ok(0.0);
    }
    Ok(rate * (-rate * value).exp())
}

/// `1 − e^(−λx)` for `x ≥ 0`, 0 for negative `x`.
pub fn exponential_cdf(rate: Real, value: Real) -> Result<Real> {
    check_rate(rate)?;
    if value <= 0.0 {
        return Ok(0.0);
    }
    Ok(-(-rate * value).exp_m1())
}

/// Closed-form inverse of [`exponential_cdf`]: `−ln(1 − u)/λ`.
pub fn exponential_from_probability(rate: Real, u: Probability) -> Result<Real> {
    check_rate(rate)?;
    ensure!(
        (0.0..1.0).contains(&u),
        "exponential: probability must be in [0, 1), got {u}"
    );
    Ok(-(-u).ln_1p() / rate)
}
