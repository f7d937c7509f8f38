//! Chi-squared distribution with an integer number of degrees of freedom.
//!
//! Both functions lean on [`gamma_half`], so the supported degrees of
//! freedom are the ones it supports: every even value, and 1, 3, 5, 7.
//! The CDF is `γ(k/2, x/2) / Γ(k/2)` with the lower incomplete Gamma
//! integrated numerically.

use prob_core::{ensure, errors::Result, Natural, Real, Size};
use std::f64::consts::LN_2;

use crate::special::{gamma_half, lower_incomplete_gamma};

/// Validate `df` and return `Γ(df/2)`.
pub(crate) fn normaliser(degrees_of_freedom: Natural) -> Result<Real> {
    ensure!(
        degrees_of_freedom >= 1,
        "chi-squared: degrees of freedom must be >= 1, got {degrees_of_freedom}"
    );
    gamma_half(degrees_of_freedom)
}

/// `x^(k/2 − 1) e^(−x/2) / (2^(k/2) Γ(k/2))` for `0 < x < ∞`, 0 otherwise.
pub fn chi_squared_pdf(degrees_of_freedom: Natural, value: Real) -> Result<Real> {
    let gamma = normaliser(degrees_of_freedom)?;
    ensure!(!value.is_nan(), "chi-squared: value must not be NaN");
    if value <= 0.0 || value == Real::INFINITY {
        return Ok(0.0);
    }
    let half_k = Real::from(degrees_of_freedom) / 2.0;
    // log space keeps x^(k/2 − 1) from overflowing before e^(−x/2) damps it
    let log_kernel = (half_k - 1.0) * value.ln() - value / 2.0 - half_k * LN_2;
    Ok(log_kernel.exp() / gamma)
}

/// `P(X ≤ value)`, integrating the lower incomplete Gamma function with
/// `resolution` midpoint rectangles.  `value = +∞` gives exactly 1.
pub fn chi_squared_cdf(
    degrees_of_freedom: Natural,
    value: Real,
    resolution: Size,
) -> Result<Real> {
    let gamma = normaliser(degrees_of_freedom)?;
    ensure!(
        resolution >= 1,
        "chi-squared: resolution must be >= 1, got {resolution}"
    );
    if value == Real::INFINITY {
        return Ok(1.0);
    }
    let half_k = Real::from(degrees_of_freedom) / 2.0;
    let lower = lower_incomplete_gamma(half_k, value / 2.0, resolution)?;
    Ok(lower / gamma)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn pdf_two_degrees() {
        // For df=2, pdf(x) = 0.5 * e^(-x/2)
        let x: Real = 3.0;
        assert_relative_eq!(
            chi_squared_pdf(2, x).unwrap(),
            0.5 * (-x / 2.0).exp(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn pdf_non_positive_is_zero() {
        assert_eq!(chi_squared_pdf(3, 0.0).unwrap(), 0.0);
        assert_eq!(chi_squared_pdf(4, -2.0).unwrap(), 0.0);
    }

    #[test]
    fn cdf_two_degrees() {
        // For df=2, CDF(x) = 1 - e^(-x/2)
        let x: Real = 4.0;
        let expected = 1.0 - (-x / 2.0).exp();
        assert_relative_eq!(chi_squared_cdf(2, x, 2_000).unwrap(), expected, epsilon = 1e-6);
    }

    #[test]
    fn cdf_at_zero() {
        for df in [1, 2, 3, 4, 5, 6, 7, 8, 10] {
            assert_eq!(chi_squared_cdf(df, 0.0, 50).unwrap(), 0.0);
        }
    }

    #[test]
    fn infinite_values_have_limits() {
        for df in [1, 2, 3, 4, 12] {
            assert_eq!(chi_squared_pdf(df, Real::INFINITY).unwrap(), 0.0);
            assert_eq!(chi_squared_pdf(df, Real::NEG_INFINITY).unwrap(), 0.0);
            assert_eq!(chi_squared_cdf(df, Real::INFINITY, 100).unwrap(), 1.0);
            assert_eq!(chi_squared_cdf(df, Real::NEG_INFINITY, 100).unwrap(), 0.0);
        }
        // large finite values stay finite instead of ∞ · 0
        assert_eq!(chi_squared_pdf(12, 1e300).unwrap(), 0.0);
        assert!(chi_squared_pdf(4, Real::NAN).is_err());
        assert!(chi_squared_cdf(4, Real::NAN, 100).is_err());
        assert!(chi_squared_cdf(4, Real::INFINITY, 0).is_err());
    }

    #[test]
    fn unsupported_degrees_rejected() {
        assert!(chi_squared_pdf(0, 1.0).is_err());
        assert!(chi_squared_pdf(9, 1.0).is_err());
        // the value short-circuit does not hide an unsupported df
        assert!(chi_squared_pdf(9, -1.0).is_err());
        assert!(chi_squared_cdf(11, 1.0, 100).is_err());
        assert!(chi_squared_cdf(4, 1.0, 0).is_err());
    }
}
