//! Special functions: factorial, Γ(k/2), and the lower incomplete Gamma
//! function.
//!
//! Γ is only evaluated at half-integers.  Even `k` reduce to a factorial;
//! odd `k ≤ 7` use the exact identity `Γ(n + ½) = c·√π` with a four-entry
//! coefficient table.  Every other `k` is rejected.

use prob_core::{ensure, errors::Result, reject, Natural, Real, Size};
use std::f64::consts::PI;

use crate::integrals::integrate;

/// Coefficients `c` in `Γ(k/2) = c·√π` for `k = 1, 3, 5, 7`.
const ODD_HALF_GAMMA: [Real; 4] = [1.0, 0.5, 0.75, 1.875];

/// Largest `n` with a finite `n!` in `f64`.
const MAX_FACTORIAL: Natural = 170;

/// `n!` as a floating-point value.
///
/// `0! = 1! = 1`.  Fails once the product no longer fits in an `f64`
/// (`n > 170`), without evaluating it.
pub fn factorial(n: Natural) -> Result<Real> {
    if n > MAX_FACTORIAL {
        tracing::debug!(n, "factorial overflows f64");
        reject!("factorial({n}) overflows a 64-bit float");
    }
    Ok((2..=n).fold(1.0, |acc: Real, i| acc * Real::from(i)))
}

/// Γ(k/2) for a positive integer `k`.
///
/// Supported inputs are every even `k ≥ 2` (up to the factorial overflow
/// limit) and the odd values 1, 3, 5 and 7.
pub fn gamma_half(k: Natural) -> Result<Real> {
    if k % 2 == 0 {
        ensure!(k >= 2, "gamma_half: k must be positive, got {k}");
        return factorial(k / 2 - 1);
    }
    match ODD_HALF_GAMMA.get(((k - 1) / 2) as usize) {
        Some(c) => Ok(c * PI.sqrt()),
        None => {
            tracing::debug!(k, "unsupported gamma_half argument");
            reject!("gamma_half: odd k must be one of 1, 3, 5, 7, got {k}")
        }
    }
}

/// Lower incomplete Gamma function `γ(s, x) = ∫₀ˣ t^(s−1) e^(−t) dt`,
/// integrated with `resolution` midpoint rectangles.
///
/// Returns 0 for `x ≤ 0`.  `x = +∞` is rejected: the integral over an
/// unbounded range cannot be approximated with a fixed partition.
pub fn lower_incomplete_gamma(s: Real, x: Real, resolution: Size) -> Result<Real> {
    ensure!(
        s > 0.0 && s.is_finite(),
        "lower_incomplete_gamma: s must be positive and finite, got {s}"
    );
    ensure!(
        !x.is_nan() && x != Real::INFINITY,
        "lower_incomplete_gamma: x must be a number below +inf, got {x}"
    );
    ensure!(
        resolution >= 1,
        "lower_incomplete_gamma: resolution must be >= 1, got {resolution}"
    );
    if x <= 0.0 {
        return Ok(0.0);
    }
    let exponent = s - 1.0;
    integrate(|t| t.powf(exponent) * (-t).exp(), 0.0, x, resolution)
}
