//! 1D inversion of monotone functions by bisection.
//!
//! The solver looks for `x` with `f(x) = target` on a bracket where `f` is
//! assumed non-decreasing.  Monotonicity is the caller's precondition and
//! is never checked; a non-monotone `f` produces a deterministic but
//! meaningless answer.  Running out of iterations is not an error: the last
//! midpoint is returned and flagged as inexact in the [`Inversion`] report.

use prob_core::{ensure, errors::Result, Real, Size};

/// Outcome of a bisection inversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inversion {
    /// The last midpoint evaluated.
    pub root: Real,
    /// Number of midpoints evaluated.
    pub iterations: Size,
    /// `true` if `f(root)` hit the target exactly; `false` when the
    /// iteration budget ran out first.
    pub exact: bool,
}

/// Bisection on `g(x) = f(x) − target` over `[low, high]`.
///
/// Each round evaluates `g` at the bracket midpoint: a positive value moves
/// the upper bound down, a negative value moves the lower bound up, and an
/// exact zero returns immediately.  `f` may fail, in which case its error is
/// returned unchanged.
pub fn bisect<F>(
    mut f: F,
    target: Real,
    low: Real,
    high: Real,
    max_iterations: Size,
) -> Result<Inversion>
where
    F: FnMut(Real) -> Result<Real>,
{
    ensure!(
        max_iterations >= 1,
        "bisect: max_iterations must be >= 1, got {max_iterations}"
    );
    ensure!(
        low.is_finite() && high.is_finite(),
        "bisect: bracket bounds must be finite, got [{low}, {high}]"
    );
    ensure!(low < high, "bisect: low ({low}) must be < high ({high})");
    ensure!(!target.is_nan(), "bisect: target must not be NaN");

    let mut a = low;
    let mut b = high;
    let mut mid = 0.5 * (a + b);

    for i in 0..max_iterations {
        mid = 0.5 * (a + b);
        let g = f(mid)? - target;
        if g > 0.0 {
            b = mid;
        } else if g < 0.0 {
            a = mid;
        } else if g == 0.0 {
            return Ok(Inversion {
                root: mid,
                iterations: i + 1,
                exact: true,
            });
        }
    }

    tracing::trace!(
        root = mid,
        iterations = max_iterations,
        "bisection budget exhausted"
    );
    Ok(Inversion {
        root: mid,
        iterations: max_iterations,
        exact: false,
    })
}

/// Find `x` in `[low, high]` with `f(x) ≈ target` for a non-decreasing,
/// infallible `f`.
///
/// Convenience form of [`bisect`] returning only the root.
pub fn invert<F>(
    mut f: F,
    target: Real,
    low: Real,
    high: Real,
    max_iterations: Size,
) -> Result<Real>
where
    F: FnMut(Real) -> Real,
{
    bisect(|x| Ok(f(x)), target, low, high, max_iterations).map(|inv| inv.root)
}
