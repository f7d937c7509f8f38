//! Numerical integration.
//!
//! Fixed-resolution midpoint rule: the interval is split into `resolution`
//! equal-width rectangles, each evaluated at its centre.  Accuracy is a
//! direct function of the resolution the caller chooses; nothing is
//! refined adaptively.

use prob_core::{ensure, errors::Result, Real, Size};

/// A numerical integrator.
pub trait Integrator {
    /// Integrate `f` on `[a, b]`.
    fn integrate<F: Fn(Real) -> Real>(&self, f: F, a: Real, b: Real) -> Result<Real>;
}

// ── Midpoint ──────────────────────────────────────────────────────────────────

/// Composite midpoint rule with a fixed number of equal-width rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MidpointIntegral {
    resolution: Size,
}

impl MidpointIntegral {
    /// Create a midpoint integrator using `resolution` rectangles.
    pub fn new(resolution: Size) -> Result<Self> {
        ensure!(
            resolution >= 1,
            "MidpointIntegral: resolution must be >= 1, got {resolution}"
        );
        Ok(Self { resolution })
    }

    /// Number of rectangles.
    pub fn resolution(&self) -> Size {
        self.resolution
    }
}

impl Integrator for MidpointIntegral {
    fn integrate<F: Fn(Real) -> Real>(&self, f: F, a: Real, b: Real) -> Result<Real> {
        let n = self.resolution;
        let h = (b - a) / n as Real;
        let mut sum = 0.0;
        for i in 0..n {
            sum += f(a + (i as Real + 0.5) * h);
        }
        Ok(sum * h)
    }
}

/// Approximate `∫ f` over `[start, end]` with `resolution` midpoint
/// rectangles.
///
/// `start > end` yields the negated integral.  A zero resolution is rejected
/// before `f` is evaluated.
pub fn integrate<F>(f: F, start: Real, end: Real, resolution: Size) -> Result<Real>
where
    F: Fn(Real) -> Real,
{
    MidpointIntegral::new(resolution)?.integrate(f, start, end)
}
