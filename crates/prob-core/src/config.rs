//! Accuracy/cost budgets for the numerical routines.
//!
//! A [`Budget`] bundles the two knobs every integral-backed sampler needs:
//! the bisection iteration bound and the number of quadrature rectangles.
//! Nothing is tuned automatically; callers pick a budget explicitly and pass
//! it along.  With the `serde` feature enabled a budget can be read from the
//! caller's own configuration files.

use crate::{ensure, errors::Result, Size};

/// Iteration and resolution budget for inverse-transform sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Budget {
    max_iterations: Size,
    resolution: Size,
}

impl Budget {
    /// Coarse budget: 10 bisection rounds, 10 quadrature rectangles.
    pub const COARSE: Budget = Budget {
        max_iterations: 10,
        resolution: 10,
    };

    /// Create a budget, rejecting a zero iteration bound or resolution.
    pub fn new(max_iterations: Size, resolution: Size) -> Result<Self> {
        let budget = Self {
            max_iterations,
            resolution,
        };
        budget.validate()?;
        Ok(budget)
    }

    /// A budget accurate to roughly four decimal places for unit-scale
    /// distributions.
    pub fn precise() -> Self {
        Self {
            max_iterations: 40,
            resolution: 1_000,
        }
    }

    /// Maximum number of bisection rounds.
    pub fn max_iterations(&self) -> Size {
        self.max_iterations
    }

    /// Number of midpoint-rule rectangles per integral.
    pub fn resolution(&self) -> Size {
        self.resolution
    }

    /// Check the invariants.  Deserialized budgets bypass [`Budget::new`],
    /// so consumers call this before use.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.max_iterations >= 1,
            "max_iterations must be >= 1, got {}",
            self.max_iterations
        );
        ensure!(
            self.resolution >= 1,
            "resolution must be >= 1, got {}",
            self.resolution
        );
        Ok(())
    }
}

impl Default for Budget {
    fn default() -> Self {
        Self::COARSE
    }
}
