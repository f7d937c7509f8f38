//! # prob-math
//!
//! The numerical core: midpoint quadrature, Γ(k/2) evaluation, bisection
//! inversion, and the PDF/CDF/sampling functions for the Uniform, Normal,
//! Exponential and Chi-squared distributions built on them.
//!
//! Every operation is a pure, synchronous computation.  Randomness only
//! enters through the [`UniformSource`](random_numbers::UniformSource) a
//! caller passes to a sampler.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Probability distributions.
pub mod distributions;

/// Midpoint-rule numerical integration.
pub mod integrals;

/// Uniform random sources.
pub mod random_numbers;

/// Inverse-transform variate samplers.
pub mod sampling;

/// 1D bisection inversion.
pub mod solvers1d;

/// Factorial, Γ(k/2), and the lower incomplete Gamma function.
pub mod special;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use distributions::{
    chi_squared_cdf, chi_squared_pdf, exponential_cdf, exponential_pdf, normal_cdf, normal_pdf,
    uniform_cdf, uniform_pdf,
};
pub use integrals::{integrate, Integrator, MidpointIntegral};
pub use random_numbers::{MersenneTwisterUniformRng, RandUniform, UniformSource};
pub use sampling::{
    exceeds_threshold, sample_chi_squared, sample_exponential, sample_normal, sample_uniform,
    Sampler,
};
pub use solvers1d::{bisect, invert, Inversion};
pub use special::{factorial, gamma_half, lower_incomplete_gamma};
