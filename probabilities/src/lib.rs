//! # probabilities
//!
//! Probability density functions, cumulative distribution functions, and
//! inverse-transform samplers for the Uniform, Normal, Exponential and
//! Chi-squared distributions.
//!
//! This crate is a **façade** that re-exports the public items of the
//! `prob-*` workspace crates.  Application code should depend on this crate
//! rather than on the individual crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! probabilities = "0.1"
//! ```
//!
//! ```rust
//! use probabilities::{Budget, MersenneTwisterUniformRng, Sampler};
//!
//! // densities and cumulative probabilities are plain functions
//! assert_eq!(probabilities::uniform_pdf(0.0, 2.0, 1.0).unwrap(), 0.5);
//! assert!(probabilities::gamma_half(9).is_err());
//!
//! // samplers draw from an injected uniform source
//! let mut sampler = Sampler::new(MersenneTwisterUniformRng::new(7), Budget::default()).unwrap();
//! let growth_rate = sampler.normal(0.2, 0.1).unwrap();
//! let critical = sampler.exceeds(0.5).unwrap();
//! # let _ = (growth_rate, critical);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, error definitions, and budgets.
pub use prob_core as core;

/// Quadrature, special functions, solvers, distributions, and samplers.
pub use prob_math as math;

pub use prob_core::{Budget, Error, Natural, Probability, Real, Result, Size};
pub use prob_math::{
    bisect, chi_squared_cdf, chi_squared_pdf, exceeds_threshold, exponential_cdf,
    exponential_pdf, factorial, gamma_half, integrate, invert, lower_incomplete_gamma,
    normal_cdf, normal_pdf, sample_chi_squared, sample_exponential, sample_normal,
    sample_uniform, uniform_cdf, uniform_pdf, Integrator, Inversion, MersenneTwisterUniformRng,
    MidpointIntegral, RandUniform, Sampler, UniformSource,
};
