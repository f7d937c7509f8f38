//! Probability distributions.
//!
//! Uniform, Normal, Exponential and Chi-squared densities and cumulative
//! distribution functions.  Every function validates its own parameters at
//! call time and reports violations as [`prob_core::Error::InvalidArgument`].

pub mod chi_square;
pub mod exponential;
pub mod normal;
pub mod uniform;

pub use chi_square::{chi_squared_cdf, chi_squared_pdf};
pub use exponential::{exponential_cdf, exponential_pdf};
pub use normal::{normal_cdf, normal_pdf};
pub use uniform::{uniform_cdf, uniform_pdf};
