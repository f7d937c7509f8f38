//! # prob-core
//!
//! Core types, error definitions, and configuration shared by the
//! probabilities workspace: the numeric type aliases, the `thiserror`-based
//! error enum with its `ensure!` / `reject!` macros, and the sampling
//! [`Budget`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Sampling budgets (iteration bound and quadrature resolution).
pub mod config;

/// Error types and the `ensure!` / `reject!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Non-negative integer type (degrees of freedom, Gamma arguments).
pub type Natural = u32;

/// Alias used for counts: resolutions and iteration bounds.
pub type Size = usize;

/// A probability in [0, 1].
pub type Probability = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use config::Budget;
pub use errors::{Error, Result};
