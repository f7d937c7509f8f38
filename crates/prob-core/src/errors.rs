//! Error types for the probabilities workspace.
//!
//! Every fallible operation reports invalid input through a single
//! `thiserror`-derived enum.  The [`ensure!`](crate::ensure) macro is the
//! shorthand used at the top of each public function to check its
//! parameters before any computation happens.

use thiserror::Error;

/// The top-level error type used throughout the workspace.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A parameter is outside the domain the operation supports: a zero
    /// resolution or iteration bound, a degenerate range, a non-positive
    /// scale, a non-finite input, or an unsupported Gamma argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout the workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use prob_core::{ensure, errors::Error};
/// fn positive(x: f64) -> prob_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert_eq!(
///     positive(-1.0),
///     Err(Error::InvalidArgument("x must be positive, got -1".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::InvalidArgument(...))` immediately.
///
/// # Example
/// ```
/// use prob_core::{reject, errors::Error};
/// fn always_err() -> prob_core::errors::Result<()> {
///     reject!("k = {} is not supported", 9);
/// }
/// assert!(matches!(always_err(), Err(Error::InvalidArgument(_))));
/// ```
#[macro_export]
macro_rules! reject {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::InvalidArgument(format!($($msg)*)))
    };
}
