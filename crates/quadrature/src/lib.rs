//! Fixed-step quadrature rules for definite integrals of one variable.
//!
//! Each rule partitions an [`Interval`] into `n` equal subintervals, samples an
//! [`Integrand`] at rule-specific points, and returns a weighted sum of those
//! samples.
//!
//! # Rules
//!
//! - [`midpoint`] — one sample at the center of each subinterval
//! - [`trapezoid`] — linear interpolation between adjacent nodes
//! - [`simpson`] — piecewise-quadratic interpolation, requires even `n`
//!
//! The [`Rule`] enum selects among them at runtime.
//!
//! # Errors
//!
//! Every rule rejects `n == 0`. Simpson's rule also rejects odd `n` with
//! [`Error::OddSubdivisions`], which callers are expected to handle (see
//! [`Error::is_recoverable`]).
//!
//! [`Interval`]: riemann_core::Interval
//! [`Integrand`]: riemann_core::Integrand

mod error;
mod rule;


pub mod midpoint;
pub mod simpson;
pub mod trapezoid;

pub use error::Error;
pub use rule::Rule;

use riemann_core::{Integrand, Interval};

/// Approximates the integral of `f` over `interval` with the given rule.
///
/// This is a convenience wrapper around [`Rule::integrate`].
///
/// # Errors
///
/// Returns an error if `n` is not a valid subdivision count for `rule`.
pub fn integrate<F>(rule: Rule, f: &F, interval: Interval, n: usize) -> Result<f64, Error>
where
    F: Integrand + ?Sized,
{
    rule.integrate(f, interval, n)
}
