//! Composite midpoint rule.
//!
//! ```text
//! ∫ f dx ≈ dx · Σ f(a + (i + ½)·dx),  i = 0..n
//! ```
//!
//! Exact for linear integrands. Error is `O(dx²)` for smooth integrands.

use log::{debug, trace};
use riemann_core::{Integrand, Interval, Partition};

use crate::Error;

/// Approximates the integral of `f` over `interval` using `n` subintervals.
///
/// # Errors
///
/// Returns an error if `n` is zero.
pub fn integrate<F>(f: &F, interval: Interval, n: usize) -> Result<f64, Error>
where
    F: Integrand + ?Sized,
{
    let partition = Partition::new(interval, n)?;
    debug!("midpoint rule: n = {n}, dx = {}", partition.width());

    let total = (0..n).fold(0.0, |total, i| total + f.eval(partition.midpoint(i)));
    let value = total * partition.width();

    trace!("midpoint rule: n = {n}, value = {value}");
    Ok(value)
}
