//! Composite trapezoid rule.
//!
//! ```text
//! ∫ f dx ≈ dx · [ (f(a) + f(b)) / 2 + Σ f(a + i·dx) ],  i = 1..n
//! ```
//!
//! Exact for linear integrands. Error is `O(dx²)` for smooth integrands,
//! with roughly twice the magnitude and opposite sign of the midpoint rule.

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
    debug!("trapezoid rule: n = {n}, dx = {}", partition.width());

    let ends = (f.eval(interval.start()) + f.eval(interval.end())) / 2.0;
    let total = (1..n).fold(ends, |total, i| total + f.eval(partition.node(i)));
    let value = total * partition.width();

    trace!("trapezoid rule: n = {n}, value = {value}");
    Ok(value)
}
