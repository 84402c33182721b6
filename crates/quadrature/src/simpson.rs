//! Composite Simpson's rule.
//!
//! ```text
//! ∫ f dx ≈ dx/3 · [ f(a) + f(b) + 4·Σ f(x_odd) + 2·Σ f(x_even) ]
//! ```
//!
//! Fits a parabola through each pair of adjacent subintervals, so the
//! subdivision count must be even. Exact for cubics. Error is `O(dx⁴)` for
//! smooth integrands.

use log::{debug, trace};
use riemann_core::{Integrand, Interval, Partition};

use crate::Error;

/// Approximates the integral of `f` over `interval` using `n` subintervals.
///
/// # Errors
///
/// Returns [`Error::OddSubdivisions`] if `n` is odd, or a partition error if
/// `n` is zero.
pub fn integrate<F>(f: &F, interval: Interval, n: usize) -> Result<f64, Error>
where
    F: Integrand + ?Sized,
{
    let partition = Partition::new(interval, n)?;
    if n % 2 != 0 {
        return Err(Error::OddSubdivisions { n });
    }
    debug!("simpson's rule: n = {n}, dx = {}", partition.width());

    let ends = f.eval(interval.start()) + f.eval(interval.end());
    let total = (1..n)
        .step_by(2)
        .fold(ends, |total, i| total + 4.0 * f.eval(partition.node(i)));
    let total = (2..n)
        .step_by(2)
        .fold(total, |total, i| total + 2.0 * f.eval(partition.node(i)));
    let value = total * partition.width() / 3.0;

    trace!("simpson's rule: n = {n}, value = {value}");
    Ok(value)
}
