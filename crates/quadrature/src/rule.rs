use std::fmt;

use riemann_core::{Integrand, Interval};

use crate::{Error, midpoint, simpson, trapezoid};

/// Selects a quadrature rule at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Midpoint,
    Trapezoid,
    Simpson,
}

impl Rule {
    /// All rules, in report order.
    pub const ALL: [Rule; 3] = [Rule::Midpoint, Rule::Trapezoid, Rule::Simpson];

    /// Returns the human-readable name of the rule.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Rule::Midpoint => "Midpoint Rule",
            Rule::Trapezoid => "Trapezoid Rule",
            Rule::Simpson => "Simpson's Rule",
        }
    }

    /// Approximates the integral of `f` over `interval` using `n` subintervals.
    ///
    /// # Errors
    ///
    /// Returns an error if `n` is zero, or if `n` is odd and the rule is
    /// [`Rule::Simpson`].
    pub fn integrate<F>(self, f: &F, interval: Interval, n: usize) -> Result<f64, Error>
    where
        F: Integrand + ?Sized,
    {
        match self {
            Rule::Midpoint => midpoint::integrate(f, interval, n),
            Rule::Trapezoid => trapezoid::integrate(f, interval, n),
            Rule::Simpson => simpson::integrate(f, interval, n),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
