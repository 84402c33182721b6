//! Side-by-side comparison of quadrature rules.
//!
//! A [`Report`] applies every [`Rule`] to one integrand over one interval, for
//! each subdivision count in a [`Config`], and renders the results as text:
//!
//! ```text
//! Numerical Integration Results for ∫[0,4] sin(x^2) dx:
//! ------------------------------------------------------------
//! n = 10
//!   Midpoint Rule: 0.819799
//!   Trapezoid Rule: 0.620999
//!   Simpson's Rule: 0.887978
//! ------------------------------------------------------------
//! ```
//!
//! Recoverable rule failures, such as Simpson's rule with an odd count, are
//! rendered in place of the value. All other failures abort the report.
//!
//! [`Rule`]: riemann_quadrature::Rule

mod config;
mod error;
mod report;

pub use config::{Config, ConfigError};
pub use error::Error;
pub use report::{Block, Entry, Report};
