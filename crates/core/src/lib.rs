//! Core traits and types for the Riemann quadrature workspace.
//!
//! This crate defines the shared abstractions that the quadrature rules and
//! the report driver build on:
//!
//! - [`Integrand`] — a pure function of one real variable
//! - [`SineOfSquare`] — the integrand `f(x) = sin(x²)`
//! - [`Interval`] — validated integration bounds
//! - [`Partition`] — an interval split into equal-width subintervals

mod integrand;
mod interval;
mod partition;

pub use integrand::{Integrand, SineOfSquare};
pub use interval::{Interval, IntervalError};
pub use partition::{Partition, PartitionError};
