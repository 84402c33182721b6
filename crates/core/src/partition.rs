use thiserror::Error;

use crate::Interval;

/// An [`Interval`] split into `count` subintervals of equal width.
///
/// Nodes are numbered `0..=count`, with node `0` at the interval start.
/// Subintervals are numbered `0..count`, with subinterval `i` spanning
/// `[node(i), node(i + 1)]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Partition {
    interval: Interval,
    count: usize,
    width: f64,
}

/// Errors that can occur when partitioning an interval.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PartitionError {
    #[error("subdivision count must be at least 1")]
    ZeroSubdivisions,
}

impl Partition {
    /// Splits `interval` into `count` equal subintervals.
    ///
    /// # Errors
    ///
    /// Returns [`PartitionError::ZeroSubdivisions`] if `count` is zero.
    #[allow(clippy::cast_precision_loss)]
    pub fn new(interval: Interval, count: usize) -> Result<Self, PartitionError> {
        if count == 0 {
            return Err(PartitionError::ZeroSubdivisions);
        }

        Ok(Self {
            interval,
            count,
            width: interval.width() / count as f64,
        })
    }

    /// Returns the partitioned interval.
    #[must_use]
    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// Returns the number of subintervals.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the width of each subinterval.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the position of node `i`, `start + i·width`.
    ///
    /// Node `count` is computed the same way and may differ from the interval
    /// end by rounding. Callers that need the exact end use [`Interval::end`].
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn node(&self, i: usize) -> f64 {
        self.interval.start() + i as f64 * self.width
    }

    /// Returns the center of subinterval `i`, `start + (i + ½)·width`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn midpoint(&self, i: usize) -> f64 {
        self.interval.start() + (i as f64 + 0.5) * self.width
    }
}
