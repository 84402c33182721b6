use thiserror::Error;

/// Closed integration bounds `[start, end]`.
///
/// Both bounds are finite and `start <= end`. A zero-width interval is valid
/// and integrates to zero under every rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    start: f64,
    end: f64,
}

/// Errors that can occur when constructing an [`Interval`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum IntervalError {
    #[error("interval bound is not finite: {value}")]
    NonFinite { value: f64 },

    #[error("interval is reversed: start {start} is greater than end {end}")]
    Reversed { start: f64, end: f64 },
}

impl Interval {
    /// Creates an interval from its lower and upper bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if either bound is NaN or infinite, or if
    /// `start > end`.
    pub fn new(start: f64, end: f64) -> Result<Self, IntervalError> {
        for value in [start, end] {
            if !value.is_finite() {
                return Err(IntervalError::NonFinite { value });
            }
        }
        if start > end {
            return Err(IntervalError::Reversed { start, end });
        }

        Ok(Self { start, end })
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Returns `end - start`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}
