use riemann_core::{Interval, IntervalError};
use thiserror::Error;

/// Bounds and subdivision counts for a report.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    interval: Interval,
    counts: Vec<usize>,
}

/// Errors that can occur when validating a report config.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid bounds")]
    Interval(#[from] IntervalError),

    #[error("at least one subdivision count is required")]
    NoCounts,

    #[error("subdivision count at index {index} is zero")]
    ZeroCount { index: usize },
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(0.0, 4.0, vec![10, 100, 1000]).unwrap()
    }
}

impl Config {
    /// Creates a new config with validated bounds and counts.
    ///
    /// Counts are reported in the order given.
    ///
    /// # Errors
    ///
    /// Returns an error if the bounds do not form a valid [`Interval`], if
    /// `counts` is empty, or if any count is zero.
    pub fn new(start: f64, end: f64, counts: Vec<usize>) -> Result<Self, ConfigError> {
        let interval = Interval::new(start, end)?;

        if counts.is_empty() {
            return Err(ConfigError::NoCounts);
        }
        if let Some(index) = counts.iter().position(|&n| n == 0) {
            return Err(ConfigError::ZeroCount { index });
        }

        Ok(Self { interval, counts })
    }

    /// Returns the integration bounds.
    #[must_use]
    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// Returns the subdivision counts, in report order.
    #[must_use]
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn default_config() {
        let config = Config::default();

        assert_relative_eq!(config.interval().start(), 0.0);
        assert_relative_eq!(config.interval().end(), 4.0);
        assert_eq!(config.counts(), [10, 100, 1000]);
    }

    #[test]
    fn keeps_count_order() {
        let config = Config::new(-1.0, 1.0, vec![7, 2, 50]).unwrap();

        assert_eq!(config.counts(), [7, 2, 50]);
    }

    #[test]
    fn rejects_reversed_bounds() {
        assert!(matches!(
            Config::new(4.0, 0.0, vec![10]),
            Err(ConfigError::Interval(IntervalError::Reversed { .. }))
        ));
    }

    #[test]
    fn rejects_missing_counts() {
        assert_eq!(Config::new(0.0, 1.0, vec![]), Err(ConfigError::NoCounts));
    }

    #[test]
    fn rejects_zero_count() {
        assert_eq!(
            Config::new(0.0, 1.0, vec![10, 0, 5]),
            Err(ConfigError::ZeroCount { index: 1 })
        );
    }
}
