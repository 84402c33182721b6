use std::fmt;

use log::{info, warn};
use riemann_core::{Integrand, Interval};
use riemann_quadrature::Rule;

use crate::{Config, Error};

/// Width of the dashed separator line.
const SEPARATOR_WIDTH: usize = 60;

/// The results of every rule for every subdivision count in a [`Config`].
///
/// Rendered with [`fmt::Display`].
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Description of the integrand, such as `sin(x^2)`.
    pub integrand: String,

    /// Integration bounds.
    pub interval: Interval,

    /// One block per subdivision count, in config order.
    pub blocks: Vec<Block>,
}

/// The results of every rule for one subdivision count.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub n: usize,

    /// One entry per rule, in [`Rule::ALL`] order.
    pub entries: Vec<Entry>,
}

/// The outcome of one rule for one subdivision count.
///
/// `outcome` only ever holds recoverable errors. See
/// [`riemann_quadrature::Error::is_recoverable`].
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub rule: Rule,
    pub outcome: Result<f64, riemann_quadrature::Error>,
}

impl Report {
    /// Applies every rule to `integrand` for each count in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Quadrature`] if a rule fails with an error that is not
    /// recoverable. Recoverable errors are stored in the matching [`Entry`].
    pub fn compute<F>(integrand: &F, config: &Config) -> Result<Self, Error>
    where
        F: Integrand + fmt::Display + ?Sized,
    {
        let interval = config.interval();
        info!(
            "computing report for {integrand} over [{}, {}] with counts {:?}",
            interval.start(),
            interval.end(),
            config.counts()
        );

        let blocks = config
            .counts()
            .iter()
            .map(|&n| compute_block(integrand, interval, n))
            .collect::<Result<_, _>>()?;

        Ok(Self {
            integrand: integrand.to_string(),
            interval,
            blocks,
        })
    }
}

fn compute_block<F>(integrand: &F, interval: Interval, n: usize) -> Result<Block, Error>
where
    F: Integrand + ?Sized,
{
    let entries = Rule::ALL
        .into_iter()
        .map(|rule| match rule.integrate(integrand, interval, n) {
            Ok(value) => Ok(Entry {
                rule,
                outcome: Ok(value),
            }),
            Err(source) if source.is_recoverable() => {
                warn!("{rule} skipped for n = {n}: {source}");
                Ok(Entry {
                    rule,
                    outcome: Err(source),
                })
            }
            Err(source) => Err(Error::Quadrature { rule, n, source }),
        })
        .collect::<Result<_, _>>()?;

    Ok(Block { n, entries })
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = "-".repeat(SEPARATOR_WIDTH);

        writeln!(
            f,
            "Numerical Integration Results for ∫[{},{}] {} dx:",
            self.interval.start(),
            self.interval.end(),
            self.integrand
        )?;
        writeln!(f, "{separator}")?;

        for block in &self.blocks {
            write!(f, "{block}")?;
            writeln!(f, "{separator}")?;
        }

        Ok(())
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "n = {}", self.n)?;
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Ok(value) => write!(f, "  {}: {value:.6}", self.rule),
            Err(err) => write!(f, "  {}: {err}", self.rule),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use riemann_core::SineOfSquare;

    #[test]
    fn entry_formats_six_decimals() {
        let entry = Entry {
            rule: Rule::Midpoint,
            outcome: Ok(0.819_799_272_034_444_5),
        };

        assert_eq!(entry.to_string(), "  Midpoint Rule: 0.819799");
    }

    #[test]
    fn entry_formats_recoverable_error() {
        let entry = Entry {
            rule: Rule::Simpson,
            outcome: Err(riemann_quadrature::Error::OddSubdivisions { n: 5 }),
        };

        assert_eq!(
            entry.to_string(),
            "  Simpson's Rule: n must be even for Simpson's Rule."
        );
    }

    #[test]
    fn odd_count_is_caught_for_simpson_only() {
        let config = Config::new(0.0, 4.0, vec![11]).unwrap();

        let report = Report::compute(&SineOfSquare, &config).unwrap();
        let outcomes: Vec<_> = report.blocks[0]
            .entries
            .iter()
            .map(|entry| (entry.rule, entry.outcome.is_ok()))
            .collect();

        assert_eq!(
            outcomes,
            [
                (Rule::Midpoint, true),
                (Rule::Trapezoid, true),
                (Rule::Simpson, false)
            ]
        );
    }

    #[test]
    fn bounds_render_without_trailing_zeros() {
        let config = Config::new(0.5, 2.0, vec![2]).unwrap();
        let report = Report::compute(&SineOfSquare, &config).unwrap();

        let header = report.to_string().lines().next().unwrap().to_owned();

        assert_eq!(
            header,
            "Numerical Integration Results for ∫[0.5,2] sin(x^2) dx:"
        );
    }
}
