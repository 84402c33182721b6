use std::fmt;

/// A pure function of one real variable that can be integrated.
///
/// Integrands must be deterministic, always producing the same value for a
/// given `x`. Quadrature rules rely on this to produce repeatable results.
///
/// Any `Fn(f64) -> f64` closure is an integrand.
pub trait Integrand {
    /// Evaluates the integrand at `x`.
    fn eval(&self, x: f64) -> f64;
}

impl<F> Integrand for F
where
    F: Fn(f64) -> f64,
{
    fn eval(&self, x: f64) -> f64 {
        self(x)
    }
}

/// The integrand `f(x) = sin(x²)`.
///
/// Total over all reals. Displays as `sin(x^2)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SineOfSquare;

impl Integrand for SineOfSquare {
    fn eval(&self, x: f64) -> f64 {
        x.powi(2).sin()
    }
}

impl fmt::Display for SineOfSquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("sin(x^2)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    #[test]
    fn sine_of_square_matches_definition() {
        let f = SineOfSquare;

        assert_relative_eq!(f.eval(0.0), 0.0);
        assert_relative_eq!(f.eval((PI / 2.0).sqrt()), 1.0);
        assert_relative_eq!(f.eval(2.0), 4.0_f64.sin());
    }

    #[test]
    fn sine_of_square_is_even() {
        let f = SineOfSquare;

        for x in [0.3, 1.7, 3.9] {
            assert_eq!(f.eval(x).to_bits(), f.eval(-x).to_bits());
        }
    }

    #[test]
    fn closures_are_integrands() {
        let offset = 3.0;
        let f = |x: f64| x + offset;

        assert_relative_eq!(f.eval(1.5), 4.5);
    }

    #[test]
    fn sine_of_square_display() {
        assert_eq!(SineOfSquare.to_string(), "sin(x^2)");
    }
}
