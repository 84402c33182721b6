use riemann_quadrature::Rule;

use crate::ConfigError;

/// Errors that can occur while building or writing a report.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid config")]
    Config(#[from] ConfigError),

    #[error("{rule} failed for n = {n}")]
    Quadrature {
        rule: Rule,
        n: usize,
        #[source]
        source: riemann_quadrature::Error,
    },

    #[error("failed to write report")]
    Io(#[from] std::io::Error),
}
