use riemann_core::PartitionError;

/// Errors that can occur when applying a quadrature rule.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Partition(#[from] PartitionError),

    #[error("n must be even for Simpson's Rule.")]
    OddSubdivisions { n: usize },
}

impl Error {
    /// Returns `true` if the caller is expected to handle this error and
    /// continue, rather than abort.
    ///
    /// Only [`Error::OddSubdivisions`] is recoverable.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::OddSubdivisions { .. })
    }
}
