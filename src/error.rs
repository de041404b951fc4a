use core::fmt;

/// Result alias for `stepviz`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by engine constructors.
///
/// Running engines never error: exhausted pools, inert inputs, and already
/// converged runs are all expressed through `is_finished` and no-op steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Start point index is outside the supplied point list.
    InvalidStart {
        /// Requested index.
        index: usize,
        /// Number of points supplied.
        n_points: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidStart { index, n_points } => {
                write!(f, "start index {index} out of range for {n_points} points")
            }
        }
    }
}

impl std::error::Error for Error {}
