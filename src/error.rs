//! Error type shared by every component.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TspError>;

/// Errors raised while building or running an optimization.
///
/// Configuration and sampling problems are detected when the engine is
/// constructed, so a run that starts never fails for those reasons.
/// [`TspError::CorruptedPopulation`] is the only error that can surface
/// mid-run and signals a broken operator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TspError {
    /// A [`GaConfig`](crate::ga::GaConfig) parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The distance matrix is not square or holds a negative / non-finite cost.
    #[error("invalid distance matrix: {0}")]
    InvalidMatrix(String),

    /// More distinct items were requested than the pool holds.
    #[error("cannot sample {requested} distinct items from a pool of {available}")]
    Sampling { requested: usize, available: usize },

    /// A tour of total length zero has no finite fitness.
    #[error("zero-length tour has undefined fitness")]
    DegenerateTour,

    /// A sequence is not a permutation of `0..len`.
    #[error("route of length {len} is not a permutation: {reason}")]
    InvalidRoute { len: usize, reason: String },

    /// An operator produced an invalid route; the run is aborted.
    #[error("generation {generation}: slot {slot} holds a corrupted route")]
    CorruptedPopulation { generation: usize, slot: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = TspError::Sampling {
            requested: 5,
            available: 3,
        };
        assert_eq!(
            err.to_string(),
            "cannot sample 5 distinct items from a pool of 3"
        );

        let err = TspError::InvalidConfig("population_size must be even".into());
        assert_eq!(
            err.to_string(),
            "invalid configuration: population_size must be even"
        );

        let err = TspError::CorruptedPopulation {
            generation: 7,
            slot: 2,
        };
        assert_eq!(err.to_string(), "generation 7: slot 2 holds a corrupted route");
    }
}
