//! Error types for tour construction.

use thiserror::Error;

/// Errors raised by a depth-limited [`Explorer`](crate::Explorer).
///
/// The unbounded traversal has no error cases; it simply does not return on
/// inputs with coincident points.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TourError {
    #[error("subdivision exceeded the maximum depth of {max_depth} with {points} points still unresolved")]
    DepthExceeded { max_depth: usize, points: usize },
}

pub type TourResult<T> = Result<T, TourError>;
