//! Domain error types.
//!
//! These errors represent validation failures when building network
//! features. They are distinct from API/IO errors.

use super::{InvalidPoint, TransportMode, UnknownMode};

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// A coordinate was out of range or not finite
    #[error(transparent)]
    InvalidPoint(#[from] InvalidPoint),

    /// A mode or stop tag was not recognised
    #[error(transparent)]
    UnknownMode(#[from] UnknownMode),

    /// A line needs at least two vertices
    #[error("line geometry must have at least 2 points, got {0}")]
    TooFewPoints(usize),

    /// Lines and stops must belong to a transit mode
    #[error("{0} is not a transit mode")]
    NotTransit(TransportMode),

    /// Stops are looked up by name, so a name is required
    #[error("stop name must not be empty")]
    EmptyStopName,

    /// Itinerary has no segments
    #[error("itinerary must have at least one segment")]
    EmptyItinerary,
}
