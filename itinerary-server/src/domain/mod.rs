//! Domain types for the itinerary planner.
//!
//! This module contains the core domain model types that represent
//! validated network and itinerary data. All types enforce their
//! invariants at construction time, so code that receives these types
//! can trust their validity.

mod error;
mod itinerary;
mod mode;
mod network;
mod point;

pub use error::DomainError;
pub use itinerary::{Itinerary, Segment};
pub use mode::{StopKind, TransportMode, UnknownMode};
pub use network::{Feature, LineFeature, StopFeature, TransitNetwork};
pub use point::{InvalidPoint, Point};
