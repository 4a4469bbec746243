//! Route-calculation service client.
//!
//! This module provides an HTTP client for an OpenRouteService-compatible
//! directions API, which supplies the walking connectors between origin,
//! stops and destination, and the driving route the planner falls back to.
//!
//! Key characteristics of the service:
//! - Coordinates are `[longitude, latitude]` pairs
//! - Summary fields that are zero are omitted from responses
//! - Points too far from any road yield no route rather than an error body

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{RoutingClient, RoutingConfig};
pub use convert::{convert_driving_route, convert_walking_route};
pub use error::RoutingError;
pub use mock::MockRouter;
pub use types::{
    DirectionsFeature, DirectionsGeometry, DirectionsProperties, DirectionsRequest,
    DirectionsResponse, DirectionsSummary, DrivingRoute, RouteLeg, RouteSummary, WalkingRoute,
};
