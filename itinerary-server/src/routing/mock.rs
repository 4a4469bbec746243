//! Mock routing service for testing without API access.
//!
//! Routes are straight lines between the two points, timed at fixed
//! speeds, so results are deterministic.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::Point;
use crate::planner::WalkingRouter;
use crate::planner::geometry::distance_m;

use super::error::RoutingError;
use super::types::{DrivingRoute, RouteLeg, RouteSummary, WalkingRoute};

/// Walking speed in meters per second.
const WALKING_SPEED_MPS: f64 = 1.4;

/// Driving speed in meters per second (30 km/h).
const DRIVING_SPEED_MPS: f64 = 30.0 / 3.6;

/// Mock router producing straight-line routes.
#[derive(Debug, Default)]
pub struct MockRouter {
    /// Walking routes to these destinations fail with `NoRoute`.
    unreachable: Vec<Point>,
    /// Walking routes are stretched by this factor (1.0 when unset).
    detour_factor: Option<f64>,
    calls: AtomicUsize,
}

impl MockRouter {
    /// A router that always succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make walking routes to `destination` fail.
    pub fn with_unreachable(mut self, destination: Point) -> Self {
        self.unreachable.push(destination);
        self
    }

    /// Report walking distances as the straight line times `factor`.
    pub fn with_detour_factor(mut self, factor: f64) -> Self {
        self.detour_factor = Some(factor);
        self
    }

    /// Number of walking routes requested so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// A straight-line driving route.
    pub fn driving_route(&self, from: Point, to: Point) -> DrivingRoute {
        DrivingRoute {
            summary: RouteSummary {
                duration_seconds: distance_m(from, to) / DRIVING_SPEED_MPS,
            },
            legs: vec![RouteLeg {
                geometry: vec![from.into(), to.into()],
            }],
        }
    }
}

impl WalkingRouter for MockRouter {
    async fn walking_route(&self, from: Point, to: Point) -> Result<WalkingRoute, RoutingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.unreachable.contains(&to) {
            return Err(RoutingError::NoRoute);
        }

        let distance_m = distance_m(from, to) * self.detour_factor.unwrap_or(1.0);
        Ok(WalkingRoute {
            distance_m,
            duration_s: distance_m / WALKING_SPEED_MPS,
            geometry: vec![from, to],
        })
    }
}
