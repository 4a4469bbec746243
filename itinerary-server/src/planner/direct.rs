//! The driving fallback itinerary.

use tracing::warn;

use crate::domain::{Itinerary, Point, Segment, TransportMode};
use crate::routing::DrivingRoute;

use super::geometry::polyline_length_m;

/// All positions of the route's legs, in order.
///
/// Returns `None` if any position is not a valid coordinate.
pub fn route_points(route: &DrivingRoute) -> Option<Vec<Point>> {
    route
        .legs
        .iter()
        .flat_map(|leg| leg.geometry.iter())
        .map(|&position| Point::try_from(position))
        .collect::<Result<Vec<_>, _>>()
        .inspect_err(|e| warn!(error = %e, "driving route has an invalid position"))
        .ok()
}

/// Trip origin and destination: the first and last route positions.
pub fn route_endpoints(route: &DrivingRoute) -> Option<(Point, Point)> {
    let points = route_points(route)?;
    match points.as_slice() {
        [first, .., last] => Some((*first, *last)),
        _ => None,
    }
}

/// Wrap a driving route as a one-segment itinerary.
///
/// The distance is measured along the route geometry; the duration is the
/// route's own summary. Yields `None` if the geometry has fewer than two
/// points or the duration is unusable.
pub fn build_direct(route: &DrivingRoute) -> Option<Itinerary> {
    let geometry = route_points(route)?;
    if geometry.len() < 2 {
        return None;
    }

    let duration_s = route.summary.duration_seconds;
    if !duration_s.is_finite() || duration_s < 0.0 {
        warn!(duration_s, "driving route has an unusable duration");
        return None;
    }

    let distance_m = polyline_length_m(&geometry);
    let segment = Segment::driving("Drive to destination", distance_m, duration_s, geometry);
    Itinerary::new(TransportMode::Driving, vec![segment]).ok()
}
