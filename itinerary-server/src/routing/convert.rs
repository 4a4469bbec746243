//! Conversion from directions responses to route types.

use crate::domain::Point;

use super::error::RoutingError;
use super::types::{
    DirectionsFeature, DirectionsResponse, DrivingRoute, RouteLeg, RouteSummary, WalkingRoute,
};

/// The first route of a response, or `NoRoute` if there is none.
fn first_feature(response: &DirectionsResponse) -> Result<&DirectionsFeature, RoutingError> {
    response.features.first().ok_or(RoutingError::NoRoute)
}

fn position_to_point(position: &[f64]) -> Result<Point, RoutingError> {
    match position {
        [lon, lat, ..] => {
            Point::new(*lon, *lat).map_err(|e| RoutingError::InvalidGeometry(e.to_string()))
        }
        _ => Err(RoutingError::InvalidGeometry(format!(
            "position has {} values",
            position.len()
        ))),
    }
}

/// Convert a walking directions response.
pub fn convert_walking_route(response: &DirectionsResponse) -> Result<WalkingRoute, RoutingError> {
    let feature = first_feature(response)?;
    let geometry = feature
        .geometry
        .coordinates
        .iter()
        .map(|p| position_to_point(p))
        .collect::<Result<Vec<_>, _>>()?;

    if geometry.is_empty() {
        return Err(RoutingError::NoRoute);
    }

    let summary = &feature.properties.summary;
    Ok(WalkingRoute {
        distance_m: summary.distance.unwrap_or(0.0),
        duration_s: summary.duration.unwrap_or(0.0),
        geometry,
    })
}

/// Convert a driving directions response into a single-leg route.
pub fn convert_driving_route(response: &DirectionsResponse) -> Result<DrivingRoute, RoutingError> {
    let feature = first_feature(response)?;
    let geometry = feature
        .geometry
        .coordinates
        .iter()
        .map(|p| position_to_point(p).map(<[f64; 2]>::from))
        .collect::<Result<Vec<_>, _>>()?;

    if geometry.is_empty() {
        return Err(RoutingError::NoRoute);
    }

    Ok(DrivingRoute {
        summary: RouteSummary {
            duration_seconds: feature.properties.summary.duration.unwrap_or(0.0),
        },
        legs: vec![RouteLeg { geometry }],
    })
}
