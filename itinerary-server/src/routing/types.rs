//! Routing-service wire types.
//!
//! `Directions*` types map directly to the OpenRouteService GeoJSON
//! directions response. ORS omits summary fields that are zero, so those
//! are optional. `DrivingRoute` is the shape the itinerary engine accepts
//! as its driving fallback; `WalkingRoute` is a validated walking
//! connector.

use serde::{Deserialize, Serialize};

use crate::domain::Point;

/// Request body for `POST /v2/directions/{profile}/geojson`.
#[derive(Debug, Clone, Serialize)]
pub struct DirectionsRequest {
    /// `[[lon, lat], [lon, lat]]`
    pub coordinates: Vec<[f64; 2]>,
}

impl DirectionsRequest {
    /// A request for a route between two points.
    pub fn between(from: Point, to: Point) -> Self {
        Self {
            coordinates: vec![from.into(), to.into()],
        }
    }
}

/// Response from the GeoJSON directions endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    #[serde(default)]
    pub features: Vec<DirectionsFeature>,
}

/// One route alternative.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsFeature {
    pub properties: DirectionsProperties,
    pub geometry: DirectionsGeometry,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsProperties {
    #[serde(default)]
    pub summary: DirectionsSummary,
}

/// Route totals.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectionsSummary {
    /// Meters
    pub distance: Option<f64>,
    /// Seconds
    pub duration: Option<f64>,
}

/// A GeoJSON `LineString`. Positions may carry a third (elevation) value.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsGeometry {
    pub coordinates: Vec<Vec<f64>>,
}

/// A walking connector between two points.
#[derive(Debug, Clone, PartialEq)]
pub struct WalkingRoute {
    pub distance_m: f64,
    pub duration_s: f64,
    pub geometry: Vec<Point>,
}

/// A driving route: a total-duration summary and its legs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrivingRoute {
    pub summary: RouteSummary,
    #[serde(default)]
    pub legs: Vec<RouteLeg>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    pub duration_seconds: f64,
}

/// One leg of a driving route as `[lon, lat]` positions.
///
/// Positions are kept raw here and validated when the route is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    #[serde(default)]
    pub geometry: Vec<[f64; 2]>,
}
