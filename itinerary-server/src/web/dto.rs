//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Itinerary, Point, Segment, TransitNetwork, TransportMode};
use crate::routing::DrivingRoute;

/// Request to build itineraries.
///
/// Either a driving route computed by the caller, or a pair of endpoints
/// for which the server fetches the driving route itself.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ItineraryRequest {
    Route {
        route: DrivingRoute,
    },
    Endpoints {
        /// `[lon, lat]`
        origin: Point,
        /// `[lon, lat]`
        destination: Point,
    },
}

/// Response for an itinerary request, best option first.
#[derive(Debug, Serialize)]
pub struct ItinerariesResponse {
    pub itineraries: Vec<ItineraryResult>,
}

/// One itinerary.
#[derive(Debug, Serialize)]
pub struct ItineraryResult {
    /// Summary line, e.g. "MRT - 21 min, PHP 28.00"
    pub label: String,

    /// The transit mode used, or `Driving`
    pub mode: TransportMode,

    /// Total duration in seconds
    pub total_duration_s: f64,

    /// Total distance in meters
    pub total_distance_m: f64,

    /// Total fare in PHP
    pub total_fare: f64,

    /// Journey segments, in travel order
    pub segments: Vec<SegmentResult>,

    /// Combined polyline, `null` if it has fewer than two distinct points
    pub geometry: Option<Vec<Point>>,
}

/// One segment of an itinerary.
#[derive(Debug, Serialize)]
pub struct SegmentResult {
    pub mode: TransportMode,
    pub label: String,
    pub distance_m: f64,
    pub duration_s: f64,
    pub fare: f64,
    pub geometry: Vec<Point>,

    /// Stops passed on a transit segment, when the line names them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stops: Option<Vec<String>>,
}

/// Response for the network summary.
#[derive(Debug, Serialize)]
pub struct NetworkResponse {
    pub modes: Vec<ModeSummary>,
    pub total_lines: usize,
    pub total_stops: usize,
}

/// Feature counts for one mode.
#[derive(Debug, Serialize)]
pub struct ModeSummary {
    pub mode: TransportMode,
    pub lines: usize,
    pub stops: usize,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ItineraryResult {
    /// Create from a domain Itinerary.
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        Self {
            label: itinerary.label(),
            mode: itinerary.mode(),
            total_duration_s: itinerary.total_duration_s(),
            total_distance_m: itinerary.total_distance_m(),
            total_fare: itinerary.total_fare(),
            segments: itinerary
                .segments()
                .iter()
                .map(SegmentResult::from_segment)
                .collect(),
            geometry: itinerary.geometry(),
        }
    }
}

impl SegmentResult {
    /// Create from a domain Segment.
    pub fn from_segment(segment: &Segment) -> Self {
        Self {
            mode: segment.mode(),
            label: segment.label().to_string(),
            distance_m: segment.distance_m(),
            duration_s: segment.duration_s(),
            fare: segment.fare(),
            geometry: segment.geometry().to_vec(),
            stops: segment.stops().map(<[String]>::to_vec),
        }
    }
}

impl NetworkResponse {
    pub fn from_network(network: &TransitNetwork) -> Self {
        let modes = network
            .summary()
            .into_iter()
            .map(|(mode, (lines, stops))| ModeSummary { mode, lines, stops })
            .collect();

        Self {
            modes,
            total_lines: network.lines().len(),
            total_stops: network.stops().len(),
        }
    }
}
