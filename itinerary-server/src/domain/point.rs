//! Geographic point type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when constructing a point from invalid coordinates.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid coordinate ({lon}, {lat}): {reason}")]
pub struct InvalidPoint {
    lon: f64,
    lat: f64,
    reason: &'static str,
}

/// A WGS84 position in decimal degrees.
///
/// Longitude is always within `[-180, 180]` and latitude within `[-90, 90]`.
/// Both are finite. This type guarantees that by construction.
///
/// # Examples
///
/// ```
/// use itinerary_server::domain::Point;
///
/// let ayala = Point::new(121.0280, 14.5490).unwrap();
/// assert_eq!(ayala.lon(), 121.0280);
///
/// assert!(Point::new(f64::NAN, 14.5).is_err());
/// assert!(Point::new(121.0, 95.0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point(geo::Point<f64>);

impl Point {
    /// Create a point from longitude and latitude.
    pub fn new(lon: f64, lat: f64) -> Result<Self, InvalidPoint> {
        if !lon.is_finite() || !lat.is_finite() {
            return Err(InvalidPoint {
                lon,
                lat,
                reason: "coordinates must be finite",
            });
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(InvalidPoint {
                lon,
                lat,
                reason: "longitude must be within [-180, 180]",
            });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(InvalidPoint {
                lon,
                lat,
                reason: "latitude must be within [-90, 90]",
            });
        }
        Ok(Point(geo::Point::new(lon, lat)))
    }

    /// Wrap a `geo` point produced by geometric computation.
    pub(crate) fn from_geo(p: geo::Point<f64>) -> Option<Self> {
        Self::new(p.x(), p.y()).ok()
    }

    /// Longitude in decimal degrees.
    pub fn lon(&self) -> f64 {
        self.0.x()
    }

    /// Latitude in decimal degrees.
    pub fn lat(&self) -> f64 {
        self.0.y()
    }

    /// The underlying `geo` point.
    pub fn as_geo(&self) -> geo::Point<f64> {
        self.0
    }

    /// The underlying `geo` coordinate.
    pub fn coord(&self) -> geo::Coord<f64> {
        self.0.0
    }
}

impl TryFrom<[f64; 2]> for Point {
    type Error = InvalidPoint;

    fn try_from([lon, lat]: [f64; 2]) -> Result<Self, Self::Error> {
        Point::new(lon, lat)
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.lon(), p.lat()]
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {})", self.lon(), self.lat())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.lon(), self.lat())
    }
}
