//! GeoJSON network DTOs.
//!
//! Only the parts of GeoJSON the network uses are modelled. Features are
//! kept as raw JSON at the collection level so one bad feature can be
//! skipped without rejecting the whole document.

use serde::Deserialize;

/// Top-level document.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDocument {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub features: Vec<serde_json::Value>,
}

/// A single feature.
#[derive(Debug, Clone, Deserialize)]
pub struct RawFeature {
    #[serde(default)]
    pub properties: RawProperties,

    pub geometry: Option<RawGeometry>,
}

/// Feature properties.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProperties {
    /// Mode tag (`"MRT"`) or stop tag (`"MRT-Stop"`).
    #[serde(rename = "type")]
    pub kind: Option<String>,

    pub name: Option<String>,

    /// Ordered stop names of a line.
    pub stops: Option<Vec<String>>,
}

/// Supported geometries. Positions may carry extra values (elevation).
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum RawGeometry {
    Point { coordinates: Vec<f64> },
    LineString { coordinates: Vec<Vec<f64>> },
    MultiLineString { coordinates: Vec<Vec<Vec<f64>>> },
}

impl RawGeometry {
    /// The GeoJSON type name.
    pub fn type_name(&self) -> &'static str {
        match self {
            RawGeometry::Point { .. } => "Point",
            RawGeometry::LineString { .. } => "LineString",
            RawGeometry::MultiLineString { .. } => "MultiLineString",
        }
    }
}
