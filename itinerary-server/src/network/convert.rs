//! Conversion from GeoJSON DTOs to validated network features.

use crate::domain::{
    DomainError, Feature, LineFeature, Point, StopFeature, StopKind, TransportMode,
};

use super::error::FeatureError;
use super::geojson::{RawFeature, RawGeometry};

const STOP_SUFFIX: &str = "-Stop";

fn position_to_point(position: &[f64]) -> Result<Point, FeatureError> {
    match position {
        [lon, lat, ..] => Point::new(*lon, *lat).map_err(|e| DomainError::from(e).into()),
        _ => Err(FeatureError::ShortPosition(position.len())),
    }
}

fn positions_to_points(positions: &[Vec<f64>]) -> Result<Vec<Point>, FeatureError> {
    positions.iter().map(|p| position_to_point(p)).collect()
}

/// Convert one raw feature.
///
/// A `MultiLineString` line yields one line per part, all sharing the
/// feature's name and stop list.
pub fn convert_feature(raw: RawFeature) -> Result<Vec<Feature>, FeatureError> {
    let tag = raw.properties.kind.ok_or(FeatureError::MissingType)?;
    let geometry = raw.geometry.ok_or(FeatureError::MissingGeometry)?;

    if tag.ends_with(STOP_SUFFIX) {
        let kind = StopKind::from_tag(&tag)?;
        let coordinates = match geometry {
            RawGeometry::Point { coordinates } => coordinates,
            other => {
                return Err(FeatureError::GeometryMismatch {
                    tag,
                    geometry: other.type_name(),
                });
            }
        };
        let name = raw.properties.name.ok_or(FeatureError::MissingName)?;
        let stop = StopFeature::new(kind, position_to_point(&coordinates)?, name)?;
        return Ok(vec![Feature::Stop(stop)]);
    }

    let mode = TransportMode::from_tag(&tag)?;
    let parts = match geometry {
        RawGeometry::LineString { coordinates } => vec![coordinates],
        RawGeometry::MultiLineString { coordinates } => coordinates,
        RawGeometry::Point { .. } => {
            return Err(FeatureError::GeometryMismatch {
                tag,
                geometry: "Point",
            });
        }
    };

    parts
        .iter()
        .map(|part| {
            let mut line = LineFeature::new(mode, &positions_to_points(part)?)?;
            if let Some(name) = &raw.properties.name {
                line = line.with_name(name.clone());
            }
            if let Some(stops) = &raw.properties.stops {
                line = line.with_stop_names(stops.clone());
            }
            Ok(Feature::Line(line))
        })
        .collect()
}
