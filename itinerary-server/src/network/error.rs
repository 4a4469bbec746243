//! Network loading errors.

use std::path::PathBuf;

use crate::domain::{DomainError, UnknownMode};

/// Errors that prevent a network document from loading at all.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// The file could not be read
    #[error("failed to read network file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON
    #[error("network document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The document is JSON but not a GeoJSON feature collection
    #[error("expected a GeoJSON FeatureCollection, got {0:?}")]
    NotFeatureCollection(String),
}

/// Why a single feature was skipped.
#[derive(Debug, thiserror::Error)]
pub enum FeatureError {
    /// The feature does not match the expected GeoJSON shape
    #[error("malformed feature: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The feature has no `type` property
    #[error("feature has no type property")]
    MissingType,

    /// The `type` property is not a known mode or stop tag
    #[error(transparent)]
    UnknownMode(#[from] UnknownMode),

    /// The feature has no geometry
    #[error("feature has no geometry")]
    MissingGeometry,

    /// Lines need line geometry, stops need point geometry
    #[error("{tag} feature cannot have {geometry} geometry")]
    GeometryMismatch { tag: String, geometry: &'static str },

    /// A stop with no name
    #[error("stop feature has no name")]
    MissingName,

    /// A coordinate position with fewer than two values
    #[error("position has {0} values, expected at least 2")]
    ShortPosition(usize),

    /// The feature failed domain validation
    #[error(transparent)]
    Invalid(#[from] DomainError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = NetworkError::NotFeatureCollection("Feature".into());
        assert_eq!(
            err.to_string(),
            "expected a GeoJSON FeatureCollection, got \"Feature\""
        );

        let err = FeatureError::GeometryMismatch {
            tag: "MRT-Stop".into(),
            geometry: "LineString",
        };
        assert_eq!(
            err.to_string(),
            "MRT-Stop feature cannot have LineString geometry"
        );

        let err = FeatureError::from(UnknownMode("Ferry".into()));
        assert_eq!(err.to_string(), "unknown transport mode tag: \"Ferry\"");
    }
}
