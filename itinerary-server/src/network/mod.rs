//! Transit network loading.
//!
//! Networks are GeoJSON `FeatureCollection`s. Each feature's `type`
//! property names a mode (`"MRT"`, `"P2P-Bus"`, ...) for lines or a stop
//! type (`"MRT-Stop"`) for stops. Lines may carry a `name` and an ordered
//! `stops` list; stops must carry a `name`.
//!
//! Malformed features are skipped with a warning; only a document that is
//! not a feature collection fails to load.

mod convert;
mod error;
mod geojson;

use std::path::Path;

use tracing::{debug, warn};

use crate::domain::TransitNetwork;

pub use convert::convert_feature;
pub use error::{FeatureError, NetworkError};
pub use geojson::{RawDocument, RawFeature, RawGeometry, RawProperties};

const FEATURE_COLLECTION: &str = "FeatureCollection";

impl TransitNetwork {
    /// Parse a network from a GeoJSON string.
    pub fn from_geojson_str(json: &str) -> Result<Self, NetworkError> {
        let document: RawDocument = serde_json::from_str(json)?;
        if document.kind != FEATURE_COLLECTION {
            return Err(NetworkError::NotFeatureCollection(document.kind));
        }

        let total = document.features.len();
        let mut skipped = 0;
        let mut features = Vec::with_capacity(total);

        for (index, value) in document.features.into_iter().enumerate() {
            let converted = serde_json::from_value::<RawFeature>(value)
                .map_err(FeatureError::from)
                .and_then(convert_feature);
            match converted {
                Ok(converted) => features.extend(converted),
                Err(e) => {
                    warn!(index, error = %e, "skipping malformed network feature");
                    skipped += 1;
                }
            }
        }

        let network: TransitNetwork = features.into_iter().collect();
        debug!(
            total,
            skipped,
            lines = network.lines().len(),
            stops = network.stops().len(),
            "network parsed"
        );
        Ok(network)
    }

    /// Read and parse a network file.
    pub fn from_geojson_file(path: impl AsRef<Path>) -> Result<Self, NetworkError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| NetworkError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_geojson_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransportMode;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature",
             "properties": {"type": "LRT2", "name": "LRT Line 2", "stops": ["Recto", "Legarda"]},
             "geometry": {"type": "LineString", "coordinates": [[120.983, 14.603], [120.992, 14.601]]}},
            {"type": "Feature",
             "properties": {"type": "LRT2-Stop", "name": "Recto"},
             "geometry": {"type": "Point", "coordinates": [120.983, 14.603]}},
            {"type": "Feature",
             "properties": {"type": "Ferry", "name": "Pasig River Ferry"},
             "geometry": {"type": "LineString", "coordinates": [[120.97, 14.59], [121.0, 14.58]]}},
            {"type": "Feature",
             "properties": {"type": "LRT2-Stop"},
             "geometry": {"type": "Point", "coordinates": [120.992, 14.601]}},
            {"type": "Feature",
             "properties": {"type": "Bus"},
             "geometry": {"type": "Polygon", "coordinates": []}},
            "not even an object"
        ]
    }"#;

    #[test]
    fn malformed_features_are_skipped() {
        let network = TransitNetwork::from_geojson_str(SAMPLE).unwrap();

        assert_eq!(network.lines().len(), 1);
        assert_eq!(network.stops().len(), 1);
        assert_eq!(network.lines()[0].mode(), TransportMode::Lrt2);
        assert_eq!(network.stops()[0].name(), "Recto");
    }

    #[test]
    fn rejects_non_collections() {
        let err = TransitNetwork::from_geojson_str(r#"{"type": "Feature", "properties": {}}"#)
            .unwrap_err();
        assert!(matches!(err, NetworkError::NotFeatureCollection(ref kind) if kind == "Feature"));

        let err = TransitNetwork::from_geojson_str("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, NetworkError::Json(_)));
    }

    #[test]
    fn empty_collection_is_an_empty_network() {
        let network =
            TransitNetwork::from_geojson_str(r#"{"type": "FeatureCollection", "features": []}"#)
                .unwrap();
        assert!(network.is_empty());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let network = TransitNetwork::from_geojson_file(file.path()).unwrap();
        assert_eq!(network.lines().len(), 1);
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = TransitNetwork::from_geojson_file(dir.path().join("absent.geojson")).unwrap_err();
        assert!(matches!(err, NetworkError::Io { .. }));
    }

    #[test]
    fn bundled_sample_network_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/sample_network.geojson");
        let network = TransitNetwork::from_geojson_file(path).unwrap();

        let summary = network.summary();
        for mode in TransportMode::TRANSIT {
            assert!(summary.contains_key(&mode), "no {mode} features in sample");
        }
    }
}
