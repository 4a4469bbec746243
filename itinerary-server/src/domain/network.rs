//! Transit network features.
//!
//! A `TransitNetwork` is the static set of lines and stops the planner
//! snaps trips onto. It is loaded once and shared read-only between
//! concurrent planning attempts.

use std::collections::BTreeMap;

use geo::LineString;

use super::{DomainError, Point, StopKind, TransportMode};

/// A transit line: one route of one mode, drawn as a polyline.
///
/// # Invariants
///
/// - The mode is a transit mode
/// - The polyline has at least two vertices, all valid coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct LineFeature {
    mode: TransportMode,
    points: Vec<Point>,
    geometry: LineString<f64>,
    name: Option<String>,
    stop_names: Option<Vec<String>>,
}

impl LineFeature {
    /// Construct a line, validating mode and geometry.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the mode is walking/driving or the polyline has
    /// fewer than two points.
    pub fn new(mode: TransportMode, points: &[Point]) -> Result<Self, DomainError> {
        if !mode.is_transit() {
            return Err(DomainError::NotTransit(mode));
        }
        if points.len() < 2 {
            return Err(DomainError::TooFewPoints(points.len()));
        }
        let geometry = points.iter().map(Point::coord).collect();
        Ok(Self {
            mode,
            points: points.to_vec(),
            geometry,
            name: None,
            stop_names: None,
        })
    }

    /// Set the line's display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the authored stop sequence for this line.
    pub fn with_stop_names(mut self, stops: Vec<String>) -> Self {
        self.stop_names = Some(stops);
        self
    }

    /// The line's mode.
    pub fn mode(&self) -> TransportMode {
        self.mode
    }

    /// The line's polyline.
    pub fn geometry(&self) -> &LineString<f64> {
        &self.geometry
    }

    /// The line's display name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Ordered stop names as authored, if any.
    ///
    /// The order is the real-world stop sequence; it is not guaranteed to
    /// follow the polyline's vertex order.
    pub fn stop_names(&self) -> Option<&[String]> {
        self.stop_names.as_deref()
    }

    /// The line's vertices.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// First vertex of the polyline.
    pub fn first_point(&self) -> Point {
        self.points[0]
    }

    /// Last vertex of the polyline.
    pub fn last_point(&self) -> Point {
        self.points[self.points.len() - 1]
    }
}

/// A named stop of one transit mode.
#[derive(Debug, Clone, PartialEq)]
pub struct StopFeature {
    kind: StopKind,
    point: Point,
    name: String,
}

impl StopFeature {
    /// Construct a stop.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the name is empty or blank.
    pub fn new(kind: StopKind, point: Point, name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::EmptyStopName);
        }
        Ok(Self { kind, point, name })
    }

    /// The stop's type (e.g. `MRT-Stop`).
    pub fn kind(&self) -> StopKind {
        self.kind
    }

    /// The stop's location.
    pub fn point(&self) -> Point {
        self.point
    }

    /// The stop's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A validated network feature.
#[derive(Debug, Clone, PartialEq)]
pub enum Feature {
    /// A transit line
    Line(LineFeature),
    /// A stop point
    Stop(StopFeature),
}

/// The static transit network.
///
/// Features keep their input order, which the planner relies on for
/// deterministic tie-breaking.
#[derive(Debug, Clone, Default)]
pub struct TransitNetwork {
    lines: Vec<LineFeature>,
    stops: Vec<StopFeature>,
}

impl TransitNetwork {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line.
    pub fn add_line(&mut self, line: LineFeature) {
        self.lines.push(line);
    }

    /// Add a stop.
    pub fn add_stop(&mut self, stop: StopFeature) {
        self.stops.push(stop);
    }

    /// All lines, in input order.
    pub fn lines(&self) -> &[LineFeature] {
        &self.lines
    }

    /// All stops, in input order.
    pub fn stops(&self) -> &[StopFeature] {
        &self.stops
    }

    /// Lines whose mode is one of `modes`, in input order.
    pub fn lines_of<'a>(
        &'a self,
        modes: &'a [TransportMode],
    ) -> impl Iterator<Item = &'a LineFeature> + 'a {
        self.lines.iter().filter(move |l| modes.contains(&l.mode))
    }

    /// Number of lines and stops per mode.
    pub fn summary(&self) -> BTreeMap<TransportMode, (usize, usize)> {
        let mut counts: BTreeMap<TransportMode, (usize, usize)> = BTreeMap::new();
        for line in &self.lines {
            counts.entry(line.mode).or_default().0 += 1;
        }
        for stop in &self.stops {
            counts.entry(stop.kind.mode()).or_default().1 += 1;
        }
        counts
    }

    /// Returns true if the network has no features.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.stops.is_empty()
    }
}

impl FromIterator<Feature> for TransitNetwork {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        let mut network = TransitNetwork::new();
        for feature in iter {
            match feature {
                Feature::Line(line) => network.add_line(line),
                Feature::Stop(stop) => network.add_stop(stop),
            }
        }
        network
    }
}
