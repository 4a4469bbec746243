//! Itinerary types.
//!
//! An `Itinerary` represents one way of making the trip: walking
//! connectors around at most one transit leg, or a single driving leg.

use super::{DomainError, Point, TransportMode};

/// One contiguous piece of an itinerary, travelled in a single mode.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    mode: TransportMode,
    label: String,
    distance_m: f64,
    duration_s: f64,
    fare: f64,
    geometry: Vec<Point>,
    stops: Option<Vec<String>>,
}

impl Segment {
    /// Creates a walking segment. Walking is always free.
    pub fn walk(
        label: impl Into<String>,
        distance_m: f64,
        duration_s: f64,
        geometry: Vec<Point>,
    ) -> Self {
        Self {
            mode: TransportMode::Walk,
            label: label.into(),
            distance_m,
            duration_s,
            fare: 0.0,
            geometry,
            stops: None,
        }
    }

    /// Creates a driving segment. Driving carries no fare.
    pub fn driving(
        label: impl Into<String>,
        distance_m: f64,
        duration_s: f64,
        geometry: Vec<Point>,
    ) -> Self {
        Self {
            mode: TransportMode::Driving,
            label: label.into(),
            distance_m,
            duration_s,
            fare: 0.0,
            geometry,
            stops: None,
        }
    }

    /// Creates a transit segment.
    ///
    /// `stops`, when present, runs from the boarding stop to the alighting
    /// stop inclusive, in travel order.
    pub fn transit(
        mode: TransportMode,
        label: impl Into<String>,
        distance_m: f64,
        duration_s: f64,
        fare: f64,
        geometry: Vec<Point>,
        stops: Option<Vec<String>>,
    ) -> Self {
        Self {
            mode,
            label: label.into(),
            distance_m,
            duration_s,
            fare,
            geometry,
            stops,
        }
    }

    /// The mode travelled on this segment.
    pub fn mode(&self) -> TransportMode {
        self.mode
    }

    /// Rider-facing description.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Distance in meters.
    pub fn distance_m(&self) -> f64 {
        self.distance_m
    }

    /// Duration in seconds.
    pub fn duration_s(&self) -> f64 {
        self.duration_s
    }

    /// Fare in pesos.
    pub fn fare(&self) -> f64 {
        self.fare
    }

    /// The path travelled.
    pub fn geometry(&self) -> &[Point] {
        &self.geometry
    }

    /// Full stop sequence, boarding to alighting inclusive.
    pub fn stops(&self) -> Option<&[String]> {
        self.stops.as_deref()
    }
}

/// A complete trip from origin to destination.
///
/// Totals are always computed from the segments, never stored, so they
/// cannot drift from the segments they summarise.
///
/// # Invariants
///
/// - At least one segment
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    mode: TransportMode,
    segments: Vec<Segment>,
}

impl Itinerary {
    /// Constructs an itinerary whose primary mode is `mode`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `segments` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use itinerary_server::domain::{Itinerary, Point, Segment, TransportMode};
    ///
    /// let a = Point::new(121.00, 14.55).unwrap();
    /// let b = Point::new(121.01, 14.55).unwrap();
    /// let walk = Segment::walk("Walk to stop", 100.0, 80.0, vec![a, b]);
    /// let ride = Segment::transit(TransportMode::Jeep, "Jeepney", 3000.0, 840.0, 13.0, vec![b, a], None);
    ///
    /// let itinerary = Itinerary::new(TransportMode::Jeep, vec![walk, ride]).unwrap();
    /// assert_eq!(itinerary.total_duration_s(), 920.0);
    /// assert_eq!(itinerary.total_fare(), 13.0);
    /// ```
    pub fn new(mode: TransportMode, segments: Vec<Segment>) -> Result<Self, DomainError> {
        if segments.is_empty() {
            return Err(DomainError::EmptyItinerary);
        }
        Ok(Itinerary { mode, segments })
    }

    /// The primary mode of the trip.
    pub fn mode(&self) -> TransportMode {
        self.mode
    }

    /// Returns the segments in travel order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Sum of segment durations, in seconds.
    pub fn total_duration_s(&self) -> f64 {
        self.segments.iter().map(Segment::duration_s).sum()
    }

    /// Sum of segment distances, in meters.
    pub fn total_distance_m(&self) -> f64 {
        self.segments.iter().map(Segment::distance_m).sum()
    }

    /// Sum of segment fares.
    pub fn total_fare(&self) -> f64 {
        self.segments.iter().map(Segment::fare).sum()
    }

    /// Total duration rounded to whole minutes.
    pub fn total_minutes(&self) -> u64 {
        (self.total_duration_s() / 60.0).round().max(0.0) as u64
    }

    /// Summary label, e.g. `"MRT - 34 min, PHP 20.00"`.
    pub fn label(&self) -> String {
        format!(
            "{} - {} min, PHP {:.2}",
            self.mode.display_name(),
            self.total_minutes(),
            self.total_fare()
        )
    }

    /// All segment geometries joined into one path.
    ///
    /// Consecutive duplicate points are removed. Returns `None` when fewer
    /// than two distinct points remain.
    pub fn geometry(&self) -> Option<Vec<Point>> {
        let mut combined: Vec<Point> = Vec::new();
        for point in self.segments.iter().flat_map(|s| s.geometry.iter()) {
            if combined.last() != Some(point) {
                combined.push(*point);
            }
        }
        (combined.len() >= 2).then_some(combined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pt(lon: f64, lat: f64) -> Point {
        Point::new(lon, lat).unwrap()
    }

    #[test]
    fn empty_itinerary_rejected() {
        assert_eq!(
            Itinerary::new(TransportMode::Mrt, vec![]),
            Err(DomainError::EmptyItinerary)
        );
    }

    #[test]
    fn walk_and_driving_are_free() {
        let walk = Segment::walk("w", 500.0, 400.0, vec![]);
        let drive = Segment::driving("d", 5000.0, 600.0, vec![]);
        assert_eq!(walk.fare(), 0.0);
        assert_eq!(walk.mode(), TransportMode::Walk);
        assert_eq!(drive.fare(), 0.0);
        assert_eq!(drive.mode(), TransportMode::Driving);
    }

    #[test]
    fn geometry_removes_consecutive_duplicates() {
        let a = pt(121.0, 14.5);
        let b = pt(121.01, 14.5);
        let c = pt(121.02, 14.5);
        let itinerary = Itinerary::new(
            TransportMode::Mrt,
            vec![
                Segment::walk("w1", 1.0, 1.0, vec![a, b]),
                Segment::transit(TransportMode::Mrt, "t", 1.0, 1.0, 13.0, vec![b, b, c], None),
                Segment::walk("w2", 1.0, 1.0, vec![c]),
            ],
        )
        .unwrap();

        assert_eq!(itinerary.geometry(), Some(vec![a, b, c]));
    }

    #[test]
    fn degenerate_geometry_is_none() {
        let a = pt(121.0, 14.5);
        let itinerary = Itinerary::new(
            TransportMode::Jeep,
            vec![
                Segment::walk("w", 0.0, 0.0, vec![a, a]),
                Segment::transit(TransportMode::Jeep, "t", 0.0, 300.0, 0.0, vec![a], None),
            ],
        )
        .unwrap();
        assert!(itinerary.geometry().is_none());

        let empty = Itinerary::new(
            TransportMode::Driving,
            vec![Segment::driving("d", 0.0, 0.0, vec![])],
        )
        .unwrap();
        assert!(empty.geometry().is_none());
    }

    #[test]
    fn label_summarises_totals() {
        let itinerary = Itinerary::new(
            TransportMode::Mrt,
            vec![
                Segment::walk("w", 300.0, 240.0, vec![]),
                Segment::transit(TransportMode::Mrt, "t", 7000.0, 1860.0, 20.0, vec![], None),
            ],
        )
        .unwrap();
        assert_eq!(itinerary.label(), "MRT - 35 min, PHP 20.00");
    }

    fn segment_strategy() -> impl Strategy<Value = Segment> {
        (0.0f64..20_000.0, 0.0f64..7_200.0, 0.0f64..200.0, any::<bool>()).prop_map(
            |(distance, duration, fare, walking)| {
                if walking {
                    Segment::walk("w", distance, duration, vec![])
                } else {
                    Segment::transit(TransportMode::Bus, "t", distance, duration, fare, vec![], None)
                }
            },
        )
    }

    proptest! {
        #[test]
        fn totals_equal_segment_sums(segments in prop::collection::vec(segment_strategy(), 1..6)) {
            let expected_duration: f64 = segments.iter().map(Segment::duration_s).sum();
            let expected_distance: f64 = segments.iter().map(Segment::distance_m).sum();
            let expected_fare: f64 = segments.iter().map(Segment::fare).sum();

            let itinerary = Itinerary::new(TransportMode::Bus, segments).unwrap();

            prop_assert_eq!(itinerary.total_duration_s(), expected_duration);
            prop_assert_eq!(itinerary.total_distance_m(), expected_distance);
            prop_assert_eq!(itinerary.total_fare(), expected_fare);
        }
    }
}
