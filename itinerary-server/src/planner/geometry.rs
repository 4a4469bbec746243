//! Geodesic helpers over network lines.
//!
//! Distances and bearings are great-circle (Haversine), in meters and
//! degrees. Positions along a line are measured in meters from its first
//! vertex.

use geo::line_measures::LengthMeasurable;
use geo::{Bearing, Closest, ClosestPoint, Distance, Haversine, InterpolatableLine, Line, LineString};

use crate::domain::{LineFeature, Point};

/// Great-circle distance between two points, in meters.
pub fn distance_m(a: Point, b: Point) -> f64 {
    Haversine.distance(a.as_geo(), b.as_geo())
}

/// Initial great-circle bearing from `a` to `b`, in degrees.
pub fn bearing_deg(a: Point, b: Point) -> f64 {
    Haversine.bearing(a.as_geo(), b.as_geo())
}

/// Absolute angle between two bearings, normalised to `[0, 180]`.
pub fn bearing_difference(a: f64, b: f64) -> f64 {
    let diff = (a - b).rem_euclid(360.0);
    if diff > 180.0 { 360.0 - diff } else { diff }
}

/// Length of a polyline, in meters.
pub fn polyline_length_m(points: &[Point]) -> f64 {
    let line: LineString<f64> = points.iter().map(Point::coord).collect();
    line.length(&Haversine)
}

/// Length of a network line, in meters.
pub fn line_length_m(line: &LineFeature) -> f64 {
    line.geometry().length(&Haversine)
}

/// Where a point falls on a line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePosition {
    /// The snapped point on the line.
    pub point: Point,
    /// Distance from the projected point to the line.
    pub offset_m: f64,
    /// Distance along the line from its first vertex.
    pub along_m: f64,
    /// Index of the line segment (between vertex `i` and `i + 1`).
    pub segment: usize,
}

impl LinePosition {
    /// Position of the line's first vertex.
    pub fn start_of(line: &LineFeature, from: Point) -> Self {
        let point = line.first_point();
        Self {
            point,
            offset_m: distance_m(from, point),
            along_m: 0.0,
            segment: 0,
        }
    }

    /// Position of the line's last vertex.
    pub fn end_of(line: &LineFeature, from: Point) -> Self {
        let point = line.last_point();
        Self {
            point,
            offset_m: distance_m(from, point),
            along_m: line_length_m(line),
            segment: line.points().len().saturating_sub(2),
        }
    }
}

/// Project `target` onto the nearest point of `line`.
///
/// The nearest segment is found by great-circle distance; ties keep the
/// earliest segment.
pub fn project(line: &LineFeature, target: Point) -> Option<LinePosition> {
    let mut best: Option<LinePosition> = None;
    let mut walked = 0.0;

    for (segment, pair) in line.points().windows(2).enumerate() {
        let (a, b) = (pair[0], pair[1]);
        let seg_len = distance_m(a, b);

        let snapped = match Line::new(a.coord(), b.coord()).closest_point(&target.as_geo()) {
            Closest::Intersection(p) | Closest::SinglePoint(p) => Point::from_geo(p),
            Closest::Indeterminate => None,
        };

        if let Some(snapped) = snapped {
            let offset_m = distance_m(target, snapped);
            if best.is_none_or(|b| offset_m < b.offset_m) {
                best = Some(LinePosition {
                    point: snapped,
                    offset_m,
                    along_m: walked + distance_m(a, snapped),
                    segment,
                });
            }
        }

        walked += seg_len;
    }

    best
}

/// The point `along_m` meters from the start of `line`, clamped to its ends.
pub fn point_along(line: &LineFeature, along_m: f64) -> Option<Point> {
    let total = line_length_m(line);
    if total <= 0.0 {
        return Some(line.first_point());
    }
    let ratio = (along_m / total).clamp(0.0, 1.0);
    line.geometry()
        .point_at_ratio_from_start(&Haversine, ratio)
        .and_then(Point::from_geo)
}

/// The part of `line` between two positions, in travel order from `from`
/// to `to`.
///
/// If `to` lies before `from` along the line, the slice is walked backwards.
pub fn slice(line: &LineFeature, from: &LinePosition, to: &LinePosition) -> Vec<Point> {
    if to.along_m < from.along_m {
        let mut reversed = slice(line, to, from);
        reversed.reverse();
        return reversed;
    }

    let points = line.points();
    let mut out = vec![from.point];
    let inner = (from.segment + 1)..=to.segment;
    for vertex in points.get(inner).unwrap_or_default() {
        if out.last() != Some(vertex) {
            out.push(*vertex);
        }
    }
    if out.last() != Some(&to.point) {
        out.push(to.point);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransportMode;

    fn pt(lon: f64, lat: f64) -> Point {
        Point::new(lon, lat).unwrap()
    }

    /// A south-to-north line along lon 121.0, three vertices ~1.1 km apart.
    fn northbound() -> LineFeature {
        LineFeature::new(
            TransportMode::Mrt,
            &[pt(121.0, 14.50), pt(121.0, 14.51), pt(121.0, 14.52)],
        )
        .unwrap()
    }

    #[test]
    fn distance_of_one_hundredth_degree_latitude() {
        let d = distance_m(pt(121.0, 14.50), pt(121.0, 14.51));
        assert!((d - 1112.0).abs() < 5.0, "got {d}");
    }

    #[test]
    fn bearings() {
        let north = bearing_deg(pt(121.0, 14.50), pt(121.0, 14.51));
        assert!(bearing_difference(north, 0.0) < 0.01, "got {north}");

        let east = bearing_deg(pt(121.0, 14.50), pt(121.01, 14.50));
        assert!(bearing_difference(east, 90.0) < 0.1, "got {east}");
    }

    #[test]
    fn bearing_difference_wraps() {
        assert_eq!(bearing_difference(10.0, 350.0), 20.0);
        assert_eq!(bearing_difference(350.0, 10.0), 20.0);
        assert_eq!(bearing_difference(0.0, 180.0), 180.0);
        assert_eq!(bearing_difference(-90.0, 90.0), 180.0);
        assert_eq!(bearing_difference(45.0, 45.0), 0.0);
    }

    #[test]
    fn project_onto_middle_of_line() {
        let line = northbound();
        // ~50 m east of the line, a quarter of the way along
        let pos = project(&line, pt(121.000_46, 14.505)).unwrap();

        assert!((pos.point.lon() - 121.0).abs() < 1e-9);
        assert!((pos.point.lat() - 14.505).abs() < 1e-6);
        assert!((pos.offset_m - 50.0).abs() < 2.0, "offset {}", pos.offset_m);
        assert!((pos.along_m - 556.0).abs() < 5.0, "along {}", pos.along_m);
        assert_eq!(pos.segment, 0);
    }

    #[test]
    fn project_past_the_end_snaps_to_last_vertex() {
        let line = northbound();
        let pos = project(&line, pt(121.0, 14.53)).unwrap();
        assert_eq!(pos.point, pt(121.0, 14.52));
        assert_eq!(pos.segment, 1);
        assert!((pos.along_m - line_length_m(&line)).abs() < 1e-6);
    }

    #[test]
    fn point_along_interpolates() {
        let line = northbound();
        let p = point_along(&line, 556.0).unwrap();
        assert!((p.lat() - 14.505).abs() < 1e-4, "got {p:?}");

        // Clamped at both ends
        let start = point_along(&line, -10.0).unwrap();
        assert!((start.lat() - 14.50).abs() < 1e-9);
        let end = point_along(&line, 1e9).unwrap();
        assert!((end.lat() - 14.52).abs() < 1e-9);
    }

    #[test]
    fn slice_forward_includes_inner_vertices() {
        let line = northbound();
        let from = project(&line, pt(121.0, 14.505)).unwrap();
        let to = project(&line, pt(121.0, 14.515)).unwrap();

        let path = slice(&line, &from, &to);
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], from.point);
        assert_eq!(path[1], pt(121.0, 14.51));
        assert_eq!(path[2], to.point);
    }

    #[test]
    fn slice_backward_is_reversed() {
        let line = northbound();
        let from = project(&line, pt(121.0, 14.515)).unwrap();
        let to = project(&line, pt(121.0, 14.505)).unwrap();

        let path = slice(&line, &from, &to);
        assert_eq!(path.first(), Some(&from.point));
        assert_eq!(path.last(), Some(&to.point));
        assert_eq!(path[1], pt(121.0, 14.51));
    }

    #[test]
    fn slice_within_one_segment() {
        let line = northbound();
        let from = project(&line, pt(121.0, 14.502)).unwrap();
        let to = project(&line, pt(121.0, 14.508)).unwrap();
        assert_eq!(slice(&line, &from, &to), vec![from.point, to.point]);
    }

    #[test]
    fn line_ends() {
        let line = northbound();
        let start = LinePosition::start_of(&line, pt(121.0, 14.50));
        assert_eq!(start.along_m, 0.0);
        assert_eq!(start.offset_m, 0.0);

        let end = LinePosition::end_of(&line, pt(121.0, 14.50));
        assert_eq!(end.point, pt(121.0, 14.52));
        assert_eq!(end.segment, 1);
        assert!((end.offset_m - end.along_m).abs() < 1.0);
    }
}
