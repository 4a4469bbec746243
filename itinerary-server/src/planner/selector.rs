//! Line candidate selection.
//!
//! Decides which line of a mode group a rider at `current` should take
//! toward `destination`. Each line is projected, checked for a usable leg,
//! forward progress, direction of travel and (for one-way modes) that the
//! leg runs with the line. Of the lines that pass, the shortest ride wins.

use tracing::trace;

use crate::domain::{LineFeature, Point};

use super::config::PlannerConfig;
use super::geometry::{
    LinePosition, bearing_deg, bearing_difference, distance_m, line_length_m, point_along, project,
};

/// Why a line was not usable.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Rejection {
    /// The rider is not close enough to the line to board it
    #[error("rider is {offset_m:.0} m from the line (limit {limit_m:.0} m)")]
    TooFarFromLine { offset_m: f64, limit_m: f64 },

    /// The line geometry gave no projection
    #[error("line geometry is degenerate")]
    Degenerate,

    /// Entry and exit are practically the same place
    #[error("entry and exit are only {0:.1} m apart")]
    TooShort(f64),

    /// Riding would not bring the rider meaningfully closer
    #[error("leg leaves {after_m:.0} m of {before_m:.0} m to go")]
    NoProgress { before_m: f64, after_m: f64 },

    /// The line heads away from the destination
    #[error("line runs {0:.0} degrees off the destination bearing")]
    WrongBearing(f64),

    /// The leg would ride a one-way line backwards
    #[error("leg runs against the line direction")]
    Backwards,
}

/// A line that passed every test, with where to get on and off.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub line: &'a LineFeature,
    pub entry: LinePosition,
    pub exit: LinePosition,
    /// Distance ridden along the line, in meters.
    pub on_line_m: f64,
}

/// Check one line for a rider at `current` heading to `destination`.
pub fn evaluate<'a>(
    line: &'a LineFeature,
    current: Point,
    destination: Point,
    config: &PlannerConfig,
) -> Result<Candidate<'a>, Rejection> {
    let mode = line.mode();

    let (entry, exit) = if mode.is_point_to_point() {
        // Fixed termini: board at the first vertex, ride to the last
        let entry = LinePosition::start_of(line, current);
        let limit_m = config.point_to_point_entry_m();
        if entry.offset_m > limit_m {
            return Err(Rejection::TooFarFromLine {
                offset_m: entry.offset_m,
                limit_m,
            });
        }
        (entry, LinePosition::end_of(line, destination))
    } else {
        let entry = project(line, current).ok_or(Rejection::Degenerate)?;
        if entry.offset_m > config.stop_proximity_m {
            return Err(Rejection::TooFarFromLine {
                offset_m: entry.offset_m,
                limit_m: config.stop_proximity_m,
            });
        }
        let exit = project(line, destination).ok_or(Rejection::Degenerate)?;
        (entry, exit)
    };

    let leg_m = distance_m(entry.point, exit.point);
    if leg_m < config.min_leg_m {
        return Err(Rejection::TooShort(leg_m));
    }

    let before_m = distance_m(entry.point, destination);
    let after_m = distance_m(exit.point, destination);
    if after_m >= (1.0 - config.min_progress_ratio) * before_m {
        return Err(Rejection::NoProgress { before_m, after_m });
    }

    if !mode.is_rail() && !mode.is_point_to_point() {
        if let Some(line_bearing) = local_bearing(line, &entry, config.bearing_sample_m) {
            let diff = bearing_difference(line_bearing, bearing_deg(entry.point, destination));
            if diff > config.max_bearing_diff_deg {
                return Err(Rejection::WrongBearing(diff));
            }
        }
    }

    if mode.is_one_way() && exit.along_m < entry.along_m {
        return Err(Rejection::Backwards);
    }

    Ok(Candidate {
        line,
        entry,
        exit,
        on_line_m: (exit.along_m - entry.along_m).abs(),
    })
}

/// Direction of travel of `line` at `at`.
///
/// Looks `sample_m` ahead; near the end of the line it looks behind
/// instead. Falls back to the overall first-to-last bearing, and gives
/// `None` only for a line that starts and ends in the same place.
fn local_bearing(line: &LineFeature, at: &LinePosition, sample_m: f64) -> Option<f64> {
    if at.along_m + sample_m <= line_length_m(line) {
        if let Some(ahead) = point_along(line, at.along_m + sample_m) {
            if ahead != at.point {
                return Some(bearing_deg(at.point, ahead));
            }
        }
    }
    if let Some(behind) = point_along(line, at.along_m - sample_m) {
        if behind != at.point {
            return Some(bearing_deg(behind, at.point));
        }
    }
    let (first, last) = (line.first_point(), line.last_point());
    (first != last).then(|| bearing_deg(first, last))
}

/// Pick the line with the shortest ride among those that pass [`evaluate`].
///
/// Ties keep the line that comes first.
pub fn select_line<'a, I>(
    lines: I,
    current: Point,
    destination: Point,
    config: &PlannerConfig,
) -> Option<Candidate<'a>>
where
    I: IntoIterator<Item = &'a LineFeature>,
{
    let mut best: Option<Candidate<'a>> = None;
    for line in lines {
        match evaluate(line, current, destination, config) {
            Ok(candidate) => {
                if best.is_none_or(|b| candidate.on_line_m < b.on_line_m) {
                    best = Some(candidate);
                }
            }
            Err(reason) => {
                trace!(mode = %line.mode(), line = ?line.name(), %reason, "line rejected");
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransportMode;

    fn pt(lon: f64, lat: f64) -> Point {
        Point::new(lon, lat).unwrap()
    }

    fn line(mode: TransportMode, coords: &[(f64, f64)]) -> LineFeature {
        let points: Vec<Point> = coords.iter().map(|&(lon, lat)| pt(lon, lat)).collect();
        LineFeature::new(mode, &points).unwrap()
    }

    fn config() -> PlannerConfig {
        PlannerConfig::default()
    }

    #[test]
    fn accepts_line_toward_destination() {
        let north = line(TransportMode::Bus, &[(121.0, 14.50), (121.0, 14.52)]);
        let c = evaluate(&north, pt(121.0, 14.50), pt(121.0, 14.515), &config()).unwrap();

        assert_eq!(c.entry.along_m, 0.0);
        assert!((c.on_line_m - 1668.0).abs() < 5.0, "got {}", c.on_line_m);
    }

    #[test]
    fn rejects_rider_far_from_line() {
        let north = line(TransportMode::Mrt, &[(121.0, 14.50), (121.0, 14.52)]);
        // ~200 m west of the line
        let err = evaluate(&north, pt(120.998_15, 14.505), pt(121.0, 14.515), &config()).unwrap_err();
        assert!(matches!(err, Rejection::TooFarFromLine { limit_m, .. } if limit_m == 100.0));
    }

    #[test]
    fn rejects_leg_shorter_than_minimum() {
        let east = line(TransportMode::Mrt, &[(121.0, 14.50), (121.02, 14.50)]);
        // The destination projects ~5 m along from the rider
        let err = evaluate(&east, pt(121.0, 14.50), pt(121.000_05, 14.51), &config()).unwrap_err();
        assert!(matches!(err, Rejection::TooShort(_)));
    }

    #[test]
    fn rejects_leg_without_progress() {
        // The line runs east while the destination is 11 km north: the exit
        // point is still more than 90% as far away as the entry.
        let east = line(TransportMode::Mrt, &[(121.0, 14.50), (121.02, 14.50)]);
        let err = evaluate(&east, pt(121.0, 14.50), pt(121.001, 14.60), &config()).unwrap_err();
        match err {
            Rejection::NoProgress { before_m, after_m } => {
                assert!(after_m >= 0.9 * before_m);
            }
            other => panic!("expected NoProgress, got {other:?}"),
        }
    }

    #[test]
    fn rejects_road_line_heading_away() {
        // Drawn southbound; the rider wants to go north
        let south = line(TransportMode::Jeep, &[(121.0, 14.52), (121.0, 14.50)]);
        let err = evaluate(&south, pt(121.0, 14.505), pt(121.0, 14.515), &config()).unwrap_err();
        assert!(matches!(err, Rejection::WrongBearing(d) if d > 170.0));
    }

    #[test]
    fn rail_ignores_bearing() {
        let south = line(TransportMode::Lrt1, &[(121.0, 14.52), (121.0, 14.50)]);
        let c = evaluate(&south, pt(121.0, 14.505), pt(121.0, 14.515), &config()).unwrap();
        assert!(c.exit.along_m < c.entry.along_m);
    }

    #[test]
    fn point_to_point_ignores_bearing() {
        // Leaves southbound before swinging north-east to the destination
        let coords = [(121.0, 14.50), (121.0, 14.49), (121.02, 14.56)];
        let destination = pt(121.02, 14.565);

        let bus = line(TransportMode::Bus, &coords);
        let err = evaluate(&bus, pt(121.0, 14.50), destination, &config()).unwrap_err();
        assert!(matches!(err, Rejection::WrongBearing(d) if d > 150.0));

        let p2p = line(TransportMode::P2pBus, &coords);
        let c = evaluate(&p2p, pt(121.0, 14.50), destination, &config()).unwrap();
        assert_eq!(c.exit.point, pt(121.02, 14.56));
    }

    /// Up one street and back down the next, 540 m apart.
    fn hairpin(mode: TransportMode) -> LineFeature {
        line(
            mode,
            &[(121.0, 14.50), (121.0, 14.52), (121.005, 14.52), (121.005, 14.50)],
        )
    }

    #[test]
    fn one_way_line_cannot_be_ridden_backwards() {
        // Rider on the southbound street, destination nearest the start of
        // the northbound one.
        let bus = hairpin(TransportMode::Bus);
        let err = evaluate(&bus, pt(121.005, 14.51), pt(121.0, 14.49), &config()).unwrap_err();
        assert_eq!(err, Rejection::Backwards);

        let mrt = hairpin(TransportMode::Mrt);
        let c = evaluate(&mrt, pt(121.005, 14.51), pt(121.0, 14.49), &config()).unwrap();
        assert_eq!(c.exit.along_m, 0.0);
    }

    #[test]
    fn point_to_point_uses_termini() {
        let p2p = line(
            TransportMode::P2pBus,
            &[(121.0, 14.50), (121.0, 14.52), (121.0, 14.55)],
        );
        // ~75 m from the first vertex
        let c = evaluate(&p2p, pt(121.0005, 14.5005), pt(121.0, 14.56), &config()).unwrap();
        assert_eq!(c.entry.point, pt(121.0, 14.50));
        assert_eq!(c.exit.point, pt(121.0, 14.55));
        assert!((c.on_line_m - line_length_m(&p2p)).abs() < 1e-6);

        // Boarding in the middle of the route is not possible
        let err = evaluate(&p2p, pt(121.0, 14.52), pt(121.0, 14.56), &config()).unwrap_err();
        assert!(matches!(err, Rejection::TooFarFromLine { limit_m, .. } if limit_m == 200.0));
    }

    #[test]
    fn selects_shortest_ride() {
        let detour = line(
            TransportMode::Mrt,
            &[(121.0, 14.50), (121.004, 14.51), (121.0, 14.52)],
        );
        let direct = line(TransportMode::Mrt, &[(121.0, 14.50), (121.0, 14.52)]);
        let lines = [detour, direct];

        let best = select_line(&lines, pt(121.0, 14.50), pt(121.0, 14.52), &config()).unwrap();
        assert!(std::ptr::eq(best.line, &lines[1]));
    }

    #[test]
    fn equal_rides_keep_first_line() {
        let a = line(TransportMode::Mrt, &[(121.0, 14.50), (121.0, 14.52)]).with_name("A");
        let b = line(TransportMode::Mrt, &[(121.0, 14.50), (121.0, 14.52)]).with_name("B");
        let lines = [a, b];

        let best = select_line(&lines, pt(121.0, 14.50), pt(121.0, 14.52), &config()).unwrap();
        assert_eq!(best.line.name(), Some("A"));
    }

    #[test]
    fn nothing_qualifies() {
        let east = line(TransportMode::Mrt, &[(121.0, 14.50), (121.02, 14.50)]);
        assert!(select_line([&east], pt(121.0, 14.50), pt(121.001, 14.60), &config()).is_none());
        assert!(select_line(std::iter::empty(), pt(121.0, 14.50), pt(121.0, 14.6), &config()).is_none());
    }
}
