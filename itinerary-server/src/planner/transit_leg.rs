//! One itinerary attempt for one mode group.
//!
//! The attempt is a short pipeline: walk to a boarding stop, pick a line,
//! decide where to get off, ride, walk to the destination. Any step can
//! abandon the attempt; an abandoned attempt yields no itinerary and never
//! affects other attempts.

use std::fmt;

use tracing::{debug, warn};

use crate::domain::{
    DomainError, Itinerary, LineFeature, Point, Segment, StopFeature, StopKind, TransitNetwork,
};
use crate::routing::RoutingError;

use super::config::PlannerConfig;
use super::duration::estimate_duration_s;
use super::fare::fare;
use super::mode_group::ModeGroup;
use super::nearest::find_nearest_stop;
use super::orchestrator::WalkingRouter;
use super::selector::{Candidate, select_line};

/// Which walking connector of an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WalkLeg {
    ToBoarding,
    ToDestination,
}

impl fmt::Display for WalkLeg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalkLeg::ToBoarding => f.write_str("walk to the boarding stop"),
            WalkLeg::ToDestination => f.write_str("walk to the destination"),
        }
    }
}

/// Why an attempt produced nothing.
#[derive(Debug, thiserror::Error)]
enum Abandoned {
    #[error("no boarding stop within {radius_m:.0} m of the origin")]
    NoBoardingStop { radius_m: f64 },

    #[error("{leg} failed: {source}")]
    WalkFailed {
        leg: WalkLeg,
        #[source]
        source: RoutingError,
    },

    #[error("{leg} is {distance_m:.0} m (limit {limit_m:.0} m)")]
    WalkTooLong {
        leg: WalkLeg,
        distance_m: f64,
        limit_m: f64,
    },

    #[error("no line qualifies")]
    NoLine,

    #[error(transparent)]
    Invalid(#[from] DomainError),
}

/// Where the rider gets off.
#[derive(Debug, Clone, PartialEq)]
struct Alighting {
    point: Point,
    /// `None` when no stop could be named
    name: Option<String>,
}

impl Alighting {
    fn describe(&self) -> &str {
        self.name.as_deref().unwrap_or("area near destination")
    }
}

/// Builds at most one itinerary for one mode group.
pub struct TransitLegBuilder<'a, R> {
    network: &'a TransitNetwork,
    config: &'a PlannerConfig,
    group: &'a ModeGroup,
    router: &'a R,
}

impl<'a, R: WalkingRouter> TransitLegBuilder<'a, R> {
    pub fn new(
        network: &'a TransitNetwork,
        config: &'a PlannerConfig,
        group: &'a ModeGroup,
        router: &'a R,
    ) -> Self {
        Self {
            network,
            config,
            group,
            router,
        }
    }

    /// Run the attempt. Returns `None` if it was abandoned.
    pub async fn build(self, origin: Point, destination: Point) -> Option<Itinerary> {
        match self.try_build(origin, destination).await {
            Ok(itinerary) => {
                debug!(
                    group = self.group.name(),
                    minutes = itinerary.total_minutes(),
                    fare = itinerary.total_fare(),
                    "itinerary built"
                );
                Some(itinerary)
            }
            Err(reason) => {
                debug!(group = self.group.name(), %reason, "attempt abandoned");
                None
            }
        }
    }

    async fn try_build(&self, origin: Point, destination: Point) -> Result<Itinerary, Abandoned> {
        let (boarding, boarding_walk) = if self.group.requires_boarding_stop() {
            let (stop, walk) = self.board(origin).await?;
            (Some(stop), Some(walk))
        } else {
            (None, None)
        };

        let current = boarding.map_or(origin, StopFeature::point);
        let candidate = select_line(
            self.network.lines_of(self.group.modes()),
            current,
            destination,
            self.config,
        )
        .ok_or(Abandoned::NoLine)?;

        let alighting = self.alight(&candidate, boarding);
        let stops = stop_sequence(
            candidate.line,
            boarding.map(StopFeature::name),
            alighting.name.as_deref(),
        );
        let ride = ride_segment(&candidate, current, boarding, &alighting, stops);

        let final_walk = self
            .walk(
                alighting.point,
                destination,
                WalkLeg::ToDestination,
                "Walk to destination".to_string(),
            )
            .await?;

        let segments = boarding_walk
            .into_iter()
            .chain([ride, final_walk])
            .collect();
        Ok(Itinerary::new(candidate.line.mode(), segments)?)
    }

    /// Find the boarding stop and walk to it.
    async fn board(&self, origin: Point) -> Result<(&'a StopFeature, Segment), Abandoned> {
        let radius_m = self.config.boarding_radius_m;
        let stop = find_nearest_stop(origin, self.network.stops(), self.group.stop_kinds())
            .and_then(|found| found.within(radius_m))
            .ok_or(Abandoned::NoBoardingStop { radius_m })?
            .stop;

        let walk = self
            .walk(
                origin,
                stop.point(),
                WalkLeg::ToBoarding,
                format!("Walk to {}", stop.name()),
            )
            .await?;
        Ok((stop, walk))
    }

    /// Request a walking connector and check it against its limit.
    async fn walk(
        &self,
        from: Point,
        to: Point,
        leg: WalkLeg,
        label: String,
    ) -> Result<Segment, Abandoned> {
        let limit_m = match leg {
            WalkLeg::ToBoarding => self.config.max_boarding_walk_m(),
            WalkLeg::ToDestination => self.config.max_final_walk_m(),
        };

        let route = match self.router.walking_route(from, to).await {
            Ok(route) => route,
            Err(RoutingError::NoRoute) => {
                return Err(Abandoned::WalkFailed {
                    leg,
                    source: RoutingError::NoRoute,
                });
            }
            Err(source) => {
                warn!(group = self.group.name(), %leg, error = %source, "routing service failed");
                return Err(Abandoned::WalkFailed { leg, source });
            }
        };

        if route.distance_m > limit_m {
            return Err(Abandoned::WalkTooLong {
                leg,
                distance_m: route.distance_m,
                limit_m,
            });
        }

        Ok(Segment::walk(
            label,
            route.distance_m,
            route.duration_s,
            route.geometry,
        ))
    }

    /// Decide where to get off the chosen line.
    ///
    /// The boarding stop is never an alighting stop. A point-to-point line
    /// only stops at the termini named in its own stop list.
    fn alight(&self, candidate: &Candidate<'_>, boarding: Option<&StopFeature>) -> Alighting {
        let line = candidate.line;
        let kinds: Vec<StopKind> = self
            .group
            .stop_kinds()
            .iter()
            .copied()
            .filter(|kind| kind.mode() == line.mode())
            .collect();
        let point_to_point = line.mode().is_point_to_point();
        let stops = self.network.stops().iter().filter(|stop| {
            boarding != Some(*stop) && (!point_to_point || serves(line, stop))
        });
        let nearby = find_nearest_stop(candidate.exit.point, stops, &kinds)
            .and_then(|found| found.within(self.config.alighting_radius_m));

        match nearby {
            Some(found) => Alighting {
                point: found.stop.point(),
                name: Some(found.stop.name().to_string()),
            },
            // A point-to-point service always ends at its terminus
            None if point_to_point => Alighting {
                point: candidate.exit.point,
                name: line
                    .stop_names()
                    .and_then(|names| far_terminal(names, boarding.map(StopFeature::name)))
                    .cloned(),
            },
            None => Alighting {
                point: candidate.exit.point,
                name: None,
            },
        }
    }
}

/// Whether `stop` is named in the stop list of `line`.
fn serves(line: &LineFeature, stop: &StopFeature) -> bool {
    line.stop_names()
        .is_some_and(|names| names.iter().any(|name| name == stop.name()))
}

/// The end of a point-to-point stop list opposite the boarding terminal.
///
/// Stop lists may run either way along the line, so the boarding name is
/// what fixes the direction. `None` without a boarding name that matches
/// exactly one end.
fn far_terminal<'n>(names: &'n [String], boarding: Option<&str>) -> Option<&'n String> {
    let (first, last) = (names.first()?, names.last()?);
    match boarding? {
        b if b == first.as_str() && b != last.as_str() => Some(last),
        b if b == last.as_str() && b != first.as_str() => Some(first),
        _ => None,
    }
}

/// The authored stops between boarding and alighting, inclusive, in travel
/// order. `None` unless both names appear in the line's stop list.
fn stop_sequence(
    line: &LineFeature,
    boarding: Option<&str>,
    alighting: Option<&str>,
) -> Option<Vec<String>> {
    let names = line.stop_names()?;
    let (boarding, alighting) = (boarding?, alighting?);
    let from = names.iter().position(|n| n == boarding)?;
    let to = names.iter().position(|n| n == alighting)?;

    if from <= to {
        Some(names[from..=to].to_vec())
    } else {
        Some(names[to..=from].iter().rev().cloned().collect())
    }
}

/// The transit segment for a chosen line.
///
/// The on-line distance is priced and timed; the drawn path also joins the
/// boarding point and alighting stop so consecutive segments meet.
fn ride_segment(
    candidate: &Candidate<'_>,
    current: Point,
    boarding: Option<&StopFeature>,
    alighting: &Alighting,
    stops: Option<Vec<String>>,
) -> Segment {
    let line = candidate.line;
    let mode = line.mode();
    let distance_m = candidate.on_line_m;

    let mut geometry = vec![current];
    for point in super::geometry::slice(line, &candidate.entry, &candidate.exit)
        .into_iter()
        .chain([alighting.point])
    {
        if geometry.last() != Some(&point) {
            geometry.push(point);
        }
    }

    let from = boarding.map_or("origin", StopFeature::name);
    let label = match line.name() {
        Some(name) => format!(
            "{} ({name}) from {from} to {}",
            mode.display_name(),
            alighting.describe()
        ),
        None => format!(
            "{} from {from} to {}",
            mode.display_name(),
            alighting.describe()
        ),
    };

    Segment::transit(
        mode,
        label,
        distance_m,
        estimate_duration_s(mode, distance_m),
        fare(mode, distance_m),
        geometry,
        stops,
    )
}
