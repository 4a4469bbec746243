//! Nearest-stop search.

use tracing::trace;

use crate::domain::{Point, StopFeature, StopKind};

use super::geometry::distance_m;

/// A stop and its great-circle distance from the search point.
#[derive(Debug, Clone, Copy)]
pub struct NearestStop<'a> {
    pub stop: &'a StopFeature,
    pub distance_m: f64,
}

impl<'a> NearestStop<'a> {
    /// Keep the result only if it lies within `radius_m` (inclusive).
    pub fn within(self, radius_m: f64) -> Option<NearestStop<'a>> {
        (self.distance_m <= radius_m).then_some(self)
    }
}

/// Find the stop closest to `reference` among stops of the allowed kinds.
///
/// Scans every stop. When two stops are equally close, the one that comes
/// first in `stops` wins. Returns `None` when no stop has an allowed kind,
/// including when `kinds` is empty.
pub fn find_nearest_stop<'a, I>(
    reference: Point,
    stops: I,
    kinds: &[StopKind],
) -> Option<NearestStop<'a>>
where
    I: IntoIterator<Item = &'a StopFeature>,
{
    if kinds.is_empty() {
        trace!("no stop kinds allowed, nothing to search");
        return None;
    }

    let mut best: Option<NearestStop<'a>> = None;
    for stop in stops.into_iter().filter(|s| kinds.contains(&s.kind())) {
        let d = distance_m(reference, stop.point());
        if best.is_none_or(|b| d < b.distance_m) {
            best = Some(NearestStop {
                stop,
                distance_m: d,
            });
        }
    }
    best
}
