//! Itinerary ranking.

use crate::domain::Itinerary;

/// Rank itineraries by preference.
///
/// Itineraries are ranked by:
/// 1. Total duration (shorter is better)
/// 2. Total fare (cheaper is better)
///
/// The sort is stable, so itineraries equal on both keep their order.
pub fn rank_itineraries(mut itineraries: Vec<Itinerary>) -> Vec<Itinerary> {
    itineraries.sort_by(|a, b| {
        a.total_duration_s()
            .total_cmp(&b.total_duration_s())
            .then_with(|| a.total_fare().total_cmp(&b.total_fare()))
    });
    itineraries
}
