//! Per-mode travel-time estimates for transit legs.
//!
//! Walking and driving durations come from the routing service and never
//! pass through this model.

use crate::domain::TransportMode;

/// Waiting and transfer allowance added to every transit estimate (seconds).
pub const WAIT_ALLOWANCE_S: f64 = 300.0;

/// Average running speed of a transit mode, in km/h.
pub fn average_speed_kph(mode: TransportMode) -> Option<f64> {
    match mode {
        TransportMode::Jeep => Some(20.0),
        TransportMode::Bus => Some(30.0),
        TransportMode::P2pBus => Some(36.0),
        TransportMode::Lrt1 | TransportMode::Lrt2 => Some(60.0),
        TransportMode::Mrt => Some(45.0),
        TransportMode::Walk | TransportMode::Driving => None,
    }
}

/// Estimated seconds to travel `distance_m` on `mode`, including the wait
/// allowance.
///
/// Modes without a known speed get the allowance alone.
///
/// ```
/// use itinerary_server::domain::TransportMode;
/// use itinerary_server::planner::estimate_duration_s;
///
/// // 10 km by jeepney at 20 km/h, plus five minutes' wait
/// assert_eq!(estimate_duration_s(TransportMode::Jeep, 10_000.0), 2100.0);
/// ```
pub fn estimate_duration_s(mode: TransportMode, distance_m: f64) -> f64 {
    let Some(speed) = average_speed_kph(mode) else {
        return WAIT_ALLOWANCE_S;
    };
    let travel = if distance_m > 0.0 {
        (distance_m / 1000.0) / speed * 3600.0
    } else {
        0.0
    };
    travel + WAIT_ALLOWANCE_S
}

/// Like [`estimate_duration_s`], but keyed by a raw network tag.
///
/// Stop tags (`"MRT-Stop"`) reuse their parent mode's speed; unknown tags
/// get the allowance alone.
pub fn estimate_duration_for_tag(tag: &str, distance_m: f64) -> f64 {
    match TransportMode::from_tag(tag) {
        Ok(mode) => estimate_duration_s(mode, distance_m),
        Err(_) => WAIT_ALLOWANCE_S,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn jeep_ten_km() {
        assert_eq!(estimate_duration_s(TransportMode::Jeep, 10_000.0), 2100.0);
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn per_mode_speeds() {
        // 30 km/h: 15 km takes 30 minutes
        assert_close(estimate_duration_s(TransportMode::Bus, 15_000.0), 1800.0 + 300.0);
        // 36 km/h: 18 km takes 30 minutes
        assert_close(estimate_duration_s(TransportMode::P2pBus, 18_000.0), 1800.0 + 300.0);
        // 60 km/h: 10 km takes 10 minutes
        assert_close(estimate_duration_s(TransportMode::Lrt1, 10_000.0), 600.0 + 300.0);
        assert_close(estimate_duration_s(TransportMode::Lrt2, 10_000.0), 600.0 + 300.0);
        // 45 km/h: 15 km takes 20 minutes
        assert_close(estimate_duration_s(TransportMode::Mrt, 15_000.0), 1200.0 + 300.0);
    }

    #[test]
    fn zero_distance_is_wait_only() {
        assert_eq!(estimate_duration_s(TransportMode::Mrt, 0.0), WAIT_ALLOWANCE_S);
        assert_eq!(estimate_duration_s(TransportMode::Mrt, -100.0), WAIT_ALLOWANCE_S);
    }

    #[test]
    fn stop_tags_use_parent_speed() {
        assert_eq!(
            estimate_duration_for_tag("Jeep-Stop", 10_000.0),
            estimate_duration_s(TransportMode::Jeep, 10_000.0)
        );
        assert_eq!(
            estimate_duration_for_tag("MRT", 15_000.0),
            estimate_duration_s(TransportMode::Mrt, 15_000.0)
        );
    }

    #[test]
    fn unknown_modes_get_allowance_only() {
        assert_eq!(estimate_duration_for_tag("Ferry", 10_000.0), WAIT_ALLOWANCE_S);
        assert_eq!(estimate_duration_s(TransportMode::Walk, 10_000.0), WAIT_ALLOWANCE_S);
    }

    proptest! {
        #[test]
        fn transit_estimate_includes_wait(d in -1_000.0f64..100_000.0) {
            for mode in TransportMode::TRANSIT {
                prop_assert!(estimate_duration_s(mode, d) >= WAIT_ALLOWANCE_S);
            }
        }
    }
}
