//! Per-mode fare model.
//!
//! Fares are in Philippine pesos and depend only on mode and distance.

use crate::domain::TransportMode;

/// Jeepney base fare, covering the first 4 km.
const JEEP_BASE: f64 = 13.0;
const JEEP_BASE_KM: f64 = 4.0;
const JEEP_PER_KM: f64 = 1.8;

/// Ordinary bus base fare, covering the first 5 km.
const BUS_BASE: f64 = 15.0;
const BUS_BASE_KM: f64 = 5.0;
const BUS_PER_KM: f64 = 2.65;

/// Point-to-point buses charge one flat fare.
const P2P_FLAT: f64 = 150.0;

/// LRT-1 and LRT-2 boarding charge and per-km rate.
const LRT_BOARDING: f64 = 16.25;
const LRT_PER_KM: f64 = 1.47;

/// MRT distance tiers: (upper bound km inclusive, fare).
const MRT_TIERS: [(f64, f64); 4] = [(3.0, 13.0), (6.0, 16.0), (10.0, 20.0), (14.0, 24.0)];
const MRT_MAX: f64 = 28.0;

/// Fare for travelling `distance_m` meters on `mode`.
///
/// Distances of zero or less are free for every mode, as are walking and
/// driving.
///
/// ```
/// use itinerary_server::domain::TransportMode;
/// use itinerary_server::planner::fare;
///
/// assert_eq!(fare(TransportMode::Jeep, 3_000.0), 13.0);
/// assert_eq!(fare(TransportMode::Mrt, 7_000.0), 20.0);
/// assert_eq!(fare(TransportMode::Walk, 7_000.0), 0.0);
/// ```
pub fn fare(mode: TransportMode, distance_m: f64) -> f64 {
    if distance_m.is_nan() || distance_m <= 0.0 {
        return 0.0;
    }
    let km = distance_m / 1000.0;

    match mode {
        TransportMode::Jeep => jeep_fare(km),
        TransportMode::Bus => bus_fare(km),
        TransportMode::P2pBus => P2P_FLAT,
        TransportMode::Lrt1 | TransportMode::Lrt2 => lrt_fare(km),
        TransportMode::Mrt => mrt_fare(km),
        TransportMode::Walk | TransportMode::Driving => 0.0,
    }
}

fn jeep_fare(km: f64) -> f64 {
    if km <= JEEP_BASE_KM {
        return JEEP_BASE;
    }
    (JEEP_BASE + ((km - JEEP_BASE_KM) * JEEP_PER_KM).ceil()).round()
}

fn bus_fare(km: f64) -> f64 {
    if km <= BUS_BASE_KM {
        return round_to_quarter(BUS_BASE);
    }
    round_to_quarter(BUS_BASE + ((km - BUS_BASE_KM) * BUS_PER_KM).ceil())
}

fn lrt_fare(km: f64) -> f64 {
    (LRT_BOARDING + km.max(0.0) * LRT_PER_KM).round()
}

fn mrt_fare(km: f64) -> f64 {
    MRT_TIERS
        .iter()
        .find(|(limit, _)| km <= *limit)
        .map_or(MRT_MAX, |(_, fare)| *fare)
}

fn round_to_quarter(amount: f64) -> f64 {
    (amount * 4.0).round() / 4.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ALL_MODES: [TransportMode; 8] = [
        TransportMode::Mrt,
        TransportMode::Lrt1,
        TransportMode::Lrt2,
        TransportMode::Bus,
        TransportMode::P2pBus,
        TransportMode::Jeep,
        TransportMode::Walk,
        TransportMode::Driving,
    ];

    fn km(k: f64) -> f64 {
        k * 1000.0
    }

    #[test]
    fn jeep_fares() {
        assert_eq!(fare(TransportMode::Jeep, km(3.0)), 13.0);
        assert_eq!(fare(TransportMode::Jeep, km(4.0)), 13.0);
        assert_eq!(fare(TransportMode::Jeep, km(4.5)), 14.0);
        assert_eq!(fare(TransportMode::Jeep, km(5.0)), 15.0);
        assert_eq!(fare(TransportMode::Jeep, km(10.0)), 24.0);
    }

    #[test]
    fn bus_fares() {
        assert_eq!(fare(TransportMode::Bus, km(2.0)), 15.0);
        assert_eq!(fare(TransportMode::Bus, km(5.0)), 15.0);
        assert_eq!(fare(TransportMode::Bus, km(6.0)), 18.0);
        assert_eq!(fare(TransportMode::Bus, km(10.0)), 29.0);
    }

    #[test]
    fn p2p_is_flat() {
        assert_eq!(fare(TransportMode::P2pBus, 1.0), 150.0);
        assert_eq!(fare(TransportMode::P2pBus, km(40.0)), 150.0);
    }

    #[test]
    fn lrt_fares() {
        assert_eq!(fare(TransportMode::Lrt1, 0.0), 0.0);
        assert_eq!(fare(TransportMode::Lrt1, km(10.0)), 31.0);
        assert_eq!(fare(TransportMode::Lrt2, km(10.0)), 31.0);
        assert_eq!(fare(TransportMode::Lrt2, km(1.0)), 18.0);
    }

    #[test]
    fn mrt_tiers() {
        assert_eq!(fare(TransportMode::Mrt, km(2.0)), 13.0);
        assert_eq!(fare(TransportMode::Mrt, km(3.0)), 13.0);
        assert_eq!(fare(TransportMode::Mrt, km(5.0)), 16.0);
        assert_eq!(fare(TransportMode::Mrt, km(7.0)), 20.0);
        assert_eq!(fare(TransportMode::Mrt, km(14.0)), 24.0);
        assert_eq!(fare(TransportMode::Mrt, km(15.0)), 28.0);
    }

    #[test]
    fn walking_and_driving_are_free() {
        assert_eq!(fare(TransportMode::Walk, km(3.0)), 0.0);
        assert_eq!(fare(TransportMode::Driving, km(30.0)), 0.0);
    }

    #[test]
    fn non_positive_distance_is_free() {
        for mode in ALL_MODES {
            assert_eq!(fare(mode, 0.0), 0.0, "{mode}");
            assert_eq!(fare(mode, -500.0), 0.0, "{mode}");
        }
    }

    proptest! {
        #[test]
        fn fare_is_never_negative(mode_idx in 0usize..8, d in -10_000.0f64..100_000.0) {
            prop_assert!(fare(ALL_MODES[mode_idx], d) >= 0.0);
        }

        #[test]
        fn fare_is_monotonic(mode_idx in 0usize..8, a in -1_000.0f64..60_000.0, b in -1_000.0f64..60_000.0) {
            let mode = ALL_MODES[mode_idx];
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(
                fare(mode, lo) <= fare(mode, hi),
                "{} fare decreased: {} m -> {}, {} m -> {}",
                mode, lo, fare(mode, lo), hi, fare(mode, hi)
            );
        }
    }
}
