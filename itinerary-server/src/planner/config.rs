//! Tunables for the itinerary planner.

use super::mode_group::ModeGroup;

/// Configuration parameters for itinerary construction.
///
/// Distances are in meters. The defaults reproduce the thresholds the
/// planner was calibrated with for Metro Manila.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Maximum perpendicular distance between a point and a line for the
    /// point to count as "on" the line.
    pub stop_proximity_m: f64,

    /// Point-to-point services are boarded at their first vertex only;
    /// the allowed distance to it is the proximity threshold times this.
    pub point_to_point_entry_factor: f64,

    /// Entry and exit closer than this make no meaningful leg.
    pub min_leg_m: f64,

    /// Minimum share of the remaining distance a leg must remove (0.1 = 10%).
    pub min_progress_ratio: f64,

    /// How far along the line to sample its local direction.
    pub bearing_sample_m: f64,

    /// Maximum angle between a line's direction and the destination (degrees).
    pub max_bearing_diff_deg: f64,

    /// Search radius for the boarding stop around the origin.
    pub boarding_radius_m: f64,

    /// Walking connectors to the boarding stop may exceed the radius by
    /// this factor (the street path is longer than the straight line).
    pub boarding_walk_factor: f64,

    /// Search radius for a named stop around the exit point.
    pub alighting_radius_m: f64,

    /// Limit for the final walk, as a multiple of `boarding_radius_m`.
    pub final_walk_factor: f64,

    /// One itinerary attempt is made per group.
    pub mode_groups: Vec<ModeGroup>,
}

impl PlannerConfig {
    /// Maximum distance a point-to-point entry vertex may be from the rider.
    pub fn point_to_point_entry_m(&self) -> f64 {
        self.stop_proximity_m * self.point_to_point_entry_factor
    }

    /// Longest acceptable walk to the boarding stop.
    pub fn max_boarding_walk_m(&self) -> f64 {
        self.boarding_radius_m * self.boarding_walk_factor
    }

    /// Longest acceptable walk from the alighting point to the destination.
    pub fn max_final_walk_m(&self) -> f64 {
        self.boarding_radius_m * self.final_walk_factor
    }

    /// Replace the mode groups.
    pub fn with_mode_groups(mut self, groups: Vec<ModeGroup>) -> Self {
        self.mode_groups = groups;
        self
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            stop_proximity_m: 100.0,
            point_to_point_entry_factor: 2.0,
            min_leg_m: 10.0,
            min_progress_ratio: 0.1,
            bearing_sample_m: 10.0,
            max_bearing_diff_deg: 80.0,
            boarding_radius_m: 1500.0,
            boarding_walk_factor: 1.1,
            alighting_radius_m: 750.0,
            final_walk_factor: 1.5,
            mode_groups: ModeGroup::defaults(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlannerConfig::default();

        assert_eq!(config.stop_proximity_m, 100.0);
        assert_eq!(config.min_leg_m, 10.0);
        assert_eq!(config.min_progress_ratio, 0.1);
        assert_eq!(config.max_bearing_diff_deg, 80.0);
        assert_eq!(config.boarding_radius_m, 1500.0);
        assert_eq!(config.alighting_radius_m, 750.0);
        assert_eq!(config.mode_groups.len(), 5);
    }

    #[test]
    fn derived_limits() {
        let config = PlannerConfig::default();

        assert_eq!(config.point_to_point_entry_m(), 200.0);
        assert!((config.max_boarding_walk_m() - 1650.0).abs() < 1e-9);
        assert_eq!(config.max_final_walk_m(), 2250.0);
    }

    #[test]
    fn custom_mode_groups() {
        let config = PlannerConfig::default().with_mode_groups(vec![]);
        assert!(config.mode_groups.is_empty());
    }
}
