//! Mode groups: the transit modes evaluated together as one attempt.

use crate::domain::{StopKind, TransportMode};

/// One or more modes planned as a single itinerary attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct ModeGroup {
    name: String,
    modes: Vec<TransportMode>,
    stop_kinds: Vec<StopKind>,
    boards_anywhere: bool,
}

impl ModeGroup {
    /// A group whose riders board at a stop of one of the group's modes.
    pub fn new(name: impl Into<String>, modes: Vec<TransportMode>) -> Self {
        let stop_kinds = modes.iter().copied().filter_map(StopKind::of).collect();
        Self {
            name: name.into(),
            modes,
            stop_kinds,
            boards_anywhere: false,
        }
    }

    /// A group that can be boarded anywhere along its lines and has no
    /// stop data of its own.
    ///
    /// Jeepney data carries no stops; whether jeepneys are truly hailable
    /// anywhere or the stop data is just missing is a property of the data
    /// set, so it is configured here rather than inferred.
    pub fn boarding_anywhere(name: impl Into<String>, modes: Vec<TransportMode>) -> Self {
        Self {
            name: name.into(),
            modes,
            stop_kinds: Vec::new(),
            boards_anywhere: true,
        }
    }

    /// The five groups planned by default: MRT, LRT-1, LRT-2, buses
    /// (regular and point-to-point together) and jeepneys.
    pub fn defaults() -> Vec<ModeGroup> {
        vec![
            ModeGroup::new("MRT", vec![TransportMode::Mrt]),
            ModeGroup::new("LRT1", vec![TransportMode::Lrt1]),
            ModeGroup::new("LRT2", vec![TransportMode::Lrt2]),
            ModeGroup::new("Bus", vec![TransportMode::Bus, TransportMode::P2pBus]),
            ModeGroup::boarding_anywhere("Jeep", vec![TransportMode::Jeep]),
        ]
    }

    /// Group name, used in logs.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Line modes in this group.
    pub fn modes(&self) -> &[TransportMode] {
        &self.modes
    }

    /// Stop types riders of this group use.
    pub fn stop_kinds(&self) -> &[StopKind] {
        &self.stop_kinds
    }

    /// Whether a boarding stop must be found before riding.
    pub fn requires_boarding_stop(&self) -> bool {
        !self.boards_anywhere
    }
}
