//! Transport mode tags.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Suffix that turns a mode tag into its stop tag (`"MRT"` → `"MRT-Stop"`).
const STOP_SUFFIX: &str = "-Stop";

/// Error returned when parsing an unknown mode tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown transport mode tag: {0:?}")]
pub struct UnknownMode(pub String);

/// A way of travelling between two points.
///
/// The six transit variants correspond to the tags used by network
/// features. `Walk` and `Driving` are only ever produced by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TransportMode {
    #[serde(rename = "MRT")]
    Mrt,
    #[serde(rename = "LRT1")]
    Lrt1,
    #[serde(rename = "LRT2")]
    Lrt2,
    #[serde(rename = "Bus")]
    Bus,
    #[serde(rename = "P2P-Bus")]
    P2pBus,
    #[serde(rename = "Jeep")]
    Jeep,
    #[serde(rename = "Walk")]
    Walk,
    #[serde(rename = "Driving")]
    Driving,
}

impl TransportMode {
    /// All transit modes, in network tag order.
    pub const TRANSIT: [TransportMode; 6] = [
        TransportMode::Mrt,
        TransportMode::Lrt1,
        TransportMode::Lrt2,
        TransportMode::Bus,
        TransportMode::P2pBus,
        TransportMode::Jeep,
    ];

    /// Parse a mode tag.
    ///
    /// A trailing `-Stop` is stripped first, so stop tags resolve to the
    /// mode they serve.
    ///
    /// ```
    /// use itinerary_server::domain::TransportMode;
    ///
    /// assert_eq!(TransportMode::from_tag("LRT1"), Ok(TransportMode::Lrt1));
    /// assert_eq!(TransportMode::from_tag("P2P-Bus-Stop"), Ok(TransportMode::P2pBus));
    /// assert!(TransportMode::from_tag("Ferry").is_err());
    /// ```
    pub fn from_tag(tag: &str) -> Result<Self, UnknownMode> {
        let base = tag.strip_suffix(STOP_SUFFIX).unwrap_or(tag);
        match base {
            "MRT" => Ok(TransportMode::Mrt),
            "LRT1" => Ok(TransportMode::Lrt1),
            "LRT2" => Ok(TransportMode::Lrt2),
            "Bus" => Ok(TransportMode::Bus),
            "P2P-Bus" => Ok(TransportMode::P2pBus),
            "Jeep" => Ok(TransportMode::Jeep),
            "Walk" => Ok(TransportMode::Walk),
            "Driving" => Ok(TransportMode::Driving),
            _ => Err(UnknownMode(tag.to_string())),
        }
    }

    /// The tag used for this mode in network data.
    pub fn tag(&self) -> &'static str {
        match self {
            TransportMode::Mrt => "MRT",
            TransportMode::Lrt1 => "LRT1",
            TransportMode::Lrt2 => "LRT2",
            TransportMode::Bus => "Bus",
            TransportMode::P2pBus => "P2P-Bus",
            TransportMode::Jeep => "Jeep",
            TransportMode::Walk => "Walk",
            TransportMode::Driving => "Driving",
        }
    }

    /// Human-readable name for itinerary labels.
    pub fn display_name(&self) -> &'static str {
        match self {
            TransportMode::Mrt => "MRT",
            TransportMode::Lrt1 => "LRT-1",
            TransportMode::Lrt2 => "LRT-2",
            TransportMode::Bus => "Bus",
            TransportMode::P2pBus => "P2P Bus",
            TransportMode::Jeep => "Jeepney",
            TransportMode::Walk => "Walk",
            TransportMode::Driving => "Car",
        }
    }

    /// Returns true for modes that run on a fixed network of lines.
    pub fn is_transit(&self) -> bool {
        !matches!(self, TransportMode::Walk | TransportMode::Driving)
    }

    /// Returns true for rail modes (MRT, LRT-1, LRT-2).
    pub fn is_rail(&self) -> bool {
        matches!(
            self,
            TransportMode::Mrt | TransportMode::Lrt1 | TransportMode::Lrt2
        )
    }

    /// Returns true for point-to-point services that only stop at their termini.
    pub fn is_point_to_point(&self) -> bool {
        matches!(self, TransportMode::P2pBus)
    }

    /// Returns true for road modes that only run in the line's drawn direction.
    pub fn is_one_way(&self) -> bool {
        matches!(self, TransportMode::Bus | TransportMode::Jeep)
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// The stop type serving a transit mode (e.g. `"MRT-Stop"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopKind(TransportMode);

impl StopKind {
    /// The stop kind for a transit mode. Returns `None` for walking and driving.
    pub fn of(mode: TransportMode) -> Option<Self> {
        mode.is_transit().then_some(StopKind(mode))
    }

    /// Parse a stop tag such as `"LRT2-Stop"`.
    ///
    /// The `-Stop` suffix is required; bare mode tags are rejected.
    pub fn from_tag(tag: &str) -> Result<Self, UnknownMode> {
        if !tag.ends_with(STOP_SUFFIX) {
            return Err(UnknownMode(tag.to_string()));
        }
        let mode = TransportMode::from_tag(tag)?;
        Self::of(mode).ok_or_else(|| UnknownMode(tag.to_string()))
    }

    /// The mode this stop serves.
    pub fn mode(&self) -> TransportMode {
        self.0
    }
}

impl fmt::Display for StopKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0.tag(), STOP_SUFFIX)
    }
}
