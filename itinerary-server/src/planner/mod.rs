//! Itinerary planner.
//!
//! This module implements the engine that answers: "Given this drive from
//! A to B, how could I make the same trip on public transport?"
//!
//! For each mode group the planner walks to a nearby stop, snaps the trip
//! onto the best line of that group, picks where to get off, and walks on
//! to the destination. Fares and ride times come from per-mode models;
//! walking legs come from an external routing service.

mod config;
mod direct;
mod duration;
mod fare;
pub mod geometry;
mod mode_group;
mod nearest;
mod orchestrator;
mod rank;
mod selector;
mod transit_leg;

pub use config::PlannerConfig;
pub use direct::{build_direct, route_endpoints, route_points};
pub use duration::{
    WAIT_ALLOWANCE_S, average_speed_kph, estimate_duration_for_tag, estimate_duration_s,
};
pub use fare::fare;
pub use mode_group::ModeGroup;
pub use nearest::{NearestStop, find_nearest_stop};
pub use orchestrator::{ItineraryOrchestrator, WalkingRouter, build_itineraries};
pub use rank::rank_itineraries;
pub use selector::{Candidate, Rejection, evaluate, select_line};
pub use transit_leg::TransitLegBuilder;
