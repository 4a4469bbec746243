//! Multi-modal itinerary planner server.
//!
//! Given a driving route between two points, answers: "which public
//! transport options could I take instead, and how do they compare?"

pub mod cache;
pub mod domain;
pub mod network;
pub mod planner;
pub mod routing;
pub mod web;
