//! Web layer for the itinerary planner.
//!
//! Provides JSON endpoints for building itineraries and inspecting the
//! loaded network.

mod dto;
mod error;
mod routes;
mod state;

pub use dto::*;
pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
