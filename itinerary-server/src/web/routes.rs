//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::planner::ItineraryOrchestrator;

use super::dto::*;
use super::error::AppError;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/network", get(network_summary))
        .route("/itineraries", post(plan_itineraries))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Line and stop counts per mode.
async fn network_summary(State(state): State<AppState>) -> Json<NetworkResponse> {
    Json(NetworkResponse::from_network(&state.network))
}

/// Build ranked itineraries for a driving route or a pair of endpoints.
async fn plan_itineraries(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ItinerariesResponse>, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: ItineraryRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "invalid itinerary request");
        AppError::BadRequest {
            message: format!("Invalid request: {e}"),
        }
    })?;

    let route = match req {
        ItineraryRequest::Route { route } => route,
        ItineraryRequest::Endpoints {
            origin,
            destination,
        } => {
            let routing = state
                .routing
                .as_deref()
                .ok_or_else(|| AppError::Unavailable {
                    message: "No routing service configured; send a driving route instead".into(),
                })?;
            routing.driving_route(origin, destination).await?
        }
    };

    let orchestrator = ItineraryOrchestrator::new(&state.network, &state.config);
    let itineraries = orchestrator
        .build_itineraries(&route, state.routing.as_deref())
        .await;
    info!(count = itineraries.len(), "itineraries built");

    Ok(Json(ItinerariesResponse {
        itineraries: itineraries
            .iter()
            .map(ItineraryResult::from_itinerary)
            .collect(),
    }))
}
