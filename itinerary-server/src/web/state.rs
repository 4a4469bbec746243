//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedRoutingClient;
use crate::domain::TransitNetwork;
use crate::planner::PlannerConfig;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Transit network, loaded once at start-up
    pub network: Arc<TransitNetwork>,

    /// Itinerary planner configuration
    pub config: Arc<PlannerConfig>,

    /// Cached routing client; `None` when no routing service is configured
    pub routing: Option<Arc<CachedRoutingClient>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        network: TransitNetwork,
        config: PlannerConfig,
        routing: Option<CachedRoutingClient>,
    ) -> Self {
        Self {
            network: Arc::new(network),
            config: Arc::new(config),
            routing: routing.map(Arc::new),
        }
    }
}
