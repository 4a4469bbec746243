use std::net::SocketAddr;

use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use itinerary_server::cache::{CacheConfig, CachedRoutingClient};
use itinerary_server::domain::TransitNetwork;
use itinerary_server::planner::PlannerConfig;
use itinerary_server::routing::{RoutingClient, RoutingConfig};
use itinerary_server::web::{AppState, create_router};

const DEFAULT_NETWORK_PATH: &str = "data/sample_network.geojson";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load the transit network (fail fast if unavailable)
    let network_path =
        std::env::var("NETWORK_PATH").unwrap_or_else(|_| DEFAULT_NETWORK_PATH.to_string());
    let network =
        TransitNetwork::from_geojson_file(&network_path).expect("Failed to load transit network");
    for (mode, (lines, stops)) in network.summary() {
        info!(%mode, lines, stops, "network loaded");
    }

    // Create the routing client if we have credentials
    let routing = match std::env::var("ROUTING_API_KEY") {
        Ok(api_key) => {
            let mut config = RoutingConfig::new(api_key);
            if let Ok(base_url) = std::env::var("ROUTING_BASE_URL") {
                config = config.with_base_url(base_url);
            }
            let client = RoutingClient::new(config).expect("Failed to create routing client");
            Some(CachedRoutingClient::new(client, &CacheConfig::default()))
        }
        Err(_) => {
            warn!("ROUTING_API_KEY not set; only caller-supplied driving routes will be answered");
            None
        }
    };

    // Build app state
    let state = AppState::new(network, PlannerConfig::default(), routing);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()
        .expect("BIND_ADDR is not a valid socket address");
    info!(network = %network_path, "itinerary planner listening on http://{addr}");
    info!("API endpoints: GET /health, GET /network, POST /itineraries");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
