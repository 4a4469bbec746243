//! Caching layer for walking routes.
//!
//! Many itinerary requests share origins, destinations and stops, so the
//! same walking connector is requested repeatedly. Routes are cached by
//! their endpoints, snapped to a small grid so that coordinates differing
//! only in float noise share an entry.
//!
//! Only successful routes are cached; a failure is retried next time.

use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::trace;

use crate::domain::Point;
use crate::planner::WalkingRouter;
use crate::routing::{DrivingRoute, RoutingClient, RoutingError, WalkingRoute};

/// Cache key for walking routes: quantised (from lon, from lat, to lon, to lat).
type RouteKey = (i64, i64, i64, i64);

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,

    /// Grid size in degrees for snapping endpoints (1e-5° is about a meter).
    pub quantum_deg: f64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(10 * 60),
            max_capacity: 10_000,
            quantum_deg: 1e-5,
        }
    }
}

/// Cache for walking routes.
pub struct RouteCache {
    routes: MokaCache<RouteKey, WalkingRoute>,

    quantum_deg: f64,
}

impl RouteCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self {
            routes,
            quantum_deg: config.quantum_deg,
        }
    }

    fn snap(&self, degrees: f64) -> i64 {
        (degrees / self.quantum_deg).round() as i64
    }

    /// The cache key for a route between two points.
    fn key(&self, from: Point, to: Point) -> RouteKey {
        (
            self.snap(from.lon()),
            self.snap(from.lat()),
            self.snap(to.lon()),
            self.snap(to.lat()),
        )
    }

    /// Get a cached route.
    pub async fn get(&self, from: Point, to: Point) -> Option<WalkingRoute> {
        self.routes.get(&self.key(from, to)).await
    }

    /// Insert a route into the cache.
    pub async fn insert(&self, from: Point, to: Point, route: WalkingRoute) {
        self.routes.insert(self.key(from, to), route).await;
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.routes.invalidate_all();
    }
}

/// Router with caching.
///
/// Wraps a walking router (normally a `RoutingClient`) and caches the
/// walking routes it returns.
pub struct CachedRoutingClient<R = RoutingClient> {
    client: R,
    cache: RouteCache,
}

impl<R: WalkingRouter> CachedRoutingClient<R> {
    /// Create a new cached client.
    pub fn new(client: R, cache_config: &CacheConfig) -> Self {
        Self {
            client,
            cache: RouteCache::new(cache_config),
        }
    }

    /// Get a walking route, using the cache if available.
    pub async fn walking_route(&self, from: Point, to: Point) -> Result<WalkingRoute, RoutingError> {
        if let Some(cached) = self.cache.get(from, to).await {
            trace!(%from, %to, "walking route cache hit");
            return Ok(cached);
        }

        let route = self.client.walking_route(from, to).await?;
        self.cache.insert(from, to, route.clone()).await;
        Ok(route)
    }

    /// Access the underlying client for operations that bypass cache.
    pub fn client(&self) -> &R {
        &self.client
    }

    /// Invalidate all cached entries.
    pub fn invalidate_cache(&self) {
        self.cache.invalidate_all();
    }
}

impl CachedRoutingClient<RoutingClient> {
    /// Driving directions. Driving routes are requested once per itinerary
    /// request and are not cached.
    pub async fn driving_route(&self, from: Point, to: Point) -> Result<DrivingRoute, RoutingError> {
        self.client.driving_route(from, to).await
    }
}

impl<R: WalkingRouter + Sync> WalkingRouter for CachedRoutingClient<R> {
    async fn walking_route(&self, from: Point, to: Point) -> Result<WalkingRoute, RoutingError> {
        CachedRoutingClient::walking_route(self, from, to).await
    }
}
