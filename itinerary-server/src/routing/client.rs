//! Routing-service HTTP client.
//!
//! Provides async methods for querying an OpenRouteService-compatible
//! directions API. Handles authentication, concurrency limiting, and
//! conversion to route types.

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use tokio::sync::Semaphore;
use tracing::debug;

use crate::domain::Point;
use crate::planner::WalkingRouter;

use super::convert::{convert_driving_route, convert_walking_route};
use super::error::RoutingError;
use super::types::{DirectionsRequest, DirectionsResponse, DrivingRoute, WalkingRoute};

/// Default base URL (the public OpenRouteService API).
const DEFAULT_BASE_URL: &str = "https://api.openrouteservice.org";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

const WALKING_PROFILE: &str = "foot-walking";
const DRIVING_PROFILE: &str = "driving-car";

/// Configuration for the routing client.
#[derive(Debug, Clone)]
pub struct RoutingConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL for the API (defaults to public OpenRouteService)
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl RoutingConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (self-hosted instance, or testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Directions API client.
///
/// Uses a semaphore to limit concurrent requests and avoid rate limiting.
#[derive(Debug, Clone)]
pub struct RoutingClient {
    http: reqwest::Client,
    base_url: String,
    semaphore: Arc<Semaphore>,
}

impl RoutingClient {
    /// Create a new client with the given configuration.
    pub fn new(config: RoutingConfig) -> Result<Self, RoutingError> {
        let mut headers = HeaderMap::new();

        let api_key =
            HeaderValue::from_str(&config.api_key).map_err(|_| RoutingError::ApiError {
                status: 0,
                message: "Invalid API key format".to_string(),
            })?;
        headers.insert(AUTHORIZATION, api_key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Walking directions between two points.
    pub async fn walking_route(&self, from: Point, to: Point) -> Result<WalkingRoute, RoutingError> {
        let response = self.directions(WALKING_PROFILE, from, to).await?;
        convert_walking_route(&response)
    }

    /// Driving directions between two points.
    pub async fn driving_route(&self, from: Point, to: Point) -> Result<DrivingRoute, RoutingError> {
        let response = self.directions(DRIVING_PROFILE, from, to).await?;
        convert_driving_route(&response)
    }

    async fn directions(
        &self,
        profile: &str,
        from: Point,
        to: Point,
    ) -> Result<DirectionsResponse, RoutingError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| RoutingError::ApiError {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let url = format!("{}/v2/directions/{}/geojson", self.base_url, profile);
        debug!(%profile, %from, %to, "requesting directions");

        let response = self
            .http
            .post(&url)
            .json(&DirectionsRequest::between(from, to))
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(RoutingError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(RoutingError::RateLimited);
        }

        // ORS answers 404 when either point cannot be snapped to the road network
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RoutingError::NoRoute);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RoutingError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| RoutingError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

impl WalkingRouter for RoutingClient {
    async fn walking_route(&self, from: Point, to: Point) -> Result<WalkingRoute, RoutingError> {
        RoutingClient::walking_route(self, from, to).await
    }
}
