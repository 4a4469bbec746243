//! Multi-mode itinerary orchestration.
//!
//! One attempt per mode group runs concurrently against the shared,
//! read-only network. Every attempt is awaited to completion; attempts that
//! abandon contribute nothing. The driving route is added as a fallback and
//! the combined list is ranked once everything has settled, so the order
//! never depends on which attempt finished first.

use std::future::Future;

use futures::future::join_all;
use tracing::{debug, warn};

use crate::domain::{Itinerary, Point, TransitNetwork};
use crate::routing::{DrivingRoute, RoutingError, WalkingRoute};

use super::config::PlannerConfig;
use super::direct::{build_direct, route_endpoints};
use super::rank::rank_itineraries;
use super::transit_leg::TransitLegBuilder;

/// Source of walking connectors.
///
/// This abstraction allows the planner to be tested without a live
/// routing service.
pub trait WalkingRouter {
    /// Walking directions from `from` to `to`.
    fn walking_route(
        &self,
        from: Point,
        to: Point,
    ) -> impl Future<Output = Result<WalkingRoute, RoutingError>> + Send;
}

/// Builds ranked itineraries for a driving route.
#[derive(Debug, Clone, Copy)]
pub struct ItineraryOrchestrator<'a> {
    network: &'a TransitNetwork,
    config: &'a PlannerConfig,
}

impl<'a> ItineraryOrchestrator<'a> {
    pub fn new(network: &'a TransitNetwork, config: &'a PlannerConfig) -> Self {
        Self { network, config }
    }

    /// Build every itinerary that can be built and rank them.
    ///
    /// Without a router only the driving fallback is returned. The result
    /// may be empty.
    pub async fn build_itineraries<R>(
        &self,
        route: &DrivingRoute,
        router: Option<&R>,
    ) -> Vec<Itinerary>
    where
        R: WalkingRouter + Sync,
    {
        let direct = build_direct(route);
        if direct.is_none() {
            warn!("driving route is unusable, no driving fallback");
        }

        let Some(router) = router else {
            debug!("no routing service, returning driving route only");
            return rank_itineraries(direct.into_iter().collect());
        };

        let Some((origin, destination)) = route_endpoints(route) else {
            return rank_itineraries(direct.into_iter().collect());
        };

        let attempts = self.config.mode_groups.iter().map(|group| {
            TransitLegBuilder::new(self.network, self.config, group, router)
                .build(origin, destination)
        });
        let transit = join_all(attempts).await;

        debug!(
            attempts = transit.len(),
            succeeded = transit.iter().flatten().count(),
            "transit attempts settled"
        );

        let itineraries = transit.into_iter().flatten().chain(direct).collect();
        rank_itineraries(itineraries)
    }
}

/// Build ranked itineraries with the default planner configuration.
pub async fn build_itineraries<R>(
    route: &DrivingRoute,
    network: &TransitNetwork,
    router: Option<&R>,
) -> Vec<Itinerary>
where
    R: WalkingRouter + Sync,
{
    let config = PlannerConfig::default();
    ItineraryOrchestrator::new(network, &config)
        .build_itineraries(route, router)
        .await
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
