//! Request coordination: fan candidate paths out, merge results.

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use chrono::{Local, NaiveDateTime};
use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::domain::{Itinerary, Route};

use super::assemble::{TimetableSource, assemble_path};
use super::candidates::build_candidates;
use super::config::PlannerConfig;
use super::request::{FlightsRequest, RequestError};

/// Error from a route graph fetch.
#[derive(Debug, Clone, thiserror::Error)]
#[error("failed to fetch route graph: {0}")]
pub struct RouteFetchError(pub String);

/// Trait for providing the operator's route graph.
///
/// This abstraction allows the planner to be tested with mock data.
pub trait RouteSource {
    /// Fetch the full set of airport-pair connections.
    fn fetch_routes(&self) -> impl Future<Output = Result<Vec<Route>, RouteFetchError>> + Send;
}

/// Coordinates one itinerary search across its candidate paths.
///
/// Candidates are assembled concurrently in bounded batches; each
/// assembly owns its result list exclusively and the coordinator merges
/// them only after the batch completes, so no shared collection is
/// mutated across tasks.
pub struct Coordinator<R, T> {
    routes: Arc<R>,
    timetables: Arc<T>,
    config: PlannerConfig,
}

impl<R: RouteSource, T: TimetableSource> Coordinator<R, T> {
    /// Create a new coordinator.
    pub fn new(routes: Arc<R>, timetables: Arc<T>, config: PlannerConfig) -> Self {
        Self {
            routes,
            timetables,
            config,
        }
    }

    /// The planner configuration in use.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Search for itineraries satisfying the request.
    ///
    /// Only request validation surfaces as an error. Upstream failures
    /// degrade: a failed route graph fetch yields an empty result, a
    /// failed timetable fetch drops that one candidate, and nothing is
    /// retried. Results are sorted ascending by stop count; ties keep
    /// the arrival order from their originating candidate.
    pub async fn get_itineraries(
        &self,
        request: &FlightsRequest,
    ) -> Result<Vec<Itinerary>, RequestError> {
        self.get_itineraries_at(request, Local::now().naive_local())
            .await
    }

    /// Like [`get_itineraries`](Self::get_itineraries), with the request
    /// arrival instant supplied by the caller. Validation is relative to
    /// `now`.
    pub async fn get_itineraries_at(
        &self,
        request: &FlightsRequest,
        now: NaiveDateTime,
    ) -> Result<Vec<Itinerary>, RequestError> {
        request.validate(now)?;

        let routes = match self.routes.fetch_routes().await {
            Ok(routes) => routes,
            Err(e) => {
                warn!(error = %e, "route graph fetch failed, treating as no routes");
                return Ok(Vec::new());
            }
        };

        info!(routes = routes.len(), "received route graph");
        if routes.is_empty() {
            return Ok(Vec::new());
        }

        let candidates = build_candidates(request, &routes);
        debug!(candidates = candidates.len(), "built candidate paths");

        let deadline = Instant::now() + self.config.request_timeout();
        let mut merged: Vec<Itinerary> = Vec::new();

        for batch in candidates.chunks(self.config.batch_size.max(1)) {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                warn!("request deadline reached, returning partial results");
                break;
            }

            let assemblies: Vec<_> = batch
                .iter()
                .map(|path| assemble_path(self.timetables.as_ref(), &self.config, request, path))
                .collect();

            match tokio::time::timeout(remaining, join_all(assemblies)).await {
                Ok(results) => {
                    for result in results {
                        merged.extend(result);
                    }
                }
                Err(_) => {
                    warn!("request deadline reached mid-batch, returning partial results");
                    break;
                }
            }
        }

        // Stable sort: within one stop count, per-candidate order is kept.
        merged.sort_by_key(Itinerary::stops);

        info!(itineraries = merged.len(), "finished itinerary search");
        Ok(merged)
    }
}
