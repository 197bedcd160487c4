//! Routes and schedules HTTP client.
//!
//! Provides async methods for querying the operator's route graph and
//! per-month schedule APIs, and adapts them to the planner's source
//! traits. Uses a semaphore to limit concurrent requests.

use std::sync::Arc;

use chrono::NaiveDateTime;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

use crate::domain::{Iata, Route, ScheduledLeg};
use crate::planner::{FetchError, RouteFetchError, RouteSource, TimetableSource};

use super::convert::{months_in_window, project_month};
use super::error::UpstreamError;
use super::types::{MonthTimetable, RouteItem};

/// Default routes API endpoint.
const DEFAULT_ROUTES_URL: &str = "https://services-api.ryanair.com/locate/3/routes";

/// Default schedules API endpoint.
const DEFAULT_SCHEDULES_URL: &str = "https://services-api.ryanair.com/timtbl/3/schedules";

/// Operator whose routes are planned over by default.
const DEFAULT_OPERATOR: &str = "RYANAIR";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Configuration for the upstream client.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Routes API endpoint
    pub routes_url: String,
    /// Schedules API endpoint
    pub schedules_url: String,
    /// Only routes flown by this operator enter the graph
    pub operator: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl UpstreamConfig {
    /// Set a custom routes endpoint (for testing).
    pub fn with_routes_url(mut self, url: impl Into<String>) -> Self {
        self.routes_url = url.into();
        self
    }

    /// Set a custom schedules endpoint (for testing).
    pub fn with_schedules_url(mut self, url: impl Into<String>) -> Self {
        self.schedules_url = url.into();
        self
    }

    /// Set the operator filter.
    pub fn with_operator(mut self, operator: impl Into<String>) -> Self {
        self.operator = operator.into();
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

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            routes_url: DEFAULT_ROUTES_URL.to_string(),
            schedules_url: DEFAULT_SCHEDULES_URL.to_string(),
            operator: DEFAULT_OPERATOR.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }
}

/// Routes and schedules API client.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    routes_url: String,
    schedules_url: String,
    operator: String,
    semaphore: Arc<Semaphore>,
}

impl UpstreamClient {
    /// Create a new client with the given configuration.
    pub fn new(config: UpstreamConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            routes_url: config.routes_url,
            schedules_url: config.schedules_url,
            operator: config.operator,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Fetch the route graph: all direct airport pairs the operator flies.
    ///
    /// Entries served via a connecting airport or flown by another
    /// operator are filtered out; entries with malformed airport codes
    /// are skipped.
    pub async fn get_routes(&self) -> Result<Vec<Route>, UpstreamError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| UpstreamError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        debug!(url = %self.routes_url, "requesting routes");
        let response = self.http.get(&self.routes_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let items: Vec<RouteItem> =
            serde_json::from_str(&body).map_err(|e| UpstreamError::Json {
                message: e.to_string(),
            })?;

        let mut routes = Vec::new();
        for item in items {
            if item.connecting_airport.is_some() {
                continue;
            }
            if item.operator.as_deref() != Some(self.operator.as_str()) {
                continue;
            }

            match (Iata::parse(&item.airport_from), Iata::parse(&item.airport_to)) {
                (Ok(from), Ok(to)) => routes.push(Route::new(from, to)),
                _ => {
                    warn!(
                        from = %item.airport_from,
                        to = %item.airport_to,
                        "skipping route with malformed airport code"
                    );
                }
            }
        }

        Ok(routes)
    }

    /// Fetch the schedule for one airport pair and month.
    pub async fn get_timetable(
        &self,
        from: Iata,
        to: Iata,
        year: i32,
        month: u32,
    ) -> Result<MonthTimetable, UpstreamError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| UpstreamError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let url = format!(
            "{}/{}/{}/years/{}/months/{}",
            self.schedules_url, from, to, year, month
        );

        debug!(url = %url, "requesting schedules");
        let response = self.http.get(&url).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(UpstreamError::NoSchedules {
                from: from.as_str().to_string(),
                to: to.as_str().to_string(),
                year,
                month,
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| UpstreamError::Json {
            message: e.to_string(),
        })
    }
}

impl RouteSource for UpstreamClient {
    async fn fetch_routes(&self) -> Result<Vec<Route>, RouteFetchError> {
        self.get_routes()
            .await
            .map_err(|e| RouteFetchError(e.to_string()))
    }
}

impl TimetableSource for UpstreamClient {
    /// Fetch every month the window spans and project the results onto
    /// absolute instants. A pair with no published timetable for one
    /// month contributes nothing for that month rather than failing the
    /// whole edge.
    async fn fetch_legs(
        &self,
        from: Iata,
        to: Iata,
        window_start: NaiveDateTime,
        window_end: NaiveDateTime,
    ) -> Result<Vec<ScheduledLeg>, FetchError> {
        let mut legs = Vec::new();

        for (year, month) in months_in_window(window_start, window_end) {
            match self.get_timetable(from, to, year, month).await {
                Ok(timetable) => {
                    legs.extend(project_month(&timetable, year, month, window_start, window_end));
                }
                Err(UpstreamError::NoSchedules { .. }) => continue,
                Err(e) => {
                    return Err(FetchError {
                        from,
                        to,
                        message: e.to_string(),
                    });
                }
            }
        }

        legs.sort_by_key(|leg| leg.departure);
        Ok(legs)
    }
}
