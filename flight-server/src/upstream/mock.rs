//! In-memory upstream for testing without API access.
//!
//! Serves a hand-built route graph and timetables as if they were live
//! API responses, applying the same window contract as the real client.

use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::domain::{Iata, Route, ScheduledLeg};
use crate::planner::{FetchError, RouteFetchError, RouteSource, TimetableSource};

/// Mock route graph and timetable source backed by in-memory data.
#[derive(Debug, Clone, Default)]
pub struct MockUpstream {
    routes: Vec<Route>,
    schedules: HashMap<(Iata, Iata), Vec<ScheduledLeg>>,
}

impl MockUpstream {
    /// Create an empty mock upstream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route graph edge.
    pub fn add_route(&mut self, from: Iata, to: Iata) {
        self.routes.push(Route::new(from, to));
    }

    /// Add a scheduled flight on a pair.
    pub fn add_leg(&mut self, from: Iata, to: Iata, departure: NaiveDateTime, arrival: NaiveDateTime) {
        self.schedules
            .entry((from, to))
            .or_default()
            .push(ScheduledLeg::new(departure, arrival));
    }
}

impl RouteSource for MockUpstream {
    async fn fetch_routes(&self) -> Result<Vec<Route>, RouteFetchError> {
        Ok(self.routes.clone())
    }
}

impl TimetableSource for MockUpstream {
    async fn fetch_legs(
        &self,
        from: Iata,
        to: Iata,
        window_start: NaiveDateTime,
        window_end: NaiveDateTime,
    ) -> Result<Vec<ScheduledLeg>, FetchError> {
        let mut legs: Vec<ScheduledLeg> = self
            .schedules
            .get(&(from, to))
            .map(|legs| {
                legs.iter()
                    .filter(|l| l.departure > window_start && l.arrival <= window_end)
                    .copied()
                    .collect()
            })
            .unwrap_or_default();
        legs.sort_by_key(|l| l.departure);
        Ok(legs)
    }
}
