//! Itinerary assembly for one candidate path.
//!
//! Walks a candidate path edge by edge, pulling a timetable for each
//! edge and chaining compatible departures into complete itineraries.

use std::future::Future;

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use crate::domain::{CandidatePath, FlightLeg, Iata, Itinerary, ScheduledLeg};

use super::config::PlannerConfig;
use super::request::FlightsRequest;

/// Error from a timetable fetch.
#[derive(Debug, Clone, thiserror::Error)]
#[error("failed to fetch timetable for {from}-{to}: {message}")]
pub struct FetchError {
    pub from: Iata,
    pub to: Iata,
    pub message: String,
}

/// Trait for providing scheduled flights on a route.
///
/// This abstraction allows the planner to be tested with mock data.
pub trait TimetableSource {
    /// Get scheduled flights for an airport pair inside a window.
    ///
    /// Returned legs must depart strictly after `window_start`, arrive
    /// no later than `window_end`, and be ordered chronologically by
    /// departure instant.
    fn fetch_legs(
        &self,
        from: Iata,
        to: Iata,
        window_start: NaiveDateTime,
        window_end: NaiveDateTime,
    ) -> impl Future<Output = Result<Vec<ScheduledLeg>, FetchError>> + Send;
}

/// Assemble complete itineraries for one candidate path.
///
/// Edges are processed strictly in path order, carrying a cursor: the
/// earliest acceptable next departure instant, seeded from the request's
/// window start. If any edge yields no timetable entries, the whole
/// candidate is abandoned regardless of progress on earlier edges.
///
/// On later edges, entries are assigned greedily: each entry, in source
/// order, becomes the next leg of the first incomplete itinerary (in
/// creation order) whose connection it satisfies, and is consumed by it.
/// This is not a globally optimal matching and is kept deliberately;
/// callers' expected outputs assume this exact order.
///
/// A fetch error is treated the same as an empty timetable: the
/// candidate is dropped and the error is logged, never propagated.
pub async fn assemble_path<S: TimetableSource>(
    source: &S,
    config: &PlannerConfig,
    request: &FlightsRequest,
    path: &CandidatePath,
) -> Vec<Itinerary> {
    let min_connection = config.min_connection();
    let mut cursor = request.window_start;
    let mut itineraries: Vec<Itinerary> = Vec::new();

    for (index, route) in path.routes().iter().enumerate() {
        let entries = match source
            .fetch_legs(route.from, route.to, cursor, request.window_end)
            .await
        {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, "timetable fetch failed, dropping candidate");
                return Vec::new();
            }
        };

        debug!(
            from = %route.from,
            to = %route.to,
            entries = entries.len(),
            "fetched timetable"
        );

        // An empty timetable abandons the whole candidate; a non-empty
        // one always has an earliest arrival to drive the cursor.
        let Some(min_arrival) = entries.iter().map(|entry| entry.arrival).min() else {
            debug!(from = %route.from, to = %route.to, "no schedules, dropping candidate");
            return Vec::new();
        };

        if index == 0 {
            itineraries = entries
                .iter()
                .map(|entry| {
                    Itinerary::started(
                        path.stops(),
                        FlightLeg {
                            from: route.from,
                            to: route.to,
                            departure: entry.departure,
                            arrival: entry.arrival,
                        },
                    )
                })
                .collect();
        } else {
            for entry in &entries {
                for itinerary in itineraries.iter_mut() {
                    if itinerary.is_complete() {
                        continue;
                    }

                    let earliest = itinerary.last_leg().arrival + min_connection;
                    if entry.departure >= earliest {
                        itinerary.push_leg(FlightLeg {
                            from: route.from,
                            to: route.to,
                            departure: entry.departure,
                            arrival: entry.arrival,
                        });
                        // Each entry is consumed by at most one itinerary.
                        break;
                    }
                }
            }
        }

        if index + 1 < path.routes().len() {
            // Bound the next edge's search window by the earliest arrival
            // seen on this edge plus the connection time.
            cursor = min_arrival + min_connection;
        }
    }

    itineraries.retain(Itinerary::is_complete);
    itineraries
}
