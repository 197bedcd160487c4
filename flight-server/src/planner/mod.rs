//! The itinerary assembly engine.
//!
//! This module turns a route graph plus per-leg timetables into a set of
//! complete, time-feasible, multi-leg flights: candidate paths are
//! enumerated from the graph, each candidate is assembled into
//! itineraries by chaining compatible departures, and a coordinator fans
//! the candidates out concurrently and merges the results.

mod assemble;
mod candidates;
mod config;
mod coordinator;
mod request;

pub use assemble::{FetchError, TimetableSource, assemble_path};
pub use candidates::build_candidates;
pub use config::PlannerConfig;
pub use coordinator::{Coordinator, RouteFetchError, RouteSource};
pub use request::{FlightsRequest, RequestError};
