//! Domain types for the flight interconnections planner.
//!
//! This module contains the core domain model types that represent
//! validated flight data. All types enforce their invariants at
//! construction time, so code that receives these types can trust
//! their validity.

mod airport;
mod itinerary;
mod path;
mod route;
mod schedule;

pub use airport::{Iata, InvalidIata};
pub use itinerary::{FlightLeg, Itinerary};
pub use path::{CandidatePath, InvalidPath};
pub use route::Route;
pub use schedule::ScheduledLeg;
