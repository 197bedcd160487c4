//! Web layer: thin HTTP glue over the planner.

mod dto;
mod routes;
mod state;

pub use dto::{ErrorResponse, FlightResult, FlightsQuery, LegResult};
pub use routes::{AppError, create_router};
pub use state::AppState;
