//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::info;

use crate::domain::Iata;
use crate::planner::{FlightsRequest, RequestError};

use super::dto::{ErrorResponse, FlightResult, FlightsQuery, parse_date_time};
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/flights/interconnections", get(get_interconnections))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Search for direct and connecting flights.
async fn get_interconnections(
    State(state): State<AppState>,
    Query(query): Query<FlightsQuery>,
) -> Result<Json<Vec<FlightResult>>, AppError> {
    let departure = Iata::parse(&query.departure).map_err(|e| {
        AppError::bad_request(format!("invalid departure airport {:?}: {e}", query.departure))
    })?;
    let arrival = Iata::parse(&query.arrival).map_err(|e| {
        AppError::bad_request(format!("invalid arrival airport {:?}: {e}", query.arrival))
    })?;

    let window_start = parse_date_time(&query.departure_date_time).map_err(|_| {
        AppError::bad_request(format!(
            "invalid departureDateTime: {}",
            query.departure_date_time
        ))
    })?;
    let window_end = parse_date_time(&query.arrival_date_time).map_err(|_| {
        AppError::bad_request(format!(
            "invalid arrivalDateTime: {}",
            query.arrival_date_time
        ))
    })?;

    let request = FlightsRequest {
        departure,
        arrival,
        window_start,
        window_end,
        max_stops: query
            .max_stops
            .unwrap_or(state.coordinator.config().default_max_stops),
    };
    info!(?request, "received flights request");

    let itineraries = state.coordinator.get_itineraries(&request).await?;

    Ok(Json(
        itineraries.iter().map(FlightResult::from_itinerary).collect(),
    ))
}

/// Error returned to API callers.
///
/// The planner degrades upstream failures to empty results, so the only
/// failures that reach a caller are problems with the request itself.
/// Every `AppError` renders as 400 with a JSON body.
#[derive(Debug)]
pub struct AppError {
    message: String,
}

impl AppError {
    fn bad_request(message: String) -> Self {
        Self { message }
    }
}

impl From<RequestError> for AppError {
    fn from(e: RequestError) -> Self {
        AppError::bad_request(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        tracing::warn!(message = %self.message, "rejecting request");

        let body = Json(ErrorResponse {
            error: self.message,
        });
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}
