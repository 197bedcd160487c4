//! Upstream API response DTOs.
//!
//! These types map directly to the routes and schedules JSON APIs.
//! They use `Option` liberally because the services omit fields rather
//! than sending null values in many cases.

use serde::Deserialize;

/// One entry of the routes API response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteItem {
    /// Departure airport IATA code.
    pub airport_from: String,

    /// Arrival airport IATA code.
    pub airport_to: String,

    /// Set when the pair is only served via a connecting airport;
    /// such entries are not direct edges of the route graph.
    pub connecting_airport: Option<String>,

    /// Carrier operating the route.
    pub operator: Option<String>,

    /// Whether the route is newly opened.
    #[serde(default)]
    pub new_route: bool,

    /// Whether the route only runs part of the year.
    #[serde(default)]
    pub seasonal_route: bool,

    /// Route group label (e.g. "CITY").
    pub group: Option<String>,
}

/// Response from the schedules API for one airport pair and month.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthTimetable {
    /// Month of year (1-12).
    pub month: u32,

    /// Scheduled flights, grouped by day of month.
    pub days: Vec<DayTimetable>,
}

/// Scheduled flights for one day of the month.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayTimetable {
    /// Day of month (1-31).
    pub day: u32,

    /// Flights scheduled on this day.
    pub flights: Vec<FlightTimes>,
}

/// Raw clock times for one scheduled flight.
///
/// Times are "HH:MM" local clock strings. An arrival clock time that is
/// not later than the departure clock time means the flight lands the
/// next calendar day.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightTimes {
    /// Flight number within the carrier.
    pub number: Option<u32>,

    /// Departure clock time, "HH:MM".
    pub departure_time: String,

    /// Arrival clock time, "HH:MM".
    pub arrival_time: String,
}
