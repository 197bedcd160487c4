//! Data transfer objects for web requests and responses.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::{FlightLeg, Itinerary};

/// Datetime format used in query parameters and responses
/// (ISO local datetime, seconds optional on input).
const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Query parameters for the interconnections endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightsQuery {
    /// Departure airport IATA code
    pub departure: String,

    /// Arrival airport IATA code
    pub arrival: String,

    /// Earliest acceptable departure, ISO local datetime
    pub departure_date_time: String,

    /// Arrival deadline, ISO local datetime
    pub arrival_date_time: String,

    /// Maximum number of stops (defaults to the planner's configured value)
    pub max_stops: Option<u8>,
}

/// One itinerary in the response.
#[derive(Debug, Serialize)]
pub struct FlightResult {
    /// Number of intermediate stops
    pub stops: usize,

    /// Legs in flight order
    pub legs: Vec<LegResult>,
}

/// One leg of an itinerary in the response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegResult {
    /// Departure airport IATA code
    pub departure_airport: String,

    /// Arrival airport IATA code
    pub arrival_airport: String,

    /// Departure instant, ISO local datetime
    pub departure_date_time: String,

    /// Arrival instant, ISO local datetime
    pub arrival_date_time: String,
}

impl FlightResult {
    /// Build the response DTO from a domain itinerary.
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        Self {
            stops: itinerary.stops(),
            legs: itinerary.legs().iter().map(LegResult::from_leg).collect(),
        }
    }
}

impl LegResult {
    fn from_leg(leg: &FlightLeg) -> Self {
        Self {
            departure_airport: leg.from.to_string(),
            arrival_airport: leg.to.to_string(),
            departure_date_time: format_date_time(leg.departure),
            arrival_date_time: format_date_time(leg.arrival),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Parse an ISO local datetime query parameter.
///
/// Accepts both "2024-06-01T09:00" and "2024-06-01T09:00:00".
pub fn parse_date_time(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, DATE_TIME_FORMAT))
}

/// Format an instant for a response body.
fn format_date_time(t: NaiveDateTime) -> String {
    t.format(DATE_TIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::domain::Iata;

    fn at(hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    #[test]
    fn parse_without_seconds() {
        assert_eq!(parse_date_time("2024-06-01T09:00").unwrap(), at(9, 0));
    }

    #[test]
    fn parse_with_seconds() {
        assert_eq!(parse_date_time("2024-06-01T09:00:00").unwrap(), at(9, 0));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_date_time("not-a-date").is_err());
        assert!(parse_date_time("2024-06-01").is_err());
        assert!(parse_date_time("").is_err());
    }

    #[test]
    fn flight_result_from_itinerary() {
        let mut itinerary = Itinerary::started(
            1,
            FlightLeg {
                from: Iata::parse("DUB").unwrap(),
                to: Iata::parse("STN").unwrap(),
                departure: at(9, 0),
                arrival: at(10, 0),
            },
        );
        itinerary.push_leg(FlightLeg {
            from: Iata::parse("STN").unwrap(),
            to: Iata::parse("WRO").unwrap(),
            departure: at(13, 0),
            arrival: at(15, 30),
        });

        let result = FlightResult::from_itinerary(&itinerary);

        assert_eq!(result.stops, 1);
        assert_eq!(result.legs.len(), 2);
        assert_eq!(result.legs[0].departure_airport, "DUB");
        assert_eq!(result.legs[0].arrival_airport, "STN");
        assert_eq!(result.legs[0].departure_date_time, "2024-06-01T09:00");
        assert_eq!(result.legs[1].arrival_date_time, "2024-06-01T15:30");
    }

    #[test]
    fn serialized_shape_is_camel_case() {
        let itinerary = Itinerary::started(
            0,
            FlightLeg {
                from: Iata::parse("DUB").unwrap(),
                to: Iata::parse("WRO").unwrap(),
                departure: at(14, 0),
                arrival: at(17, 0),
            },
        );

        let json = serde_json::to_value(FlightResult::from_itinerary(&itinerary)).unwrap();

        assert_eq!(json["stops"], 0);
        assert_eq!(json["legs"][0]["departureAirport"], "DUB");
        assert_eq!(json["legs"][0]["arrivalDateTime"], "2024-06-01T17:00");
    }
}
