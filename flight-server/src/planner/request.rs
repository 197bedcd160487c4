//! Itinerary search requests and their validation.

use chrono::NaiveDateTime;

use crate::domain::Iata;

/// Error from request validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// More stops than the planner supports.
    #[error("max stops {0} is not supported yet; the limit is 1")]
    TooManyStops(u8),

    /// The departure window is empty or reversed.
    #[error("departure time must be strictly before the arrival deadline")]
    EmptyWindow,

    /// The departure window starts in the past.
    #[error("departure time must not be earlier than {now}")]
    DepartureInPast { now: NaiveDateTime },
}

/// Request for an itinerary search.
#[derive(Debug, Clone)]
pub struct FlightsRequest {
    /// Departure airport.
    pub departure: Iata,

    /// Arrival airport.
    pub arrival: Iata,

    /// Earliest acceptable departure instant.
    pub window_start: NaiveDateTime,

    /// The caller's acceptable arrival deadline.
    pub window_end: NaiveDateTime,

    /// Maximum number of intermediate stops (0 or 1).
    pub max_stops: u8,
}

impl FlightsRequest {
    /// Validate the request against the planner's limits.
    ///
    /// `now` is the instant the request arrived; the departure window
    /// must not start before it.
    pub fn validate(&self, now: NaiveDateTime) -> Result<(), RequestError> {
        if self.max_stops > 1 {
            return Err(RequestError::TooManyStops(self.max_stops));
        }

        if self.window_start >= self.window_end {
            return Err(RequestError::EmptyWindow);
        }

        if self.window_start < now {
            return Err(RequestError::DepartureInPast { now });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn request(start: NaiveDateTime, end: NaiveDateTime, max_stops: u8) -> FlightsRequest {
        FlightsRequest {
            departure: Iata::parse("DUB").unwrap(),
            arrival: Iata::parse("WRO").unwrap(),
            window_start: start,
            window_end: end,
            max_stops,
        }
    }

    #[test]
    fn valid_request() {
        let req = request(at(9), at(21), 1);
        assert!(req.validate(at(8)).is_ok());
    }

    #[test]
    fn reject_too_many_stops() {
        let req = request(at(9), at(21), 2);
        assert_eq!(req.validate(at(8)), Err(RequestError::TooManyStops(2)));
    }

    #[test]
    fn reject_reversed_window() {
        let req = request(at(21), at(9), 1);
        assert_eq!(req.validate(at(8)), Err(RequestError::EmptyWindow));
    }

    #[test]
    fn reject_equal_window_bounds() {
        let req = request(at(9), at(9), 1);
        assert_eq!(req.validate(at(8)), Err(RequestError::EmptyWindow));
    }

    #[test]
    fn reject_departure_in_past() {
        let req = request(at(9), at(21), 1);
        let result = req.validate(at(10));
        assert!(matches!(result, Err(RequestError::DepartureInPast { .. })));
    }

    #[test]
    fn departure_exactly_now_is_accepted() {
        let req = request(at(9), at(21), 1);
        assert!(req.validate(at(9)).is_ok());
    }
}
