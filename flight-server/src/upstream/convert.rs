//! Conversion from schedule DTOs to domain types.
//!
//! A month timetable carries day-of-month entries with raw "HH:MM"
//! clock times. This module projects those onto absolute instants for a
//! request window, rolling overnight arrivals past midnight.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::warn;

use crate::domain::ScheduledLeg;

use super::types::MonthTimetable;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConversionError {
    /// Failed to parse a clock time string
    #[error("invalid clock time: {0}")]
    InvalidTime(String),
}

/// Parse a "HH:MM" clock time.
pub fn parse_clock(s: &str) -> Result<NaiveTime, ConversionError> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| ConversionError::InvalidTime(s.to_string()))
}

/// Flight duration in minutes from raw clock times.
///
/// An arrival clock time that is not later than the departure clock
/// time means the flight lands the next calendar day, e.g.
/// `departureTime: "21:10", arrivalTime: "00:25"`.
fn flight_duration_minutes(departure: NaiveTime, arrival: NaiveTime) -> i64 {
    if arrival <= departure {
        MINUTES_PER_DAY - departure.signed_duration_since(arrival).num_minutes()
    } else {
        arrival.signed_duration_since(departure).num_minutes()
    }
}

/// Project a month timetable onto absolute scheduled legs in a window.
///
/// Keeps only legs departing strictly after `window_start` and arriving
/// no later than `window_end`, ordered by departure instant. Malformed
/// entries are skipped rather than failing the whole month.
pub fn project_month(
    timetable: &MonthTimetable,
    year: i32,
    month: u32,
    window_start: NaiveDateTime,
    window_end: NaiveDateTime,
) -> Vec<ScheduledLeg> {
    let mut legs = Vec::new();

    for day in &timetable.days {
        let Some(date) = NaiveDate::from_ymd_opt(year, month, day.day) else {
            warn!(year, month, day = day.day, "skipping nonexistent day of month");
            continue;
        };

        for flight in &day.flights {
            let departure_clock = match parse_clock(&flight.departure_time) {
                Ok(t) => t,
                Err(e) => {
                    warn!(error = %e, "skipping flight with bad departure time");
                    continue;
                }
            };
            let arrival_clock = match parse_clock(&flight.arrival_time) {
                Ok(t) => t,
                Err(e) => {
                    warn!(error = %e, "skipping flight with bad arrival time");
                    continue;
                }
            };

            let departure = date.and_time(departure_clock);
            let duration = flight_duration_minutes(departure_clock, arrival_clock);
            let arrival = departure + Duration::minutes(duration);

            if departure > window_start && arrival <= window_end {
                legs.push(ScheduledLeg::new(departure, arrival));
            }
        }
    }

    legs.sort_by_key(|leg| leg.departure);
    legs
}

/// The (year, month) pairs a window spans, in order.
///
/// Empty when the window end precedes its start.
pub fn months_in_window(window_start: NaiveDateTime, window_end: NaiveDateTime) -> Vec<(i32, u32)> {
    let mut months = Vec::new();
    let mut year = window_start.year();
    let mut month = window_start.month();

    while (year, month) <= (window_end.year(), window_end.month()) {
        months.push((year, month));
        month += 1;
        if month > 12 {
            month = 1;
            year += 1;
        }
    }

    months
}
