//! Scheduled flight instances.

use chrono::{Duration, NaiveDateTime};

/// One scheduled flight instance on a route, with absolute instants.
///
/// The timetable source is responsible for rolling an overnight arrival
/// past midnight, so `arrival` is always after `departure` here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledLeg {
    /// Absolute departure instant.
    pub departure: NaiveDateTime,

    /// Absolute arrival instant.
    pub arrival: NaiveDateTime,
}

impl ScheduledLeg {
    /// Create a scheduled leg.
    pub fn new(departure: NaiveDateTime, arrival: NaiveDateTime) -> Self {
        Self { departure, arrival }
    }

    /// Flight duration.
    pub fn duration(&self) -> Duration {
        self.arrival.signed_duration_since(self.departure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, day)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    #[test]
    fn duration_same_day() {
        let leg = ScheduledLeg::new(at(1, 9, 0), at(1, 11, 30));
        assert_eq!(leg.duration(), Duration::minutes(150));
    }

    #[test]
    fn duration_overnight() {
        let leg = ScheduledLeg::new(at(1, 23, 0), at(2, 1, 0));
        assert_eq!(leg.duration(), Duration::hours(2));
    }
}
