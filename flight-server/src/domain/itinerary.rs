//! Itineraries and their legs.

use chrono::NaiveDateTime;

use super::Iata;

/// One flown segment of an itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlightLeg {
    /// Departure airport.
    pub from: Iata,

    /// Arrival airport.
    pub to: Iata,

    /// Absolute departure instant.
    pub departure: NaiveDateTime,

    /// Absolute arrival instant.
    pub arrival: NaiveDateTime,
}

/// A sequence of legs from origin to destination.
///
/// An itinerary is created from its first leg with a fixed target stop
/// count, then grows as connecting legs are chained on. The leg list is
/// never empty. An itinerary must only be surfaced to callers once it is
/// complete: `legs.len() - 1 == stops`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    stops: usize,
    legs: Vec<FlightLeg>,
}

impl Itinerary {
    /// Start an itinerary from its first leg.
    ///
    /// `stops` is the target stop count, fixed for the itinerary's
    /// lifetime; it does not change as legs are added.
    pub fn started(stops: usize, first: FlightLeg) -> Self {
        Self {
            stops,
            legs: vec![first],
        }
    }

    /// Target number of intermediate stops.
    pub fn stops(&self) -> usize {
        self.stops
    }

    /// The legs chained so far, in flight order.
    pub fn legs(&self) -> &[FlightLeg] {
        &self.legs
    }

    /// Whether the itinerary has acquired all of its required legs.
    pub fn is_complete(&self) -> bool {
        self.legs.len() == self.stops + 1
    }

    /// The most recently added leg.
    pub fn last_leg(&self) -> &FlightLeg {
        // legs is never empty: `started` seeds the first leg
        &self.legs[self.legs.len() - 1]
    }

    /// Chain a connecting leg onto the itinerary.
    pub(crate) fn push_leg(&mut self, leg: FlightLeg) {
        self.legs.push(leg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn iata(s: &str) -> Iata {
        Iata::parse(s).unwrap()
    }

    fn at(hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    fn leg(from: &str, to: &str, dep: NaiveDateTime, arr: NaiveDateTime) -> FlightLeg {
        FlightLeg {
            from: iata(from),
            to: iata(to),
            departure: dep,
            arrival: arr,
        }
    }

    #[test]
    fn direct_itinerary_complete() {
        let it = Itinerary::started(0, leg("DUB", "WRO", at(9, 0), at(12, 0)));
        assert!(it.is_complete());
        assert_eq!(it.stops(), 0);
        assert_eq!(it.legs().len(), 1);
    }

    #[test]
    fn one_stop_itinerary_incomplete_until_second_leg() {
        let mut it = Itinerary::started(1, leg("DUB", "STN", at(9, 0), at(10, 0)));
        assert!(!it.is_complete());

        it.push_leg(leg("STN", "WRO", at(13, 0), at(15, 30)));
        assert!(it.is_complete());
        assert_eq!(it.legs().len(), 2);
    }

    #[test]
    fn last_leg_tracks_latest() {
        let mut it = Itinerary::started(1, leg("DUB", "STN", at(9, 0), at(10, 0)));
        assert_eq!(it.last_leg().to, iata("STN"));

        it.push_leg(leg("STN", "WRO", at(13, 0), at(15, 30)));
        assert_eq!(it.last_leg().to, iata("WRO"));
        assert_eq!(it.last_leg().arrival, at(15, 30));
    }
}
