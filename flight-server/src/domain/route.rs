//! Route graph edges.

use std::fmt;

use super::Iata;

/// A direct airport-pair connection the operator flies.
///
/// Routes are immutable once fetched from the route graph; the planner
/// only ever reads them.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Route {
    /// Departure airport.
    pub from: Iata,

    /// Arrival airport.
    pub to: Iata,
}

impl Route {
    /// Create a route between two airports.
    pub fn new(from: Iata, to: Iata) -> Self {
        Self { from, to }
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Route({}-{})", self.from, self.to)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}
