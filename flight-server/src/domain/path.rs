//! Candidate paths through the route graph.

use super::Route;

/// Error returned when a candidate path's routes do not form a valid chain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid candidate path: {reason}")]
pub struct InvalidPath {
    reason: &'static str,
}

/// An ordered chain of routes considered as one potential itinerary shape.
///
/// A path holds one route (a direct flight) or two routes sharing a
/// connecting airport (a one-stop flight). The chain invariant is checked
/// at construction, so any `CandidatePath` value is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePath {
    routes: Vec<Route>,
}

impl CandidatePath {
    /// Create a candidate path from a chain of routes.
    ///
    /// The chain must be non-empty, hold at most two routes, and each
    /// route must depart from the previous route's arrival airport.
    pub fn new(routes: Vec<Route>) -> Result<Self, InvalidPath> {
        if routes.is_empty() {
            return Err(InvalidPath {
                reason: "must contain at least one route",
            });
        }

        // One intermediate stop is the current planner limit; widening this
        // needs a graph search instead of pairwise enumeration.
        if routes.len() > 2 {
            return Err(InvalidPath {
                reason: "must contain at most two routes",
            });
        }

        for pair in routes.windows(2) {
            if pair[0].to != pair[1].from {
                return Err(InvalidPath {
                    reason: "routes must chain on a connecting airport",
                });
            }
        }

        Ok(Self { routes })
    }

    /// Create a direct (single-route) candidate path.
    pub fn direct(route: Route) -> Self {
        Self {
            routes: vec![route],
        }
    }

    /// The routes of this path, in flight order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Number of intermediate stops this path implies.
    pub fn stops(&self) -> usize {
        self.routes.len() - 1
    }
}
