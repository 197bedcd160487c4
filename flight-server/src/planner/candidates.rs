//! Candidate path enumeration over the route graph.

use crate::domain::{CandidatePath, Route};

use super::request::FlightsRequest;

/// Enumerate the candidate paths that could satisfy a request.
///
/// The direct candidate is the first route matching the request's
/// airport pair, if any. When the request allows one stop, every route
/// leaving the departure airport is paired with the first route that
/// continues from its arrival airport to the destination. Duplicate
/// routes for the same pair beyond the first are ignored; no further
/// de-duplication is performed, so a direct and a one-stop candidate
/// can coexist for the same airport pair.
///
/// Total over any route list, including an empty one. No I/O.
pub fn build_candidates(request: &FlightsRequest, routes: &[Route]) -> Vec<CandidatePath> {
    let mut candidates = Vec::new();

    if let Some(direct) = routes
        .iter()
        .find(|r| r.from == request.departure && r.to == request.arrival)
    {
        candidates.push(CandidatePath::direct(*direct));
    }

    if request.max_stops == 1 {
        for first in routes.iter().filter(|r| r.from == request.departure) {
            let second = routes
                .iter()
                .find(|r| r.from == first.to && r.to == request.arrival);

            if let Some(second) = second {
                // Chained by construction of the find predicates.
                if let Ok(path) = CandidatePath::new(vec![*first, *second]) {
                    candidates.push(path);
                }
            }
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Iata;
    use chrono::NaiveDate;

    fn route(from: &str, to: &str) -> Route {
        Route::new(Iata::parse(from).unwrap(), Iata::parse(to).unwrap())
    }

    fn request(max_stops: u8) -> FlightsRequest {
        let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        FlightsRequest {
            departure: Iata::parse("DUB").unwrap(),
            arrival: Iata::parse("WRO").unwrap(),
            window_start: day.and_hms_opt(9, 0, 0).unwrap(),
            window_end: day.and_hms_opt(21, 0, 0).unwrap(),
            max_stops,
        }
    }

    #[test]
    fn empty_graph_yields_no_candidates() {
        assert!(build_candidates(&request(1), &[]).is_empty());
    }

    #[test]
    fn direct_candidate_only() {
        let routes = vec![route("DUB", "WRO"), route("DUB", "STN")];
        let candidates = build_candidates(&request(0), &routes);

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].stops(), 0);
        assert_eq!(candidates[0].routes(), &[route("DUB", "WRO")]);
    }

    #[test]
    fn direct_first_match_wins_on_duplicates() {
        // Two direct edges for the same pair; only the first is used.
        let routes = vec![route("DUB", "WRO"), route("DUB", "WRO")];
        let candidates = build_candidates(&request(0), &routes);

        assert_eq!(candidates.len(), 1);
    }

    #[test]
    fn one_stop_candidates() {
        let routes = vec![
            route("DUB", "STN"),
            route("DUB", "KRK"),
            route("STN", "WRO"),
            route("KRK", "WRO"),
        ];
        let candidates = build_candidates(&request(1), &routes);

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].routes(), &[route("DUB", "STN"), route("STN", "WRO")]);
        assert_eq!(candidates[1].routes(), &[route("DUB", "KRK"), route("KRK", "WRO")]);
    }

    #[test]
    fn one_stop_takes_first_second_leg_match() {
        // Duplicate STN->WRO edges; only the first pairs with DUB->STN.
        let routes = vec![route("DUB", "STN"), route("STN", "WRO"), route("STN", "WRO")];
        let candidates = build_candidates(&request(1), &routes);

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].stops(), 1);
    }

    #[test]
    fn max_stops_zero_excludes_one_stop_paths() {
        let routes = vec![route("DUB", "STN"), route("STN", "WRO")];
        let candidates = build_candidates(&request(0), &routes);

        assert!(candidates.is_empty());
    }

    #[test]
    fn direct_and_one_stop_coexist() {
        let routes = vec![route("DUB", "WRO"), route("DUB", "STN"), route("STN", "WRO")];
        let candidates = build_candidates(&request(1), &routes);

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].stops(), 0);
        assert_eq!(candidates[1].stops(), 1);
    }

    #[test]
    fn unrelated_routes_are_ignored() {
        let routes = vec![route("STN", "WRO"), route("KRK", "WRO"), route("WRO", "DUB")];
        let candidates = build_candidates(&request(1), &routes);

        assert!(candidates.is_empty());
    }
}
