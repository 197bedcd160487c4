//! Flight interconnections server.
//!
//! A web service that answers: "how can I fly from A to B inside this
//! time window, with at most one stop?"

pub mod domain;
pub mod planner;
pub mod upstream;
pub mod web;
