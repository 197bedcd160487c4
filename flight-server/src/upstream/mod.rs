//! Upstream routes and schedules collaborators.
//!
//! This module provides HTTP clients for the two data providers the
//! planner consumes:
//! - the routes API: the full set of airport-pair connections a carrier
//!   flies
//! - the schedules API: per airport pair and month, a day-indexed list
//!   of scheduled flights with raw "HH:MM" clock times
//!
//! Month timetables are projected onto absolute instants here, so the
//! planner only ever sees [`crate::domain::ScheduledLeg`] values.

mod client;
mod convert;
mod error;
pub mod mock;
mod types;

pub use client::{UpstreamClient, UpstreamConfig};
pub use convert::{ConversionError, months_in_window, parse_clock, project_month};
pub use error::UpstreamError;
pub use types::{DayTimetable, FlightTimes, MonthTimetable, RouteItem};
