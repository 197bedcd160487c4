//! Application state for the web layer.

use std::sync::Arc;

use crate::planner::{Coordinator, PlannerConfig};
use crate::upstream::UpstreamClient;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Itinerary search coordinator over the live upstream APIs.
    pub coordinator: Arc<Coordinator<UpstreamClient, UpstreamClient>>,
}

impl AppState {
    /// Create a new app state.
    ///
    /// The same client serves as both the route graph source and the
    /// timetable source.
    pub fn new(client: UpstreamClient, config: PlannerConfig) -> Self {
        let client = Arc::new(client);
        Self {
            coordinator: Arc::new(Coordinator::new(client.clone(), client, config)),
        }
    }
}
