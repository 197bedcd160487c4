//! Planner configuration.

use chrono::Duration;

/// Configuration parameters for itinerary assembly.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Minimum time between one leg's arrival and the next leg's
    /// departure for the connection to be considered feasible (hours).
    pub min_connection_hours: i64,

    /// Stop count used when a request does not specify one.
    pub default_max_stops: u8,

    /// Maximum number of candidate paths assembled in parallel.
    /// Higher values increase parallelism against the timetable source.
    pub batch_size: usize,

    /// Per-request deadline (seconds). Candidates still outstanding when
    /// the deadline passes are abandoned and the itineraries gathered so
    /// far are returned.
    pub request_timeout_secs: u64,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        min_connection_hours: i64,
        default_max_stops: u8,
        batch_size: usize,
        request_timeout_secs: u64,
    ) -> Self {
        Self {
            min_connection_hours,
            default_max_stops,
            batch_size,
            request_timeout_secs,
        }
    }

    /// Returns the minimum connection time as a Duration.
    pub fn min_connection(&self) -> Duration {
        Duration::hours(self.min_connection_hours)
    }

    /// Returns the per-request deadline as a std Duration.
    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            min_connection_hours: 2,
            default_max_stops: 1,
            batch_size: 8,
            request_timeout_secs: 15,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlannerConfig::default();

        assert_eq!(config.min_connection_hours, 2);
        assert_eq!(config.default_max_stops, 1);
        assert_eq!(config.batch_size, 8);
        assert_eq!(config.request_timeout_secs, 15);
    }

    #[test]
    fn duration_methods() {
        let config = PlannerConfig::default();

        assert_eq!(config.min_connection(), Duration::hours(2));
        assert_eq!(config.request_timeout(), std::time::Duration::from_secs(15));
    }

    #[test]
    fn custom_config() {
        let config = PlannerConfig::new(3, 0, 4, 30);

        assert_eq!(config.min_connection_hours, 3);
        assert_eq!(config.default_max_stops, 0);
        assert_eq!(config.batch_size, 4);
        assert_eq!(config.request_timeout_secs, 30);
    }
}
