//! Upstream API error types.

/// Errors from the routes and schedules HTTP clients.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// No timetable published for the requested pair and month
    #[error("no schedules for {from}-{to} in {year}-{month:02}")]
    NoSchedules {
        from: String,
        to: String,
        year: i32,
        month: u32,
    },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
