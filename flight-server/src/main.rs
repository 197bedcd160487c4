use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use flight_server::planner::PlannerConfig;
use flight_server::upstream::{UpstreamClient, UpstreamConfig};
use flight_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Upstream endpoints can be overridden for local development
    let mut upstream_config = UpstreamConfig::default();
    if let Ok(url) = std::env::var("ROUTES_SERVICE_URL") {
        upstream_config = upstream_config.with_routes_url(url);
    }
    if let Ok(url) = std::env::var("SCHEDULES_SERVICE_URL") {
        upstream_config = upstream_config.with_schedules_url(url);
    }

    let client = UpstreamClient::new(upstream_config).expect("Failed to create upstream client");

    let state = AppState::new(client, PlannerConfig::default());
    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Flight interconnections server listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET /health                    - Health check");
    println!("  GET /flights/interconnections  - Search direct and one-stop flights");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
