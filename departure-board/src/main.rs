use std::net::SocketAddr;

use departure_board::board::{BoardConfig, DepartureBoard};
use departure_board::cache::{CacheConfig, JourneyCache};
use departure_board::provider::{ProviderClient, ProviderConfig};
use departure_board::web::{AppState, create_router};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Default listen address.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Get credentials from environment
    let api_key = std::env::var("PROVIDER_API_KEY").unwrap_or_else(|_| {
        warn!("PROVIDER_API_KEY not set. API calls will fail.");
        String::new()
    });

    let mut provider_config = ProviderConfig::new(api_key);
    if let Ok(url) = std::env::var("PROVIDER_BASE_URL") {
        provider_config = provider_config.with_base_url(url);
    }
    let provider = ProviderClient::new(provider_config).expect("Failed to create provider client");

    let board = DepartureBoard::new(provider, BoardConfig::default());
    let snapshots = JourneyCache::new(&CacheConfig::default());

    let app = create_router(AppState::new(board, snapshots));

    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()
        .expect("BIND_ADDR must be a socket address");

    info!("Departure board listening on http://{addr}");
    info!("  GET /health");
    info!("  GET /api/journeys?stop=&line=[&lat=&lon=]");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
