use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use bus_server::config::ServerConfig;
use bus_server::network::{CachedRouteSource, Dataset, InMemoryNetwork};
use bus_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    // Load the network (fail fast if unavailable)
    let dataset = match Dataset::load(&config.data_dir) {
        Ok(dataset) => dataset,
        Err(e) => {
            error!(error = %e, "failed to load bus network");
            return ExitCode::FAILURE;
        }
    };
    let network = InMemoryNetwork::from_dataset(&dataset);
    let source = CachedRouteSource::new(network, &config.cache);

    let state = AppState::new(source, config.transfer.clone());
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(config.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.addr, error = %e, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!(addr = %config.addr, "bus route server listening");
    info!("  GET /health");
    info!("  GET /services/:service/:direction/route?from=&offset=&lat=&lon=");
    info!("  GET /services/:service/:direction/after-loop");
    info!("  GET /stops/:code/opposite");
    info!("  GET /transfers?origin_lat=&origin_lon=&target_lat=&target_lon=|station=&budget=&sort=");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
