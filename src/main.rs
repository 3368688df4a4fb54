//! HTTP server for the Pay Gap Engine.
//!
//! Reads `PAY_GAP_CONFIG_DIR` (default `./config`) and `PAY_GAP_BIND`
//! (default `0.0.0.0:3000`). Log filtering follows `RUST_LOG`.

use std::env;
use std::error::Error;

use pay_gap_engine::api::{AppState, create_router};
use pay_gap_engine::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_CONFIG_DIR: &str = "./config";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let config_dir = env::var("PAY_GAP_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.into());
    let bind_addr = env::var("PAY_GAP_BIND").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into());

    let config = ConfigLoader::load(&config_dir)?;
    info!(config_dir = %config_dir, "Configuration loaded");

    let app = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(addr = %listener.local_addr()?, "Pay gap engine listening");

    axum::serve(listener, app).await?;
    Ok(())
}
