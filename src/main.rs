//! anonchatd - anonymous one-to-one chat matchmaker.
//!
//! Pairs anonymous users of an end-to-end encrypted messenger and relays
//! their messages to each other. The messenger session itself lives in a
//! sidecar bridge process; this daemon speaks newline-delimited JSON to it
//! and keeps all matchmaking state in memory.

mod config;
mod error;
mod handlers;
mod matchmaker;
mod state;
mod texts;
mod transport;

use crate::config::Config;
use crate::handlers::Switchboard;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());

    let config = Config::load(&config_path).map_err(|e| {
        error!(path = %config_path, error = %e, "Failed to load config");
        e
    })?;

    // The credential is required before any state is constructed: without it
    // there is no way to authenticate to the bridge.
    let mnemonic = config.transport.mnemonic().map_err(|e| {
        error!(error = %e, "Transport credential missing");
        e
    })?;

    info!(bridge = %config.transport.bridge_addr, "Starting anonchatd");

    // All matchmaking state lives here for the process lifetime.
    let board = Arc::new(Switchboard::new());

    let reconnect = Duration::from_secs(config.transport.reconnect_secs);
    loop {
        match transport::run(Arc::clone(&board), &config.transport, &mnemonic).await {
            Ok(()) => info!("Bridge closed the connection"),
            Err(e) => warn!(error = %e, "Bridge connection failed"),
        }
        info!(delay_secs = reconnect.as_secs(), "Reconnecting to bridge");
        tokio::time::sleep(reconnect).await;
    }
}
