//! # mockhubd — mockhub daemon
//!
//! Composition root that wires the virtual fleet, the simulation and the
//! HTTP adapter together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (env vars, config file)
//! - Seed the in-memory device registry
//! - Construct application services and the event bus
//! - Spawn the simulation loop
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

use mockhub_adapter_http_axum::cors::CorsHeaders;
use mockhub_adapter_http_axum::state::AppState;
use mockhub_adapter_virtual::{Simulator, seed_fleet};
use mockhub_app::event_bus::InProcessEventBus;
use mockhub_app::registry::InMemoryDeviceRegistry;
use mockhub_app::services::device_service::DeviceService;

use crate::config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Fleet
    let registry = Arc::new(InMemoryDeviceRegistry::new(seed_fleet()?));
    tracing::info!(devices = registry.len(), "device fleet seeded");

    // Event bus
    let event_bus = Arc::new(InProcessEventBus::new(config.events.capacity));

    // Simulation
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let simulator = Simulator::new(Arc::clone(&registry), Arc::clone(&event_bus));
    let simulation = tokio::spawn(simulator.run(StdRng::from_os_rng(), shutdown_rx.clone()));

    // HTTP
    let state =
        AppState::new(DeviceService::new(registry), event_bus).with_shutdown(shutdown_rx);
    let cors = CorsHeaders::new(&config.cors.allowed_origin)?;
    let app = mockhub_adapter_http_axum::router::build(state, &cors);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(
        addr = %bind_addr,
        allowed_origin = %config.cors.allowed_origin,
        "mockhub listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_tx))
        .await?;

    simulation.await?;
    tracing::info!("mockhubd stopped");

    Ok(())
}

/// Resolve on Ctrl-C, after telling the simulation and the open change
/// streams to stop.
async fn shutdown_signal(shutdown: watch::Sender<bool>) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(err) => {
            tracing::warn!(error = %err, "failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
    shutdown.send_replace(true);
}
