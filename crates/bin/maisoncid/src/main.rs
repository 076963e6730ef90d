//! # maisoncid: maisonci daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`maisonci.toml`, env vars)
//! - Initialize `tracing` logging
//! - Build the catalog (built-in seed or JSON seed file)
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no domain logic belongs here.

mod config;

use tokio::sync::broadcast::error::RecvError;
use tracing_subscriber::EnvFilter;

use maisonci_adapter_http_axum::state::AppState;
use maisonci_adapter_storage_memory::Config as StorageConfig;
use maisonci_app::event_bus::InProcessEventBus;
use maisonci_app::services::catalog_service::CatalogService;
use maisonci_app::services::quote_request_service::QuoteRequestService;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Storage
    let store = StorageConfig {
        seed_path: config.catalog.seed_path.clone(),
    }
    .build()?;
    tracing::info!(
        services = store.catalog().services().len(),
        agencies = store.catalog().agencies().len(),
        "catalog ready"
    );

    // Event bus
    let event_bus = InProcessEventBus::new(256);
    spawn_event_logger(&event_bus);

    // Services
    let catalog_service = CatalogService::new(store.service_catalog(), store.agency_catalog());
    let quote_request_service =
        QuoteRequestService::new(store.quote_request_repository(), event_bus);

    // HTTP
    let state = AppState::new(catalog_service, quote_request_service);
    let app = maisonci_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "maisoncid listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("maisoncid stopped");
    Ok(())
}

/// Log every domain event published on `bus`.
fn spawn_event_logger(bus: &InProcessEventBus) {
    let mut events = bus.subscribe();
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => tracing::debug!(id = %event.id, kind = ?event.kind, "domain event"),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "event logger lagged behind");
                }
                Err(RecvError::Closed) => break,
            }
        }
    });
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
