//! # locboxd — locbox daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (flags, optional config file)
//! - Initialize logging
//! - Open the redb store and create the `Locations` table
//! - Construct the repository (adapter) and inject it into the service
//! - Build the axum router, injecting the service
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod cli;
mod config;

use std::error::Error as _;
use std::net::SocketAddr;

use locbox_adapter_http_axum::state::AppState;
use locbox_adapter_storage_redb::{Config as StorageConfig, RedbLocationRepository};
use locbox_app::services::location_service::LocationService;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, CliError, USAGE};
use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = match Cli::parse_from(std::env::args().skip(1)) {
        Ok(cli) => cli,
        Err(CliError::Help) => {
            println!("{USAGE}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("{err}\n{USAGE}");
            std::process::exit(2);
        }
    };

    let config = Config::load(&cli)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Database
    let db = StorageConfig {
        path: config.database.path.clone(),
    }
    .build()
    .inspect_err(|err| {
        tracing::error!(
            error = %err,
            source = ?err.source(),
            path = %config.database.path.display(),
            "cannot open store"
        );
    })?;

    // Services
    let location_service = LocationService::new(RedbLocationRepository::new(&db));

    // HTTP
    let app = locbox_adapter_http_axum::router::build(AppState::new(location_service));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .inspect_err(|err| tracing::error!(error = %err, %bind_addr, "cannot bind listener"))?;
    tracing::info!(
        addr = %bind_addr,
        db = %config.database.path.display(),
        "locboxd listening"
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    drop(db);
    tracing::info!("store closed, bye");

    Ok(())
}

/// Wait for SIGINT (Ctrl-C) or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "cannot listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received, draining connections");
}
