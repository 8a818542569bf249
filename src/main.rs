//! Library catalog server entry point.
//!
//! All operations are exposed via GraphQL at /graphql.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use library_catalog::cli::{CliOptions, USAGE};
use library_catalog::config::Config;
use library_catalog::db::{Database, seed::seed_catalog};
use library_catalog::services::{CatalogEvents, CatalogEventsConfig, CatalogService};
use library_catalog::{AppState, build_app};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliOptions::from_args();
    if cli.help {
        println!("{USAGE}");
        return Ok(());
    }

    dotenvy::dotenv().ok();
    let config = Arc::new(Config::from_env()?);

    let db = Database::new();
    let events = CatalogEvents::new(CatalogEventsConfig {
        channel_capacity: config.event_channel_capacity,
    });
    let catalog = CatalogService::new(db.clone(), events);

    if cli.print_schema {
        let state = AppState::new(config, catalog);
        println!("{}", state.schema.sdl());
        return Ok(());
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "library_catalog=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    tracing::info!("Starting library catalog");
    tracing::info!(?config, "Configuration loaded");

    if config.seed_data {
        seed_catalog(&db).context("Failed to seed catalog")?;
    } else {
        tracing::info!("Seeding disabled, starting with an empty catalog");
    }

    let state = AppState::new(config.clone(), catalog);
    tracing::info!("GraphQL schema built");

    let app = build_app(state);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on {}", addr);
    tracing::info!("GraphQL playground: http://localhost:{}/graphql", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
