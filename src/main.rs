//! Movie booking HTTP server.

use cinebook::{
    booking::BookingEngine,
    config::Config,
    inventory::PostgresInventory,
    server::{AppState, build_router},
};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cinebook=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting movie booking server");

    let config = Config::from_env();
    info!(
        database_url = %config.postgres.url,
        lock_timeout_ms = config.postgres.lock_timeout_ms,
        "Configuration loaded"
    );

    info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(config.postgres.max_connections)
        .min_connections(config.postgres.min_connections)
        .acquire_timeout(Duration::from_secs(config.postgres.connect_timeout))
        .connect(&config.postgres.url)
        .await?;
    info!("Database connected");

    sqlx::migrate!("./migrations").run(&pool).await?;
    info!("Migrations applied");

    let engine = Arc::new(BookingEngine::new(
        pool.clone(),
        config.postgres.lock_timeout_ms,
    ));
    let inventory = Arc::new(PostgresInventory::new(pool.clone()));
    let state = AppState::new(engine, inventory, pool);

    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %addr, "Server listening");

    // Once a shutdown signal fires, in-flight requests get at most
    // `shutdown_timeout` seconds to drain before the server is torn down.
    let (drain_tx, mut drain_rx) = tokio::sync::watch::channel(false);
    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                shutdown_signal().await;
                let _ = drain_tx.send(true);
            })
            .await
    });

    tokio::select! {
        result = &mut server => result??,
        _ = drain_rx.changed() => {
            let drain = Duration::from_secs(config.server.shutdown_timeout);
            match tokio::time::timeout(drain, &mut server).await {
                Ok(result) => result??,
                Err(_) => {
                    warn!(
                        timeout_secs = config.server.shutdown_timeout,
                        "Graceful shutdown timed out, aborting server task"
                    );
                    server.abort();
                }
            }
        }
    }

    info!("Server stopped");
    Ok(())
}

/// Graceful shutdown signal handler.
///
/// Waits for Ctrl+C (SIGINT) or SIGTERM. In-flight transactions either
/// commit or roll back at the store; nothing is left half-applied.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!(error = %err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C signal, shutting down gracefully...");
        },
        () = terminate => {
            info!("Received SIGTERM signal, shutting down gracefully...");
        },
    }
}
