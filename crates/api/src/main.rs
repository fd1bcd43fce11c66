use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use drawer_core::memory_store::MemoryStore;
use drawer_core::store::DocumentStore;
use drawer_db::PgDocumentStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use drawer_api::config::ServerConfig;
use drawer_api::router::build_app_router;
use drawer_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "drawer_api=debug,drawer_db=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env().context("Invalid configuration")?;
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Store ---
    let store = connect_store(&config).await?;

    // --- Upload directory ---
    tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .with_context(|| format!("Failed to create {}", config.upload_dir.display()))?;
    tracing::info!(
        upload_dir = %config.upload_dir.display(),
        max_upload_bytes = config.max_upload_bytes,
        "Upload directory ready",
    );

    // --- Router ---
    let state = AppState::new(Arc::clone(&store), &config);
    let app = build_app_router(state, &config);

    // --- Start server ---
    let host: IpAddr = config.host.parse().context("Invalid HOST address")?;
    let addr = SocketAddr::new(host, config.port);
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, closing store");

    let teardown = Duration::from_secs(config.shutdown_timeout_secs);
    if tokio::time::timeout(teardown, store.close()).await.is_err() {
        tracing::warn!(?teardown, "Store did not close in time");
    }

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Open the PostgreSQL store when `DATABASE_URL` is set, otherwise fall back
/// to the in-memory store.
async fn connect_store(config: &ServerConfig) -> anyhow::Result<Arc<dyn DocumentStore>> {
    let Some(database_url) = config.database.url.as_deref() else {
        tracing::warn!("DATABASE_URL not set, using in-memory store (data is not persisted)");
        return Ok(Arc::new(MemoryStore::new()));
    };

    let pool = drawer_db::create_pool(
        database_url,
        config.database.name.as_deref(),
        config.database.max_connections,
    )
    .await
    .context("Failed to connect to database")?;
    tracing::info!("Database connection pool created");

    drawer_db::health_check(&pool)
        .await
        .context("Database health check failed")?;
    tracing::info!("Database health check passed");

    drawer_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Database migrations applied");

    Ok(Arc::new(PgDocumentStore::new(pool)))
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
