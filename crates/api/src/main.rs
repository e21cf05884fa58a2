use anyhow::Result;
use axum::Router;
use tracing::info;

mod app;
mod config;
mod error;
mod middleware;
mod routes;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = config::Config::load()?;

    // Initialize logging
    middleware::logging::init_logging(&config.logging);

    // Install the Prometheus recorder before any metric is recorded
    middleware::init_metrics();

    info!(
        environment = %config.server.environment,
        "Starting Journal API v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Establish the connection pool, retrying while the database becomes
    // reachable
    let pool = persistence::db::connect_with_retry(&config.database).await?;

    // Ensure the entries table exists before serving
    if let Err(e) = persistence::db::ensure_schema(&pool).await {
        pool.close().await;
        return Err(e.into());
    }

    // Build application
    let app = app::create_app(config.clone(), pool.clone());

    // Serve until shutdown, then close the pool on every exit path
    let result = run_server(&config, app).await;

    info!("Closing database pool");
    pool.close().await;
    info!("Server shutdown complete");

    result
}

async fn run_server(config: &config::Config, app: Router) -> Result<()> {
    let addr = config.socket_addr();
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
