//! Activities Backend
//!
//! A REST API server for managing extracurricular activity signups at
//! Mergington High School. Serves the activity registry API and the static
//! signup site.

use activities_backend::config::Config;
use activities_backend::routes;
use activities_backend::state::{ActivityCatalog, AppState};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = Config::from_env();
    info!("Configuration loaded: {:?}", config);

    // Initialize application state and seed the activity registry
    let app_state = Arc::new(RwLock::new(AppState::new()));
    {
        let mut state = app_state.write().await;
        if let Some(path) = &config.catalog.file {
            let count = state.load_catalog(path)?;
            info!("Loaded {} activities from {}", count, path);
        } else {
            let default_path = ActivityCatalog::default_path();
            if default_path.exists() {
                match state.load_catalog(&default_path) {
                    Ok(count) => {
                        info!("Loaded {} activities from {}", count, default_path.display())
                    }
                    Err(e) => tracing::warn!("Failed to load activity catalog: {}", e),
                }
            }
            if state.activity_count() == 0 {
                state.activities = ActivityCatalog::default_catalog();
                info!("Seeded {} built-in activities", state.activity_count());
            }
        }
    }

    // Build our application with routes
    let app = routes::create_router(app_state, &config.server.static_dir);

    // Bind to address from config
    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid server address: {}", e))?;

    info!("Server running on http://{}", addr);
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    // Setup graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Handle graceful shutdown signals (Ctrl+C, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully...");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down gracefully...");
        },
    }
}
