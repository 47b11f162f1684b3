use roster_server::{AppState, build_router, logger, open_cache_store, spawn_sweeper};

use std::error::Error;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        return Err(e.into());
    }

    // Load and validate configuration
    let config = roster_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = roster_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting roster-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let store = open_cache_store(&config).await?;

    let sweeper = match config.cache.sweep_interval() {
        Some(interval) => {
            info!("Cache sweep every {}s", interval.as_secs());
            Some(spawn_sweeper(store.clone(), interval))
        }
        None => {
            warn!("Cache sweep disabled; expired entries stay until overwritten");
            None
        }
    };

    let app = build_router(AppState::from_config(&config, store));

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => {
                    error!("Failed to listen for SIGINT: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        })
        .await?;

    if let Some(handle) = sweeper {
        handle.abort();
    }
    info!("Graceful shutdown complete");

    Ok(())
}
