use clap::Parser;
use ranked_leaderboard::api;
use ranked_leaderboard::config::ServerConfig;
use ranked_leaderboard::leaderboard::{RandomSeedSource, RankedStore};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    config.validate()?;

    let store = Arc::new(match config.rng_seed {
        Some(seed) => {
            tracing::info!("Using fixed RNG seed {}", seed);
            RankedStore::with_seed_source(RandomSeedSource::with_seed(seed))
        }
        None => RankedStore::new(),
    });

    tracing::info!("Seeding {} users...", config.seed_count);
    let count = store.reset(config.seed_count, config.min_rating, config.max_rating);
    tracing::info!("Seeded {} users successfully", count);

    let app = api::router(store, config.policy());

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;

    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
