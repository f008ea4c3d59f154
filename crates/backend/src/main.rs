pub mod dashboards;
pub mod domain;
pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;
pub mod usecases;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use shared::clock::{Clock, SystemClock};
use shared::data::store::DashboardStore;
use shared::state::AppState;
use system::tasks::managers::LiveSalesFeedManager;
use system::tasks::worker::{ScheduledTaskWorker, TaskHandle};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = shared::config::load_config()?;
    tracing::info!(
        "Config: port {}, uploads '{}', feed {} every {}s (window {})",
        config.server.port,
        config.server.uploads_dir,
        if config.feed.enabled { "on" } else { "off" },
        config.feed.interval_seconds,
        config.feed.window_size
    );

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let seed = config.sample_data.seed;
    if let Some(seed) = seed {
        tracing::info!("Sample data seeded with {}", seed);
    }
    let mut rng = shared::random::from_seed_or_entropy(seed);
    let data = usecases::u501_generate_sample_data::generate(&mut *rng, clock.today());
    let store = Arc::new(DashboardStore::new(data));

    let feed = if config.feed.enabled {
        let manager = LiveSalesFeedManager::new(
            Arc::clone(&store),
            // derived so the feed does not replay the generator's draws
            shared::random::from_seed_or_entropy(seed.map(|s| s.wrapping_add(1))),
            Arc::clone(&clock),
            config.feed.window_size,
        );
        let worker = ScheduledTaskWorker::new(
            Arc::new(manager),
            Duration::from_secs(config.feed.interval_seconds),
        );
        Some(worker.start())
    } else {
        tracing::info!("Live sales feed is disabled");
        None
    };

    let port = config.server.port;
    let state = AppState::new(store, config);
    let app = routes::configure_routes(state);

    let addr: SocketAddr = ([0, 0, 0, 0], port).into();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Set PORT or server.port in config.toml to another value.",
                    port
                );
            } else {
                tracing::error!("Failed to bind to port {}. Error: {}", port, e);
            }
            stop_feed(feed).await;
            return Err(e.into());
        }
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    stop_feed(feed).await;
    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::error!("Cannot listen for the shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

async fn stop_feed(feed: Option<TaskHandle>) {
    if let Some(handle) = feed {
        match handle.stop().await {
            Ok(runs) => tracing::info!("Live sales feed stopped after {} ticks", runs),
            Err(e) => tracing::error!("Live sales feed did not stop cleanly: {:?}", e),
        }
    }
}
