mod core;
mod features;
mod modules;
mod shared;

use crate::core::app::{build_router, AppServices};
use crate::core::config::{Config, DataConfig, DataSource, LoadFailurePolicy};
use crate::features::locations::models::Dataset;
use crate::features::locations::{HierarchyStore, LocationService};
use crate::features::system::SystemService;
use crate::modules::locale_data::{EmbeddedProvider, HierarchyProvider, RemoteProvider};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

fn provider_for(data: &DataConfig) -> anyhow::Result<Box<dyn HierarchyProvider>> {
    Ok(match data.source {
        DataSource::Embedded => Box::new(EmbeddedProvider),
        DataSource::Remote => Box::new(
            RemoteProvider::new(data.base_url.clone(), data.fetch_timeout)
                .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?,
        ),
    })
}

/// Load the hierarchy once, applying the configured failure policy
async fn load_dataset(data: &DataConfig) -> anyhow::Result<Dataset> {
    let provider = provider_for(data)?;
    tracing::info!("Loading Uganda administrative data from {}", provider.describe());

    match provider.load_hierarchy().await {
        Ok(dataset) => Ok(dataset),
        Err(e) => match data.on_failure {
            LoadFailurePolicy::Fail => Err(anyhow::anyhow!("Failed to load hierarchy: {}", e)),
            LoadFailurePolicy::Degrade => {
                tracing::error!(
                    "Failed to load hierarchy: {}. Serving an empty dataset; every lookup will return 404",
                    e
                );
                Ok(Dataset::default())
            }
        },
    }
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!(
        "System info: tokio_worker_threads={}, pid={}",
        worker_threads,
        std::process::id()
    );
    tracing::info!(
        "Configuration loaded successfully (data_source={}, not_found_policy={:?})",
        config.data.source,
        config.lookup.not_found_policy
    );

    let dataset = load_dataset(&config.data).await?;
    if dataset.is_empty() {
        tracing::warn!("Hierarchy is empty; /health will report unhealthy");
    }
    let loaded_at = chrono::Utc::now();

    let store = Arc::new(HierarchyStore::new(dataset));
    let stats = store.stats();
    tracing::info!(
        "Hierarchy loaded: districts={}, counties={}, subcounties={}, parishes={}, villages={}",
        stats.districts,
        stats.counties,
        stats.subcounties,
        stats.parishes,
        stats.villages
    );

    let location_service = Arc::new(LocationService::new(
        Arc::clone(&store),
        config.lookup.not_found_policy,
    ));
    tracing::info!("Location service initialized");

    let system_service = Arc::new(SystemService::new(
        Arc::clone(&store),
        config.swagger.title.clone(),
        config.swagger.description.clone(),
        config.swagger.version.clone(),
        config.data.source_label(),
        loaded_at,
    ));
    tracing::info!("System service initialized");

    let app = build_router(
        AppServices {
            locations: location_service,
            system: system_service,
        },
        &config.swagger,
        config.app.cors_allowed_origins.clone(),
    );

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    // Use socket2 for TCP listener configuration
    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    socket.set_nodelay(true)?;

    let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
    socket.set_tcp_keepalive(&keepalive)?;

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on {}", format!("http://{}", addr));
    tracing::info!(
        "Swagger UI available at {}",
        format!("http://{}/swagger-ui/", addr)
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutdown signal received");
}
