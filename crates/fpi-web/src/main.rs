//! Food Pantry Inventory constraint pages server.

use clap::Parser;
use fpi_web::{create_router, AppState, Args, StorageBackend, WebConfig};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_filter = args.log_level.clone();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("fpi_web={0},fpi_core={0},tower_http=info", log_filter).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = WebConfig::from(args);
    match &config.storage {
        StorageBackend::Memory => info!("Using in-memory constraint store"),
        StorageBackend::Sled(path) => info!(path = %path.display(), "Opening constraint store"),
    }

    let store = config.open_store()?;
    info!(constraints = store.count()?, "Constraint store ready");

    let state = AppState::new(store, config.clone());
    let app = create_router(state);

    let listener = TcpListener::bind(&config.listen_addr).await?;
    info!("Food Pantry Inventory listening on http://{}", config.listen_addr);
    info!("Constraints at http://{}/fpiweb/constraints/", config.listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
