use std::sync::Arc;

use salvo::conn::TcpListener;
use salvo::{Listener, Router};
use tokio::sync::RwLock;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

use zoneboard_app::app::{api, page};
use zoneboard_app::store_handler::StoreHandler;
use zoneboard_core::config::load_config;
use zoneboard_service::clock::SystemClock;
use zoneboard_service::store::TimezoneStore;
use zoneboard_service::tz::{TzCatalog, detect_local_timezone};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting Zoneboard timezone tracker");

    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let local_timezone = match &config.clock.local_timezone {
        Some(id) => id.clone(),
        None => detect_local_timezone()?,
    };

    let catalog = config
        .clock
        .offered_timezones
        .as_ref()
        .map_or_else(TzCatalog::with_default_zones, |offered| {
            TzCatalog::new(offered.clone())
        });

    let store = TimezoneStore::initialize(
        catalog,
        Arc::new(SystemClock),
        config.clock.time_format,
        &local_timezone,
        &config.clock.local_label,
    )?;

    tracing::info!(local_timezone = %local_timezone, "Record store initialized");

    let bind_addr = config.server.bind_addr();
    let acceptor = TcpListener::new(bind_addr.clone()).bind().await;

    let router = Router::new()
        .hoop(StoreHandler {
            store: Arc::new(RwLock::new(store)),
        })
        .push(api::routes())
        .push(page::routes());

    tracing::info!("Server listening on {bind_addr}");

    salvo::Server::new(acceptor).serve(router).await;

    Ok(())
}
