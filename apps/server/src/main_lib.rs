use std::sync::Arc;

use crate::config::Config;
use rebalancer_core::rebalance::{RebalanceService, RebalanceServiceTrait};
use rebalancer_core::settings::{SettingsService, SettingsServiceTrait};
use rebalancer_storage_sqlite::{
    db, rebalance::AssetEntryRepository, settings::SettingsRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub rebalance_service: Arc<dyn RebalanceServiceTrait>,
    pub settings_service: Arc<dyn SettingsServiceTrait>,
}

/// JSON logs filtered by `RUST_LOG` (default `info`). Records emitted through
/// the `log` facade by the library crates are captured as well.
pub fn init_tracing() {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone())?;

    let settings_repo = Arc::new(SettingsRepository::new(pool.clone(), writer.clone()));
    let settings_service = Arc::new(SettingsService::new(settings_repo));
    tracing::info!(
        "Display currency: {}",
        settings_service.get_display_currency()?
    );

    let asset_entry_repo = Arc::new(AssetEntryRepository::new(pool.clone(), writer.clone()));
    let rebalance_service = Arc::new(RebalanceService::new(asset_entry_repo));

    Ok(Arc::new(AppState {
        rebalance_service,
        settings_service,
    }))
}
