//! ReWear Market - Entry Point
//!
//! Opens the marketplace store against the configured seed and
//! preference storage, then logs a snapshot of the catalog.
//!
//! Wiring sequence:
//! 1. Load config (path from `REWEAR_CONFIG`, default `config.toml`) + validate
//! 2. Init tracing (JSON structured logging)
//! 3. Load the seed (JSON file or built-in demo catalog)
//! 4. Open the preference store (file-backed or in-memory)
//! 5. Open the marketplace store, restoring the theme
//! 6. Log catalog and moderation totals

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use rewear_market::adapters::preferences::{FilePreferenceStore, InMemoryPreferenceStore};
use rewear_market::adapters::seed::{builtin_seed, load_seed_file};
use rewear_market::config::{self, AppConfig};
use rewear_market::domain::MarketSeed;
use rewear_market::ports::PreferenceStore;
use rewear_market::usecases::{CatalogQuery, MarketplaceStore};

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1. Load configuration ───────────────────────────────
    let config_path = std::env::var("REWEAR_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
    let config =
        config::loader::load_config(&config_path).context("Failed to load configuration")?;

    // ── 2. Initialize structured JSON logging ───────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.app.log_level)),
        )
        .json()
        .init();

    info!(
        name = %config.app.name,
        version = env!("CARGO_PKG_VERSION"),
        config = %config_path,
        "Starting ReWear Market"
    );

    // ── 3. Seed data ────────────────────────────────────────
    let seed = match config.seed.path.as_deref() {
        Some(path) => load_seed_file(path).await?,
        None => builtin_seed()?,
    };

    // ── 4-6. Preferences, store, snapshot ───────────────────
    if config.preferences.in_memory {
        run(&config, seed, Arc::new(InMemoryPreferenceStore::new())).await
    } else {
        let prefs = FilePreferenceStore::new(&config.preferences.data_dir)
            .await
            .context("Failed to open preference store")?;
        run(&config, seed, Arc::new(prefs)).await
    }
}

/// Open the store on the given preference backend and log its contents.
async fn run<P: PreferenceStore>(config: &AppConfig, seed: MarketSeed, prefs: Arc<P>) -> Result<()> {
    anyhow::ensure!(
        prefs.is_healthy().await,
        "Preference store is not usable"
    );

    let store = MarketplaceStore::open(seed, prefs, config).await;

    let browsable = store.browse(&CatalogQuery::default());
    let counts = store.moderation_counts();

    info!(
        theme = %store.theme(),
        users = store.users().len(),
        items = store.items().len(),
        browsable = browsable.len(),
        pending = counts.pending,
        approved = counts.approved,
        rejected = counts.rejected,
        swap_requests = store.swap_requests().len(),
        "Marketplace ready"
    );

    for item in store.featured(6) {
        info!(
            item_id = %item.id,
            title = %item.title,
            points = item.point_value,
            availability = %item.availability,
            "Featured listing"
        );
    }

    Ok(())
}
