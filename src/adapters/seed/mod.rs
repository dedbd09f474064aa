//! Seed Loader - Initial Marketplace Contents
//!
//! Provides the store's starting data either from the catalog compiled
//! into the binary (`builtin_seed`) or from a JSON file with the same
//! shape (`load_seed_file`). Both are validated before use: user and item
//! ids must be unique and every swap request must reference a known item.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use tokio::fs;
use tracing::{info, instrument};

use crate::domain::MarketSeed;

const BUILTIN_SEED: &str = include_str!("builtin.json");

/// The demo catalog: two members (one admin) and three listings.
///
/// # Errors
/// Only fails if the embedded JSON is malformed.
pub fn builtin_seed() -> Result<MarketSeed> {
    let seed: MarketSeed =
        serde_json::from_str(BUILTIN_SEED).context("Failed to parse built-in seed")?;
    validate_seed(&seed)?;
    Ok(seed)
}

/// Load and validate a seed from a JSON file.
#[instrument]
pub async fn load_seed_file(path: &str) -> Result<MarketSeed> {
    let path = Path::new(path);

    let json = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read seed file: {}", path.display()))?;

    let seed: MarketSeed = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse seed file: {}", path.display()))?;

    validate_seed(&seed)?;

    info!(
        users = seed.users.len(),
        items = seed.items.len(),
        swap_requests = seed.swap_requests.len(),
        "Seed loaded"
    );

    Ok(seed)
}

/// Check identifier uniqueness and swap-request references.
fn validate_seed(seed: &MarketSeed) -> Result<()> {
    let mut user_ids = HashSet::new();
    for user in &seed.users {
        anyhow::ensure!(
            user_ids.insert(user.id.as_str()),
            "Duplicate user id '{}' in seed",
            user.id
        );
    }

    let mut item_ids = HashSet::new();
    for item in &seed.items {
        anyhow::ensure!(
            item_ids.insert(item.id.as_str()),
            "Duplicate item id '{}' in seed",
            item.id
        );
    }

    for request in &seed.swap_requests {
        anyhow::ensure!(
            item_ids.contains(request.item_id.as_str()),
            "Swap request '{}' references unknown item '{}'",
            request.id,
            request.item_id
        );
    }

    Ok(())
}
