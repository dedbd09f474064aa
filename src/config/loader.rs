//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, validating all parameters,
//! and providing clear error messages for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::AppConfig;

/// Load and validate configuration from a TOML file.
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: &str) -> Result<AppConfig> {
  let path = Path::new(path);

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  let config = parse_config(&content)?;

  info!(
    admin = %config.marketplace.admin_email,
    signup_bonus = config.marketplace.signup_bonus,
    seed = config.seed.path.as_deref().unwrap_or("builtin"),
    "Configuration loaded successfully"
  );

  Ok(config)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<AppConfig> {
  let config: AppConfig =
    toml::from_str(content).with_context(|| "Failed to parse config.toml")?;

  validate_config(&config)?;
  Ok(config)
}

/// Validate all configuration parameters.
///
/// Checks for:
/// - A plausible admin email
/// - A non-empty theme storage key
/// - A positive default point value
/// - Usable storage and seed paths
fn validate_config(config: &AppConfig) -> Result<()> {
  let admin = config.marketplace.admin_email.trim();
  anyhow::ensure!(
    !admin.is_empty() && admin.contains('@'),
    "marketplace.admin_email must be an email address, got '{}'",
    config.marketplace.admin_email
  );

  anyhow::ensure!(
    config.marketplace.default_point_value > 0,
    "marketplace.default_point_value must be positive"
  );

  anyhow::ensure!(
    !config.preferences.theme_key.trim().is_empty(),
    "preferences.theme_key must not be empty"
  );

  anyhow::ensure!(
    config.preferences.in_memory || !config.preferences.data_dir.trim().is_empty(),
    "preferences.data_dir must not be empty unless preferences.in_memory is set"
  );

  if let Some(seed) = &config.seed.path {
    anyhow::ensure!(
      !seed.trim().is_empty(),
      "seed.path must not be empty when set"
    );
  }

  Ok(())
}
