//! Configuration Module - TOML-based Marketplace Configuration
//!
//! Loads and validates configuration from `config.toml`. Every field has
//! a serde default, so an empty file (or a missing section) yields the
//! stock marketplace: 50-point signup bonus, 30-point listing default,
//! `admin@rewear.com` as the admin account and a light theme stored under
//! `rewear-theme`.

pub mod loader;

use serde::Deserialize;

use crate::domain::Theme;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
  /// Process identity and logging.
  #[serde(default)]
  pub app: AppSection,
  /// Marketplace rules.
  #[serde(default)]
  pub marketplace: MarketplaceConfig,
  /// Client preference storage.
  #[serde(default)]
  pub preferences: PreferencesConfig,
  /// Initial data source.
  #[serde(default)]
  pub seed: SeedConfig,
}

/// Process identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppSection {
  /// Human-readable name used in startup logs.
  #[serde(default = "default_name")]
  pub name: String,
  /// Log level (trace, debug, info, warn, error).
  #[serde(default = "default_log_level")]
  pub log_level: String,
}

/// Points and moderation rules.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketplaceConfig {
  /// Points granted to every new signup.
  #[serde(default = "default_signup_bonus")]
  pub signup_bonus: u32,
  /// Point value applied when a listing draft leaves it unset.
  #[serde(default = "default_point_value")]
  pub default_point_value: u32,
  /// Email of the account that may moderate listings.
  #[serde(default = "default_admin_email")]
  pub admin_email: String,
}

/// Preference storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PreferencesConfig {
  /// Directory holding `preferences.json`.
  #[serde(default = "default_preferences_dir")]
  pub data_dir: String,
  /// Keep preferences in memory only; nothing is written to `data_dir`.
  #[serde(default)]
  pub in_memory: bool,
  /// Storage key of the theme flag.
  #[serde(default = "default_theme_key")]
  pub theme_key: String,
  /// Theme used when nothing valid is stored.
  #[serde(default)]
  pub default_theme: Theme,
}

/// Seed data configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedConfig {
  /// JSON seed file. The built-in demo catalog is used when unset.
  #[serde(default)]
  pub path: Option<String>,
}

impl Default for AppSection {
  fn default() -> Self {
    Self {
      name: default_name(),
      log_level: default_log_level(),
    }
  }
}

impl Default for MarketplaceConfig {
  fn default() -> Self {
    Self {
      signup_bonus: default_signup_bonus(),
      default_point_value: default_point_value(),
      admin_email: default_admin_email(),
    }
  }
}

impl Default for PreferencesConfig {
  fn default() -> Self {
    Self {
      data_dir: default_preferences_dir(),
      in_memory: false,
      theme_key: default_theme_key(),
      default_theme: Theme::default(),
    }
  }
}

// Default value functions for serde

fn default_name() -> String {
  "rewear-market".to_string()
}

fn default_log_level() -> String {
  "info".to_string()
}

const fn default_signup_bonus() -> u32 {
  50
}

const fn default_point_value() -> u32 {
  30
}

fn default_admin_email() -> String {
  "admin@rewear.com".to_string()
}

fn default_preferences_dir() -> String {
  "data".to_string()
}

fn default_theme_key() -> String {
  "rewear-theme".to_string()
}
