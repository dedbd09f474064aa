//! Preference Store Port - Durable Client Storage Interface
//!
//! Defines the key/value storage the marketplace uses for client-side
//! preferences. Only the theme flag crosses this boundary: it is read
//! once when the store opens and written on every toggle.

use async_trait::async_trait;

/// Trait for durable string key/value storage.
///
/// Values are opaque strings; callers own parsing. A missing key is
/// `Ok(None)`, never an error.
#[async_trait]
pub trait PreferenceStore: Send + Sync + 'static {
  /// Read the value stored under `key`.
  async fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

  /// Store `value` under `key`, replacing any previous value.
  async fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;

  /// Check if the backing storage is usable.
  async fn is_healthy(&self) -> bool;
}
