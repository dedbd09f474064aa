//! File Preference Store - Atomic JSON Key/Value Persistence
//!
//! Keeps all preferences in a single `preferences.json` object and
//! rewrites it atomically on every `set` (write to tmp file, then
//! rename), so the file is always either the old or the new version.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use crate::ports::preferences::PreferenceStore;

/// File-backed preference store.
pub struct FilePreferenceStore {
    /// Path to preferences.json.
    path: PathBuf,
    /// Temporary path for atomic writes.
    tmp_path: PathBuf,
    /// Serializes read-modify-write cycles.
    write_lock: Mutex<()>,
}

impl FilePreferenceStore {
    /// Create a preference store in the given data directory.
    ///
    /// Creates the directory if it doesn't exist.
    pub async fn new(data_dir: &str) -> Result<Self> {
        let dir = Path::new(data_dir);
        fs::create_dir_all(dir)
            .await
            .context("Failed to create preferences directory")?;

        Ok(Self {
            path: dir.join("preferences.json"),
            tmp_path: dir.join("preferences.json.tmp"),
            write_lock: Mutex::new(()),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let json = fs::read_to_string(&self.path)
            .await
            .context("Failed to read preferences file")?;

        serde_json::from_str(&json).context("Failed to parse preferences JSON")
    }
}

#[async_trait]
impl PreferenceStore for FilePreferenceStore {
    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut all = self.load_all().await?;
        let value = all.remove(key);
        debug!(found = value.is_some(), "Preference read");
        Ok(value)
    }

    #[instrument(skip(self))]
    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        // Unparseable contents are dropped and overwritten
        let mut all = match self.load_all().await {
            Ok(all) => all,
            Err(e) if e.is::<serde_json::Error>() => {
                warn!(error = %e, path = %self.path.display(), "Discarding corrupt preferences file");
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        all.insert(key.to_string(), value.to_string());

        let json = serde_json::to_string_pretty(&all)
            .context("Failed to serialize preferences")?;

        fs::write(&self.tmp_path, &json)
            .await
            .context("Failed to write tmp preferences file")?;

        fs::rename(&self.tmp_path, &self.path)
            .await
            .context("Failed to rename preferences file")?;

        info!(path = %self.path.display(), "Preference saved");
        Ok(())
    }

    async fn is_healthy(&self) -> bool {
        if !self.path.exists() {
            return true; // Nothing written yet
        }
        fs::metadata(&self.path).await.is_ok()
    }
}
