//! In-memory preference store.
//!
//! Not durable: values are lost when the process exits. Used for tests and
//! for runs configured without a preferences directory.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::ports::preferences::PreferenceStore;

/// `HashMap`-backed preference store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPreferenceStore {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with one preset value.
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_string(), value.to_string());
        Self {
            values: Arc::new(RwLock::new(values)),
        }
    }
}

#[async_trait]
impl PreferenceStore for InMemoryPreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn is_healthy(&self) -> bool {
        true
    }
}
