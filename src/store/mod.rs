// src/store/mod.rs - Persistence facade over the local and remote tiers

pub mod local;
pub mod remote;

use crate::config::ThemeConfig;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

pub use local::LocalStore;
pub use remote::{MemoryRepository, NullRepository, RemoteError, ThemeRepository};

#[derive(Debug, Error)]
pub enum StoreError {
    /// Bad operator input. Surfaced immediately, nothing is written.
    #[error("invalid input: {0}")]
    Validation(String),
    /// Local tier read/write failure. Callers degrade to the next tier.
    #[error("local storage failure: {0}")]
    Storage(String),
    /// Remote tier failure after a successful local write. Recoverable;
    /// the local state stands.
    #[error(transparent)]
    RemoteSync(#[from] RemoteError),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Storage(err.to_string())
    }
}

/// A named snapshot in the custom-theme catalog. Immutable after creation;
/// deleting one never touches the committed config, even if the committed
/// config originated from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomThemeEntry {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub config: ThemeConfig,
    pub created_at: DateTime<Utc>,
}

impl CustomThemeEntry {
    pub fn new(id: u64, name: &str, description: &str, config: ThemeConfig) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            config,
            created_at: Utc::now(),
        }
    }
}

/// Two-tier persistence for the committed config plus the custom-theme
/// catalog. Reads degrade remote -> local -> default and never fail; writes
/// go local-first, then remote best-effort.
pub struct ConfigStore {
    local: LocalStore,
    remote: Arc<dyn ThemeRepository>,
}

impl ConfigStore {
    pub fn new(local: LocalStore, remote: Arc<dyn ThemeRepository>) -> Self {
        Self { local, remote }
    }

    /// Resolve the committed config with precedence remote > local >
    /// default. A failure at either tier degrades to the next one; this
    /// never returns an error.
    pub async fn load(&self) -> ThemeConfig {
        match self.remote.load().await {
            Ok(Some(config)) => {
                log::debug!("loaded theme from remote profile");
                return config;
            }
            Ok(None) => log::debug!("remote profile empty, trying local tier"),
            Err(e) => log::warn!("remote load failed, trying local tier: {}", e),
        }

        match self.local.load_config() {
            Ok(Some(config)) => config,
            Ok(None) => ThemeConfig::default(),
            Err(e) => {
                log::warn!("local load failed, using default config: {}", e);
                ThemeConfig::default()
            }
        }
    }

    /// Persist the committed config. The local write must succeed before
    /// the remote tier is attempted; a remote failure is reported as
    /// `RemoteSync` but does not roll back the local write.
    pub async fn save(&self, config: &ThemeConfig) -> Result<(), StoreError> {
        self.local.save_config(config)?;
        self.remote.save(config).await?;
        Ok(())
    }

    /// Persist the compiled-in default to both tiers.
    pub async fn reset(&self) -> Result<(), StoreError> {
        self.local.save_config(&ThemeConfig::default())?;
        self.remote.reset().await?;
        Ok(())
    }

    /// Catalog entries, oldest first. A read failure degrades to an empty
    /// list rather than surfacing an error.
    pub fn list_custom(&self) -> Vec<CustomThemeEntry> {
        match self.local.load_catalog() {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("custom theme catalog unreadable: {}", e);
                Vec::new()
            }
        }
    }

    /// Append a named snapshot to the catalog. Fails with `Validation` on
    /// a blank name; the catalog is left unchanged on any failure.
    pub fn save_custom(
        &self,
        name: &str,
        description: &str,
        config: ThemeConfig,
    ) -> Result<CustomThemeEntry, StoreError> {
        if name.trim().is_empty() {
            return Err(StoreError::Validation(
                "custom theme name must not be empty".to_string(),
            ));
        }

        let mut entries = self.local.load_catalog()?;
        let id = entries.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        let entry = CustomThemeEntry::new(id, name.trim(), description, config);
        entries.push(entry.clone());
        self.local.save_catalog(&entries)?;
        Ok(entry)
    }

    /// Remove a catalog entry by id. Removing an unknown id is a no-op.
    pub fn delete_custom(&self, id: u64) -> Result<(), StoreError> {
        let mut entries = self.local.load_catalog()?;
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() != before {
            self.local.save_catalog(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ColorKey;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> (ConfigStore, Arc<MemoryRepository>) {
        let remote = Arc::new(MemoryRepository::new());
        let store = ConfigStore::new(
            LocalStore::with_dir(dir.path().to_path_buf()),
            remote.clone(),
        );
        (store, remote)
    }

    #[tokio::test]
    async fn test_load_precedence_remote_wins() {
        let dir = TempDir::new().unwrap();
        let (store, remote) = store_in(&dir);

        let local_cfg = ThemeConfig {
            color: Some(ColorKey::Red),
            ..ThemeConfig::default()
        };
        store.local.save_config(&local_cfg).unwrap();

        let remote_cfg = ThemeConfig {
            color: Some(ColorKey::Blue),
            ..ThemeConfig::default()
        };
        remote.push_external_change(remote_cfg.clone());

        assert_eq!(store.load().await, remote_cfg);
    }

    #[tokio::test]
    async fn test_load_degrades_to_local_then_default() {
        let dir = TempDir::new().unwrap();
        let (store, remote) = store_in(&dir);
        remote.set_fail_loads(true);

        // No local file either: default
        assert_eq!(store.load().await, ThemeConfig::default());

        let local_cfg = ThemeConfig {
            color: Some(ColorKey::Green),
            ..ThemeConfig::default()
        };
        store.local.save_config(&local_cfg).unwrap();
        assert_eq!(store.load().await, local_cfg);
    }

    #[tokio::test]
    async fn test_corrupt_local_degrades_to_default() {
        let dir = TempDir::new().unwrap();
        let (store, remote) = store_in(&dir);
        remote.set_fail_loads(true);
        std::fs::write(dir.path().join("theme.json"), "garbage").unwrap();

        assert_eq!(store.load().await, ThemeConfig::default());
    }

    #[tokio::test]
    async fn test_save_local_survives_remote_failure() {
        let dir = TempDir::new().unwrap();
        let (store, remote) = store_in(&dir);
        remote.set_fail_saves(true);

        let config = ThemeConfig {
            color: Some(ColorKey::Orange),
            ..ThemeConfig::default()
        };
        let result = store.save(&config).await;
        assert!(matches!(result, Err(StoreError::RemoteSync(_))));
        // Local write stands
        assert_eq!(store.local.load_config().unwrap(), Some(config));
    }

    #[tokio::test]
    async fn test_save_custom_validates_name() {
        let dir = TempDir::new().unwrap();
        let (store, _) = store_in(&dir);

        let before = store.list_custom();
        let result = store.save_custom("", "desc", ThemeConfig::default());
        assert!(matches!(result, Err(StoreError::Validation(_))));
        assert_eq!(store.list_custom(), before);

        let result = store.save_custom("   ", "desc", ThemeConfig::default());
        assert!(matches!(result, Err(StoreError::Validation(_))));
    }

    #[tokio::test]
    async fn test_custom_catalog_lifecycle() {
        let dir = TempDir::new().unwrap();
        let (store, _) = store_in(&dir);

        let a = store
            .save_custom("Autumn", "warm", ThemeConfig::default())
            .unwrap();
        let b = store
            .save_custom("Winter", "cool", ThemeConfig::default())
            .unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(store.list_custom().len(), 2);

        store.delete_custom(a.id).unwrap();
        let remaining = store.list_custom();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name, "Winter");

        // Unknown id is a no-op
        store.delete_custom(999).unwrap();
        assert_eq!(store.list_custom().len(), 1);
    }
}
