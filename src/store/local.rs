// src/store/local.rs - Durable local tier: JSON files under the config directory

use crate::config::ThemeConfig;
use crate::store::{CustomThemeEntry, StoreError};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

const THEME_FILE: &str = "theme.json";
const CATALOG_FILE: &str = "custom_themes.json";

/// File-backed local tier. Writes are synchronous and durable: serialized
/// to a sibling temp file, flushed, then renamed over the target so a
/// crash never leaves a truncated file behind.
#[derive(Debug, Clone)]
pub struct LocalStore {
    base_dir: PathBuf,
}

impl LocalStore {
    /// Store rooted at the platform config directory
    /// (e.g. `~/.config/themely`).
    pub fn new() -> Self {
        let base_dir = dirs::config_dir()
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".config")
            })
            .join("themely");
        Self { base_dir }
    }

    /// Store rooted at an explicit directory, used by tests and embedders.
    pub fn with_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Read the persisted theme. `Ok(None)` when nothing has been saved
    /// yet; `Err` on unreadable or malformed content (the caller degrades
    /// to the next tier).
    pub fn load_config(&self) -> Result<Option<ThemeConfig>, StoreError> {
        let path = self.base_dir.join(THEME_FILE);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        let config: ThemeConfig = serde_json::from_str(&content)?;
        Ok(Some(config))
    }

    pub fn save_config(&self, config: &ThemeConfig) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(config)?;
        self.write_durably(THEME_FILE, &json)
    }

    pub fn load_catalog(&self) -> Result<Vec<CustomThemeEntry>, StoreError> {
        let path = self.base_dir.join(CATALOG_FILE);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path)?;
        let entries: Vec<CustomThemeEntry> = serde_json::from_str(&content)?;
        Ok(entries)
    }

    pub fn save_catalog(&self, entries: &[CustomThemeEntry]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(entries)?;
        self.write_durably(CATALOG_FILE, &json)
    }

    fn write_durably(&self, file_name: &str, content: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.base_dir)?;
        let target = self.base_dir.join(file_name);
        let tmp = self.base_dir.join(format!("{}.tmp", file_name));
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(content.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &target)?;
        Ok(())
    }
}

impl Default for LocalStore {
    fn default() -> Self {
        Self::new()
    }
}
