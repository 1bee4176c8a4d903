// src/store/remote.rs - Remote profile tier contract and in-process implementations

use crate::config::ThemeConfig;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("remote profile store unavailable: {0}")]
    Unavailable(String),
    #[error("remote profile store rejected request: {0}")]
    Rejected(String),
}

/// Abstract remote profile store. The concrete transport (HTTP, RPC, ...)
/// lives outside this crate; the engine depends only on this interface.
#[async_trait]
pub trait ThemeRepository: Send + Sync {
    /// Fetch the profile's theme, `Ok(None)` when none has been saved.
    async fn load(&self) -> Result<Option<ThemeConfig>, RemoteError>;
    async fn save(&self, config: &ThemeConfig) -> Result<(), RemoteError>;
    async fn reset(&self) -> Result<(), RemoteError>;
}

/// Repository for clients with no remote profile configured. Loads are
/// always empty, writes always succeed.
#[derive(Debug, Default)]
pub struct NullRepository;

#[async_trait]
impl ThemeRepository for NullRepository {
    async fn load(&self) -> Result<Option<ThemeConfig>, RemoteError> {
        Ok(None)
    }

    async fn save(&self, _config: &ThemeConfig) -> Result<(), RemoteError> {
        Ok(())
    }

    async fn reset(&self) -> Result<(), RemoteError> {
        Ok(())
    }
}

/// In-memory repository with failure injection, the test double for the
/// remote tier.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    stored: Mutex<Option<ThemeConfig>>,
    fail_loads: AtomicBool,
    fail_saves: AtomicBool,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ThemeConfig) -> Self {
        Self {
            stored: Mutex::new(Some(config)),
            ..Self::default()
        }
    }

    pub fn set_fail_loads(&self, fail: bool) {
        self.fail_loads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Overwrite the stored config directly, simulating an edit made from
    /// another device. Picked up by the next `load()`.
    pub fn push_external_change(&self, config: ThemeConfig) {
        *self.stored.lock().unwrap() = Some(config);
    }

    pub fn stored(&self) -> Option<ThemeConfig> {
        self.stored.lock().unwrap().clone()
    }
}

#[async_trait]
impl ThemeRepository for MemoryRepository {
    async fn load(&self) -> Result<Option<ThemeConfig>, RemoteError> {
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(RemoteError::Unavailable("injected load failure".into()));
        }
        Ok(self.stored.lock().unwrap().clone())
    }

    async fn save(&self, config: &ThemeConfig) -> Result<(), RemoteError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(RemoteError::Unavailable("injected save failure".into()));
        }
        *self.stored.lock().unwrap() = Some(config.clone());
        Ok(())
    }

    async fn reset(&self) -> Result<(), RemoteError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(RemoteError::Unavailable("injected reset failure".into()));
        }
        *self.stored.lock().unwrap() = None;
        Ok(())
    }
}
