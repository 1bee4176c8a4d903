// src/controller.rs - Theme engine state machine orchestrating store, overlay, and sink

use crate::config::{PreviewPatch, ThemeConfig};
use crate::overlay::PreviewOverlay;
use crate::resolver;
use crate::sink::TokenSink;
use crate::store::{ConfigStore, CustomThemeEntry, StoreError};

/// Lifecycle of the engine. `Applying` is the transient window between a
/// commit and its persistence completing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Uninitialized,
    Loading,
    Ready,
    Previewing,
    Applying,
}

/// Non-fatal condition attached to `Ready`. The active theme stays fully
/// usable; the UI decides whether to surface a retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeWarning {
    /// Remote tier rejected or missed a write; local state stands.
    SyncFailed(String),
    /// Local tier write failed; the in-memory state stands for this
    /// session only.
    StorageFailed(String),
}

/// The single entry point other layers call. Owns the committed config,
/// the optional preview overlay, and the injected sink; every storage
/// failure is converted into a `ThemeWarning` rather than propagated.
pub struct ThemeController<S: TokenSink> {
    store: ConfigStore,
    sink: S,
    state: ControllerState,
    committed: ThemeConfig,
    overlay: Option<PreviewOverlay>,
    warning: Option<ThemeWarning>,
}

impl<S: TokenSink> ThemeController<S> {
    pub fn new(store: ConfigStore, sink: S) -> Self {
        Self {
            store,
            sink,
            state: ControllerState::Uninitialized,
            committed: ThemeConfig::default(),
            overlay: None,
            warning: None,
        }
    }

    /// Load the committed config (remote > local > default) and render it.
    /// Always reaches `Ready`; a total storage failure just means the
    /// compiled-in default is what gets rendered.
    pub async fn initialize(&mut self) {
        self.state = ControllerState::Loading;
        self.committed = self.store.load().await;
        resolver::resolve(&self.committed).apply_to(&mut self.sink);
        self.state = ControllerState::Ready;
        log::info!("theme engine ready");
    }

    /// Enter (or continue) preview with an additive patch. Tokens are
    /// re-resolved and pushed on every call.
    pub fn begin_edit(&mut self, patch: PreviewPatch) {
        match self.state {
            ControllerState::Ready | ControllerState::Previewing => {}
            _ => {
                log::warn!("begin_edit ignored in state {:?}", self.state);
                return;
            }
        }
        let overlay = self
            .overlay
            .get_or_insert_with(|| PreviewOverlay::begin(self.committed.clone()));
        overlay.update(patch, &mut self.sink);
        self.state = ControllerState::Previewing;
    }

    /// Promote the draft to committed and persist it. Tokens are already
    /// on the sink from previewing, so the visual result is never reverted
    /// even if persistence fails; failures become warnings instead.
    pub async fn commit(&mut self) {
        let Some(overlay) = self.overlay.take() else {
            log::debug!("commit without active preview, nothing to do");
            return;
        };
        self.state = ControllerState::Applying;
        self.committed = overlay.draft();
        self.persist_committed().await;
        self.state = ControllerState::Ready;
    }

    /// Abandon the preview. The sink reverts to exactly
    /// `resolve(committed)`; no preview residue survives.
    pub fn cancel(&mut self) {
        if self.overlay.take().is_some() {
            resolver::resolve(&self.committed).apply_to(&mut self.sink);
        }
        if self.state == ControllerState::Previewing {
            self.state = ControllerState::Ready;
        }
    }

    /// Replace the committed config with the compiled-in default from any
    /// state, persist it to both tiers, and drop any active preview.
    pub async fn reset(&mut self) {
        self.overlay = None;
        self.committed = ThemeConfig::default();
        resolver::resolve(&self.committed).apply_to(&mut self.sink);
        self.state = ControllerState::Applying;
        if let Err(e) = self.store.reset().await {
            self.record_warning(e);
        }
        self.state = ControllerState::Ready;
    }

    /// Save a named snapshot to the custom catalog. Independent of the
    /// committed config; a validation failure leaves the catalog unchanged
    /// and is surfaced directly to the caller.
    pub fn save_as_named(
        &self,
        name: &str,
        description: &str,
        config: ThemeConfig,
    ) -> Result<CustomThemeEntry, StoreError> {
        self.store.save_custom(name, description, config)
    }

    pub fn named_themes(&self) -> Vec<CustomThemeEntry> {
        self.store.list_custom()
    }

    /// Stage a saved theme into preview for further edits.
    pub fn load_named(&mut self, entry: &CustomThemeEntry) {
        self.begin_edit(PreviewPatch::from_config(&entry.config));
    }

    /// Commit a saved theme directly, bypassing preview.
    pub async fn apply_named(&mut self, entry: &CustomThemeEntry) {
        self.overlay = None;
        self.state = ControllerState::Applying;
        self.committed = entry.config.clone();
        resolver::resolve(&self.committed).apply_to(&mut self.sink);
        self.persist_committed().await;
        self.state = ControllerState::Ready;
    }

    /// Delete a catalog entry. No back-reference is tracked: the committed
    /// config is untouched even if it originated from this entry.
    pub fn delete_named(&self, id: u64) -> Result<(), StoreError> {
        self.store.delete_custom(id)
    }

    /// Wire-format export of the committed config, paired with a dated
    /// artifact file name.
    pub fn export(&self) -> Result<(String, String), StoreError> {
        let json = serde_json::to_string_pretty(&self.committed)?;
        let name = format!(
            "themely-theme-{}.json",
            chrono::Local::now().format("%Y-%m-%d")
        );
        Ok((name, json))
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn committed(&self) -> &ThemeConfig {
        &self.committed
    }

    /// The draft currently previewed, if any.
    pub fn draft(&self) -> Option<ThemeConfig> {
        self.overlay.as_ref().map(|o| o.draft())
    }

    pub fn warning(&self) -> Option<&ThemeWarning> {
        self.warning.as_ref()
    }

    pub fn take_warning(&mut self) -> Option<ThemeWarning> {
        self.warning.take()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    async fn persist_committed(&mut self) {
        if let Err(e) = self.store.save(&self.committed).await {
            self.record_warning(e);
        } else {
            self.warning = None;
        }
    }

    fn record_warning(&mut self, err: StoreError) {
        let warning = match err {
            StoreError::RemoteSync(e) => ThemeWarning::SyncFailed(e.to_string()),
            other => ThemeWarning::StorageFailed(other.to_string()),
        };
        log::warn!("theme persistence degraded: {:?}", warning);
        self.warning = Some(warning);
    }
}
