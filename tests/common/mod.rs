// Common test utilities for theme engine integration tests

use std::sync::Arc;
use tempfile::TempDir;
use themely::controller::ThemeController;
use themely::sink::MemorySink;
use themely::store::{ConfigStore, LocalStore, MemoryRepository};

/// A controller wired to a throwaway config dir, an in-memory remote with
/// failure injection, and an in-memory token sink. The TempDir must be
/// kept alive by the caller for the duration of the test.
#[allow(dead_code)]
pub fn controller_in(dir: &TempDir) -> (ThemeController<MemorySink>, Arc<MemoryRepository>) {
    let remote = Arc::new(MemoryRepository::new());
    let store = ConfigStore::new(
        LocalStore::with_dir(dir.path().to_path_buf()),
        remote.clone(),
    );
    (ThemeController::new(store, MemorySink::new()), remote)
}

/// A second controller sharing the same local dir and remote, simulating a
/// fresh session against the same persistence.
#[allow(dead_code)]
pub fn fresh_session(
    dir: &TempDir,
    remote: Arc<MemoryRepository>,
) -> ThemeController<MemorySink> {
    let store = ConfigStore::new(LocalStore::with_dir(dir.path().to_path_buf()), remote);
    ThemeController::new(store, MemorySink::new())
}
