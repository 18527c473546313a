//! Application state shared across handlers.

use std::sync::Arc;

use peppercorn_core::CatalogStore;

use crate::config::ServerConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the catalog store. The store is constructed once at
/// startup (or per test) and injected here; there is no ambient singleton.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    store: CatalogStore,
}

impl AppState {
    /// Create a new application state around an existing store.
    #[must_use]
    pub fn new(config: ServerConfig, store: CatalogStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, store }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog store.
    #[must_use]
    pub fn store(&self) -> &CatalogStore {
        &self.inner.store
    }
}
