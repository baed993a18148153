//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::services::{SettingsClient, SettingsStore};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Settings are not ambient: consumers reach
/// them through this state, keeping ownership and lifetime explicit.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    settings_client: SettingsClient,
    settings: SettingsStore,
}

impl AppState {
    /// Create a new application state from configuration.
    ///
    /// The settings store starts in the loading state; call
    /// [`AppState::load_settings`] once at startup to populate it.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let settings_client = SettingsClient::new(&config.api_base_url);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                settings_client,
                settings: SettingsStore::new(),
            }),
        }
    }

    /// Perform the one-shot settings fetch into the store.
    pub async fn load_settings(&self) {
        self.inner
            .settings
            .load(&self.inner.settings_client)
            .await;
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the session-wide settings store.
    #[must_use]
    pub fn settings(&self) -> &SettingsStore {
        &self.inner.settings
    }
}
